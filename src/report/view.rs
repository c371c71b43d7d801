//! Localized view models
//!
//! The last step before output: outcome keys become translated text and
//! severities become colors. Built from an `EvaluationResult` and an explicit
//! `Language`.

use serde::{Deserialize, Serialize};

use crate::evaluator::{EvaluationResult, ScenarioInput, Severity, SoilType};
use crate::i18n::{LabelKey, LabelTable, Language};

/// Card accent color for a severity
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "#1E7F4E",
        Severity::Warning => "#D4A017",
        Severity::Bad => "#B3261E",
    }
}

/// One result card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub heading: String,
    pub text: String,
    pub severity: Severity,
    pub severity_label: String,
    pub color: String,
}

impl CardView {
    fn new(labels: &LabelTable, heading: LabelKey, text: LabelKey, severity: Severity) -> Self {
        Self {
            heading: labels.get(heading).to_string(),
            text: labels.get(text).to_string(),
            severity,
            severity_label: labels.get(severity).to_string(),
            color: severity_color(severity).to_string(),
        }
    }
}

/// Productivity gauge (0-100 scale)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeView {
    pub title: String,
    pub value: u8,
    pub min: u8,
    pub max: u8,
    pub suffix: String,
    pub color: String,
    /// SVG path of the grey track (half circle)
    pub track_path: String,
    /// SVG path of the colored bar up to `value`
    pub bar_path: String,
}

// Gauge geometry in a 200x110 viewBox
const GAUGE_CX: f64 = 100.0;
const GAUGE_CY: f64 = 100.0;
const GAUGE_R: f64 = 80.0;

impl GaugeView {
    pub fn new(title: &str, value: u8, color: &str) -> Self {
        let value = value.min(100);
        Self {
            title: title.to_string(),
            value,
            min: 0,
            max: 100,
            suffix: "%".to_string(),
            color: color.to_string(),
            track_path: arc_path(100),
            bar_path: arc_path(value),
        }
    }
}

/// End point of the gauge arc for `value` (0 = left, 100 = right)
pub fn arc_end_point(value: u8) -> (f64, f64) {
    let angle = std::f64::consts::PI * f64::from(value.min(100)) / 100.0;
    (GAUGE_CX - GAUGE_R * angle.cos(), GAUGE_CY - GAUGE_R * angle.sin())
}

fn arc_path(value: u8) -> String {
    let (x, y) = arc_end_point(value);
    // Never more than half a circle, so the large-arc flag stays 0
    format!(
        "M {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2}",
        GAUGE_CX - GAUGE_R,
        GAUGE_CY,
        x,
        y,
        r = GAUGE_R
    )
}

/// Localized rendering of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub language: Language,
    pub decision: CardView,
    pub phase: CardView,
    pub pests: CardView,
    pub water: CardView,
    pub productivity: CardView,
    pub gauge: GaugeView,
}

impl ReportView {
    pub fn build(result: &EvaluationResult, language: Language) -> Self {
        let labels = LabelTable::for_language(language);

        let productivity = CardView::new(
            labels,
            LabelKey::ProductivityHeading,
            result.productivity.key.into(),
            result.productivity.severity,
        );
        let gauge = GaugeView::new(&productivity.text, result.productivity_score, &productivity.color);

        Self {
            language,
            decision: CardView::new(
                labels,
                LabelKey::DecisionHeading,
                result.planting_decision.key.into(),
                result.planting_decision.severity,
            ),
            phase: CardView::new(
                labels,
                LabelKey::CropPhaseHeading,
                result.growth_phase.key.into(),
                result.growth_phase.severity,
            ),
            pests: CardView::new(
                labels,
                LabelKey::PestsHeading,
                result.pest_alert.key.into(),
                result.pest_alert.severity,
            ),
            water: CardView::new(
                labels,
                LabelKey::WaterHeading,
                result.water_alert.key.into(),
                result.water_alert.severity,
            ),
            productivity,
            gauge,
        }
    }

    /// The four text cards; productivity is shown by the gauge instead
    pub fn alert_cards(&self) -> [&CardView; 4] {
        [&self.decision, &self.phase, &self.pests, &self.water]
    }
}

/// `<option>` entry for a select box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Input form, prefilled with the current scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub rainfall_label: String,
    pub rainfall_mm: String,
    pub temperature_label: String,
    pub avg_temp_c: String,
    pub soil_label: String,
    pub soil_options: Vec<OptionView>,
    pub days_label: String,
    pub days_since_planting: u32,
    pub button: String,
}

impl FormView {
    pub fn build(input: &ScenarioInput, labels: &LabelTable) -> Self {
        let soil_options = SoilType::all()
            .iter()
            .map(|soil| OptionView {
                value: soil.code().to_string(),
                label: labels.get(*soil).to_string(),
                selected: *soil == input.soil_type,
            })
            .collect();

        Self {
            rainfall_label: labels.get(LabelKey::RainfallInput).to_string(),
            rainfall_mm: format!("{:.1}", input.rainfall_mm),
            temperature_label: labels.get(LabelKey::TemperatureInput).to_string(),
            avg_temp_c: format!("{:.1}", input.avg_temp_c),
            soil_label: labels.get(LabelKey::SoilInput).to_string(),
            soil_options,
            days_label: labels.get(LabelKey::DaysInput).to_string(),
            days_since_planting: input.days_since_planting,
            button: labels.get(LabelKey::AnalyzeButton).to_string(),
        }
    }
}

/// Whole page: header, language picker, form, optional report, footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub html_lang: String,
    pub title: String,
    pub subtitle: String,
    pub language_label: String,
    pub languages: Vec<OptionView>,
    pub form: FormView,
    pub report: Option<ReportView>,
    pub footer: String,
}

impl PageView {
    pub fn build(input: &ScenarioInput, result: Option<&EvaluationResult>, language: Language) -> Self {
        let labels = LabelTable::for_language(language);

        let languages = Language::all()
            .iter()
            .map(|lang| OptionView {
                value: lang.code().to_string(),
                label: lang.code().to_uppercase(),
                selected: *lang == language,
            })
            .collect();

        Self {
            html_lang: language.html_lang().to_string(),
            title: labels.get(LabelKey::Title).to_string(),
            subtitle: labels.get(LabelKey::Subtitle).to_string(),
            language_label: labels.get(LabelKey::LanguageSelector).to_string(),
            languages,
            form: FormView::build(input, labels),
            report: result.map(|r| ReportView::build(r, language)),
            footer: labels.get(LabelKey::Footer).to_string(),
        }
    }

    pub fn report_view(&self) -> Option<&ReportView> {
        self.report.as_ref()
    }
}
