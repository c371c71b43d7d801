//! Languages and label keys
//!
//! Outcome keys from the evaluator convert into `LabelKey`s here, so the
//! evaluator never depends on localization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::evaluator::{
    GrowthPhase, PestAlert, PlantingDecision, ProductivityTier, Severity, SoilType, WaterAlert,
};

/// Report language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Value for the HTML `lang` attribute
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::Pt => "pt-PT",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Pt, Language::En, Language::Fr]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            _ => Err(EvalError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Every piece of text the report can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    // Page chrome
    Title,
    Subtitle,
    LanguageSelector,
    Footer,

    // Input form
    RainfallInput,
    TemperatureInput,
    SoilInput,
    DaysInput,
    AnalyzeButton,
    SoilLoam,
    SoilClay,
    SoilSandy,

    // Card headings
    DecisionHeading,
    CropPhaseHeading,
    PestsHeading,
    WaterHeading,
    ProductivityHeading,

    // Outcomes
    CanPlant,
    SoilLimiting,
    DoNotPlant,
    PhaseEmergence,
    PhaseVegetativeGrowth,
    PhaseFlowering,
    PhaseFillingAndMaturity,
    PestRisk,
    PestOk,
    WaterHigh,
    WaterOk,
    ProductivityHigh,
    ProductivityMedium,
    ProductivityLow,

    // Severities
    SeverityGood,
    SeverityWarning,
    SeverityBad,
}

impl LabelKey {
    pub fn all() -> &'static [LabelKey] {
        use LabelKey::*;
        &[
            Title, Subtitle, LanguageSelector, Footer,
            RainfallInput, TemperatureInput, SoilInput, DaysInput, AnalyzeButton,
            SoilLoam, SoilClay, SoilSandy,
            DecisionHeading, CropPhaseHeading, PestsHeading, WaterHeading, ProductivityHeading,
            CanPlant, SoilLimiting, DoNotPlant,
            PhaseEmergence, PhaseVegetativeGrowth, PhaseFlowering, PhaseFillingAndMaturity,
            PestRisk, PestOk, WaterHigh, WaterOk,
            ProductivityHigh, ProductivityMedium, ProductivityLow,
            SeverityGood, SeverityWarning, SeverityBad,
        ]
    }
}

impl From<PlantingDecision> for LabelKey {
    fn from(key: PlantingDecision) -> Self {
        match key {
            PlantingDecision::CanPlant => LabelKey::CanPlant,
            PlantingDecision::SoilLimiting => LabelKey::SoilLimiting,
            PlantingDecision::DoNotPlant => LabelKey::DoNotPlant,
        }
    }
}

impl From<GrowthPhase> for LabelKey {
    fn from(key: GrowthPhase) -> Self {
        match key {
            GrowthPhase::Emergence => LabelKey::PhaseEmergence,
            GrowthPhase::VegetativeGrowth => LabelKey::PhaseVegetativeGrowth,
            GrowthPhase::Flowering => LabelKey::PhaseFlowering,
            GrowthPhase::FillingAndMaturity => LabelKey::PhaseFillingAndMaturity,
        }
    }
}

impl From<PestAlert> for LabelKey {
    fn from(key: PestAlert) -> Self {
        match key {
            PestAlert::HighPestRisk => LabelKey::PestRisk,
            PestAlert::NoSignificantRisk => LabelKey::PestOk,
        }
    }
}

impl From<WaterAlert> for LabelKey {
    fn from(key: WaterAlert) -> Self {
        match key {
            WaterAlert::HighWaterNeed => LabelKey::WaterHigh,
            WaterAlert::AdequateWater => LabelKey::WaterOk,
        }
    }
}

impl From<ProductivityTier> for LabelKey {
    fn from(key: ProductivityTier) -> Self {
        match key {
            ProductivityTier::High => LabelKey::ProductivityHigh,
            ProductivityTier::Medium => LabelKey::ProductivityMedium,
            ProductivityTier::Low => LabelKey::ProductivityLow,
        }
    }
}

impl From<Severity> for LabelKey {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Good => LabelKey::SeverityGood,
            Severity::Warning => LabelKey::SeverityWarning,
            Severity::Bad => LabelKey::SeverityBad,
        }
    }
}

impl From<SoilType> for LabelKey {
    fn from(soil: SoilType) -> Self {
        match soil {
            SoilType::Loam => LabelKey::SoilLoam,
            SoilType::Clay => LabelKey::SoilClay,
            SoilType::Sandy => LabelKey::SoilSandy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" fr".parse::<Language>().unwrap(), Language::Fr);
        assert!(matches!("de".parse::<Language>(), Err(EvalError::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_default_language_is_portuguese() {
        assert_eq!(Language::default(), Language::Pt);
    }

    #[test]
    fn test_outcome_keys_map_to_distinct_labels() {
        let phases: Vec<LabelKey> = GrowthPhase::all().iter().map(|p| (*p).into()).collect();
        for (i, a) in phases.iter().enumerate() {
            for b in &phases[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
