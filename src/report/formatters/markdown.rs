use crate::report::view::{CardView, PageView, ReportView};

/// Markdown formatter for reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a full page (header, inputs, report, footer) as markdown
    pub fn format(page: &PageView) -> String {
        let mut lines = Vec::new();

        lines.push(format!("# {}", page.title));
        lines.push(String::new());
        lines.push(format!("*{}*", page.subtitle));
        lines.push(String::new());

        let form = &page.form;
        let soil = form
            .soil_options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.label.as_str())
            .unwrap_or("-");
        lines.push(format!("- **{}:** {}", form.rainfall_label, form.rainfall_mm));
        lines.push(format!("- **{}:** {}", form.temperature_label, form.avg_temp_c));
        lines.push(format!("- **{}:** {}", form.soil_label, soil));
        lines.push(format!("- **{}:** {}", form.days_label, form.days_since_planting));
        lines.push(String::new());

        if let Some(report) = &page.report {
            lines.push(Self::format_report(report));
        }

        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(page.footer.clone());

        lines.join("\n")
    }

    /// Format only the result cards and gauge
    pub fn format_report(report: &ReportView) -> String {
        let mut md = String::with_capacity(1024);

        for card in report.alert_cards() {
            md.push_str(&Self::card(card));
        }

        let gauge = &report.gauge;
        md.push_str(&format!("## {}\n\n", report.productivity.heading));
        md.push_str(&format!(
            "**{}**: {}{} ({})\n\n",
            gauge.title, gauge.value, gauge.suffix, report.productivity.severity_label
        ));
        md.push_str(&format!("`{}`\n\n", Self::bar(gauge.value, gauge.max)));

        md
    }

    fn card(card: &CardView) -> String {
        format!("## {}\n\n**{}** ({})\n\n", card.heading, card.text, card.severity_label)
    }

    /// Text gauge, one cell per 10%
    fn bar(value: u8, max: u8) -> String {
        let cells = 10usize;
        let filled = if max == 0 {
            0
        } else {
            (usize::from(value) * cells / usize::from(max)).min(cells)
        };
        format!("[{}{}]", "#".repeat(filled), ".".repeat(cells - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{evaluate, ScenarioInput, SoilType};
    use crate::i18n::Language;

    #[test]
    fn test_format_markdown_en() {
        let input = ScenarioInput::default();
        let result = evaluate(&input);
        let page = PageView::build(&input, Some(&result), Language::En);

        let md = MarkdownFormatter::format(&page);

        assert!(md.starts_with("# 🌽 Smart Maize"));
        assert!(md.contains("- **Soil Type:** Loam"));
        assert!(md.contains("## Planting Decision\n\n**Can Plant 🌱** (Favorable)"));
        assert!(md.contains("**High Productivity 🚀**: 90% (Favorable)"));
        assert!(md.contains("`[#########.]`"));
        assert!(md.ends_with("Developed by Pascoal Barros at Frondosa Agronomic"));
    }

    #[test]
    fn test_format_without_report() {
        let page = PageView::build(&ScenarioInput::default(), None, Language::Pt);
        let md = MarkdownFormatter::format(&page);
        assert!(!md.contains("## "));
        assert!(md.contains("Chuva prevista (mm)"));
    }

    #[test]
    fn test_low_productivity_bar() {
        let input = ScenarioInput::clamped(40.0, 35.0, SoilType::Sandy, 50);
        let report = ReportView::build(&evaluate(&input), Language::Fr);
        let md = MarkdownFormatter::format_report(&report);
        assert!(md.contains("`[###.......]`"));
        assert!(md.contains("Productivité faible 🛑"));
    }
}
