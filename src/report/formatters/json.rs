use serde::Serialize;

use crate::evaluator::{EvaluationResult, ScenarioInput};
use crate::report::view::ReportView;

/// Machine-readable envelope: clamped input, raw keyed result, localized view
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationEnvelope<'a> {
    pub input: &'a ScenarioInput,
    pub result: &'a EvaluationResult,
    pub report: &'a ReportView,
}

/// JSON formatter for reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format as pretty-printed JSON
    pub fn format(envelope: &EvaluationEnvelope<'_>) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(envelope)
    }

    pub fn to_value(envelope: &EvaluationEnvelope<'_>) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{evaluate, SoilType};
    use crate::i18n::Language;

    #[test]
    fn test_format_json() {
        let input = ScenarioInput::clamped(60.0, 25.0, SoilType::Sandy, 50);
        let result = evaluate(&input);
        let report = ReportView::build(&result, Language::En);
        let envelope = EvaluationEnvelope { input: &input, result: &result, report: &report };

        let json = JsonFormatter::format(&envelope).unwrap();

        assert!(json.contains("\"soil_type\": \"SANDY\""));
        assert!(json.contains("\"key\": \"SOIL_LIMITING\""));
        assert!(json.contains("\"key\": \"FLOWERING\""));
        assert!(json.contains("\"productivity_score\": 60"));
        assert!(json.contains("\"language\": \"en\""));
    }

    #[test]
    fn test_to_value() {
        let input = ScenarioInput::default();
        let result = evaluate(&input);
        let report = ReportView::build(&result, Language::Pt);
        let envelope = EvaluationEnvelope { input: &input, result: &result, report: &report };

        let value = JsonFormatter::to_value(&envelope).unwrap();
        assert_eq!(value["result"]["pest_alert"]["key"], "HIGH_PEST_RISK");
        assert_eq!(value["report"]["gauge"]["value"], 90);
    }
}
