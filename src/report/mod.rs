//! Report rendering
//!
//! Turns an `EvaluationResult` into a localized page. Language selection
//! happens here and nowhere upstream.
//!
//! - `view.rs` - PageView / ReportView / CardView / GaugeView
//! - `formatters/` - Markdown, JSON and HTML (askama) output

pub mod view;
pub mod formatters;

use std::fmt;
use std::str::FromStr;

use crate::error::{EvalError, Result};
use crate::evaluator::{evaluate, ScenarioInput};
use crate::i18n::Language;

pub use view::{severity_color, CardView, FormView, GaugeView, OptionView, PageView, ReportView};
pub use formatters::{EvaluationEnvelope, HtmlFormatter, JsonFormatter, MarkdownFormatter};

/// Output format for [`render_report`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Html,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        })
    }
}

impl FromStr for ReportFormat {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            _ => Err(EvalError::invalid_input("format", s)),
        }
    }
}

/// Evaluate `input` and render it in `language`
pub fn render_report(input: &ScenarioInput, language: Language, format: ReportFormat) -> Result<String> {
    let result = evaluate(input);

    match format {
        ReportFormat::Markdown => {
            let page = PageView::build(input, Some(&result), language);
            Ok(MarkdownFormatter::format(&page))
        }
        ReportFormat::Json => {
            let report = ReportView::build(&result, language);
            let envelope = EvaluationEnvelope {
                input,
                result: &result,
                report: &report,
            };
            Ok(JsonFormatter::format(&envelope)?)
        }
        ReportFormat::Html => {
            let page = PageView::build(input, Some(&result), language);
            HtmlFormatter::format(&page)
        }
    }
}
