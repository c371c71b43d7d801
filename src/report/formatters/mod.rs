pub mod markdown;
pub mod json;
pub mod html;

pub use markdown::MarkdownFormatter;
pub use json::{EvaluationEnvelope, JsonFormatter};
pub use html::HtmlFormatter;
