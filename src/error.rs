//! Error types for scenario parsing, localization and report rendering.
//!
//! The rule engine itself is total over its declared input domain; the only
//! failures come from the boundary (unparseable categories) and from the
//! rendering layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("unsupported language: {0:?} (expected pt, en or fr)")]
    UnsupportedLanguage(String),

    #[error("template rendering failed: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EvalError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        EvalError::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// True when the caller supplied bad input (maps to HTTP 400).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EvalError::InvalidInput { .. } | EvalError::UnsupportedLanguage(_)
        )
    }
}

impl From<askama::Error> for EvalError {
    fn from(err: askama::Error) -> Self {
        EvalError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
