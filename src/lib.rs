//! Smart Maize
//!
//! Decision support for maize planting: from expected rainfall, average
//! temperature, soil type and days since planting, produce a planting
//! recommendation, growth phase, pest and irrigation alerts, and a
//! productivity gauge, rendered as a localized (PT / EN / FR) report.
//!
//! - `evaluator/`: Pure agronomic rules (no localization)
//! - `i18n/`: Label tables keyed by abstract outcome keys
//! - `report/`: View models and Markdown / JSON / HTML formatters
//! - `config`: Server settings from the environment
//! - `api_server`: Axum HTTP surface (feature `api`)

pub mod error;
pub mod evaluator;
pub mod i18n;
pub mod report;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{EvalError, Result};
pub use evaluator::{evaluate, EvaluationResult, ScenarioInput, Severity, SoilType};
pub use i18n::{LabelTable, Language};
pub use report::{render_report, ReportFormat};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
