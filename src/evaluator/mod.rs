//! Agronomic Evaluator
//!
//! Maps a maize planting scenario (rainfall, temperature, soil, crop age) to
//! a planting decision, growth phase, pest alert, water alert and
//! productivity tier. Every function here is pure and stateless.
//!
//! ## Architecture
//! - `scenario.rs` - ScenarioInput, SoilType, input clamping
//! - `categories.rs` - Outcome keys and Severity
//! - `rules.rs` - The five rule functions
//! - `assessment.rs` - EvaluationResult and `evaluate`

pub mod scenario;
pub mod categories;
pub mod rules;
pub mod assessment;

pub use scenario::{ScenarioInput, SoilType};
pub use categories::{
    Category,
    GrowthPhase,
    PestAlert,
    PlantingDecision,
    Productivity,
    ProductivityTier,
    Severity,
    WaterAlert,
};
pub use rules::{evaluate_planting, growth_phase, pest_alert, productivity, water_alert};
pub use assessment::{evaluate, EvaluationResult};
