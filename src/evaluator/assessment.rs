//! Evaluation result
//!
//! Aggregates the five rule outcomes for one scenario.

use serde::{Deserialize, Serialize};

use super::categories::*;
use super::rules::{evaluate_planting, growth_phase, pest_alert, productivity, water_alert};
use super::scenario::ScenarioInput;

/// Complete outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub planting_decision: Category<PlantingDecision>,

    /// Growth phase is informational; its severity is always `Good`
    pub growth_phase: Category<GrowthPhase>,

    pub pest_alert: Category<PestAlert>,

    pub water_alert: Category<WaterAlert>,

    pub productivity: Category<ProductivityTier>,

    /// Gauge value: 30, 60 or 90
    pub productivity_score: u8,

    /// Internal 0-5 tally behind the tier
    pub productivity_points: u8,
}

impl EvaluationResult {
    /// Severities in card order (planting, phase, pests, water, productivity)
    pub fn severities(&self) -> [Severity; 5] {
        [
            self.planting_decision.severity,
            self.growth_phase.severity,
            self.pest_alert.severity,
            self.water_alert.severity,
            self.productivity.severity,
        ]
    }
}

/// Run every rule against one scenario
pub fn evaluate(input: &ScenarioInput) -> EvaluationResult {
    let ScenarioInput {
        rainfall_mm,
        avg_temp_c,
        soil_type,
        days_since_planting,
    } = *input;

    let planting_decision = evaluate_planting(rainfall_mm, avg_temp_c, soil_type);
    let phase = growth_phase(days_since_planting);
    let pests = pest_alert(phase, avg_temp_c);
    let water = water_alert(rainfall_mm, soil_type);
    let prod = productivity(rainfall_mm, avg_temp_c, soil_type);

    tracing::debug!(
        decision = ?planting_decision.key,
        phase = ?phase,
        pests = ?pests.key,
        water = ?water.key,
        productivity = prod.score,
        "Evaluated scenario"
    );

    EvaluationResult {
        planting_decision,
        growth_phase: Category::new(phase, Severity::Good),
        pest_alert: pests,
        water_alert: water,
        productivity: Category::new(prod.tier, prod.severity),
        productivity_score: prod.score,
        productivity_points: prod.points,
    }
}
