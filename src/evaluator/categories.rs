//! Outcome keys and severity tags
//!
//! Every rule returns an abstract key plus a severity. Keys are never
//! display text; the `i18n` module maps them to localized labels.

use serde::{Deserialize, Serialize};

/// Tri-state classification driving display emphasis/color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Good,
    Warning,
    Bad,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Bad => "bad",
        }
    }
}

/// An outcome key paired with its severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category<K> {
    pub key: K,
    pub severity: Severity,
}

impl<K> Category<K> {
    pub const fn new(key: K, severity: Severity) -> Self {
        Self { key, severity }
    }
}

/// Planting recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlantingDecision {
    /// Climate window met, soil retains water
    CanPlant,
    /// Climate window met, but sandy soil
    SoilLimiting,
    /// Rainfall or temperature outside the window
    DoNotPlant,
}

/// Maize development stage, ordered by days since planting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrowthPhase {
    /// Days 0-15
    Emergence,
    /// Days 16-45
    VegetativeGrowth,
    /// Days 46-65
    Flowering,
    /// Day 66 onwards
    FillingAndMaturity,
}

impl GrowthPhase {
    pub fn all() -> &'static [GrowthPhase] {
        &[
            GrowthPhase::Emergence,
            GrowthPhase::VegetativeGrowth,
            GrowthPhase::Flowering,
            GrowthPhase::FillingAndMaturity,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PestAlert {
    HighPestRisk,
    NoSignificantRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaterAlert {
    HighWaterNeed,
    AdequateWater,
}

/// Three-tier productivity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductivityTier {
    High,
    Medium,
    Low,
}

impl ProductivityTier {
    /// Fixed gauge value for the tier (not a linear function of points)
    pub const fn display_value(&self) -> u8 {
        match self {
            ProductivityTier::High => 90,
            ProductivityTier::Medium => 60,
            ProductivityTier::Low => 30,
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            ProductivityTier::High => Severity::Good,
            ProductivityTier::Medium => Severity::Warning,
            ProductivityTier::Low => Severity::Bad,
        }
    }
}

/// Productivity outcome: tier, internal 0-5 tally and display value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Productivity {
    pub tier: ProductivityTier,
    pub points: u8,
    pub score: u8,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_ordering() {
        let phases = GrowthPhase::all();
        assert!(phases.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_keys_serialize_as_screaming_snake_case() {
        let json = serde_json::to_string(&Category::new(PlantingDecision::SoilLimiting, Severity::Warning)).unwrap();
        assert_eq!(json, r#"{"key":"SOIL_LIMITING","severity":"WARNING"}"#);
    }

    #[test]
    fn test_tier_display_values() {
        assert_eq!(ProductivityTier::High.display_value(), 90);
        assert_eq!(ProductivityTier::Medium.display_value(), 60);
        assert_eq!(ProductivityTier::Low.display_value(), 30);
    }
}
