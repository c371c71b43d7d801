//! Scenario input and its clamping boundary
//!
//! `ScenarioInput` holds the four values a grower enters. Values are clamped
//! into their declared ranges before they reach the rules, so the rules never
//! see out-of-domain numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

pub const RAINFALL_RANGE_MM: (f64, f64) = (0.0, 1000.0);
pub const TEMP_RANGE_C: (f64, f64) = (-10.0, 50.0);
pub const MAX_DAYS_SINCE_PLANTING: u32 = 120;

/// Soil texture class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoilType {
    Loam,
    Clay,
    Sandy,
}

impl SoilType {
    /// Loam and clay hold water; sandy soil does not
    pub fn retains_water(&self) -> bool {
        matches!(self, SoilType::Loam | SoilType::Clay)
    }

    pub fn code(&self) -> &'static str {
        match self {
            SoilType::Loam => "loam",
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
        }
    }

    pub fn all() -> &'static [SoilType] {
        &[SoilType::Loam, SoilType::Clay, SoilType::Sandy]
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SoilType {
    type Err = EvalError;

    /// Accepts English codes and Portuguese names (franco / argiloso / arenoso)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loam" | "franco" => Ok(SoilType::Loam),
            "clay" | "argiloso" => Ok(SoilType::Clay),
            "sandy" | "arenoso" => Ok(SoilType::Sandy),
            _ => Err(EvalError::invalid_input("soil_type", s)),
        }
    }
}

/// One evaluation request. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Expected rainfall (mm), 0-1000
    pub rainfall_mm: f64,

    /// Average temperature (°C), -10 to 50
    pub avg_temp_c: f64,

    pub soil_type: SoilType,

    /// Days since planting, 0-120
    pub days_since_planting: u32,
}

impl ScenarioInput {
    /// Build an input with every value forced into its declared range.
    /// NaN clamps to the lower bound; negative days clamp to 0.
    pub fn clamped(rainfall_mm: f64, avg_temp_c: f64, soil_type: SoilType, days_since_planting: i64) -> Self {
        Self {
            rainfall_mm: clamp_finite(rainfall_mm, RAINFALL_RANGE_MM),
            avg_temp_c: clamp_finite(avg_temp_c, TEMP_RANGE_C),
            soil_type,
            days_since_planting: clamp_days(days_since_planting),
        }
    }

    /// Same as [`ScenarioInput::clamped`] but takes the soil as text.
    pub fn parse(rainfall_mm: f64, avg_temp_c: f64, soil: &str, days_since_planting: i64) -> Result<Self, EvalError> {
        let soil_type = soil.parse()?;
        Ok(Self::clamped(rainfall_mm, avg_temp_c, soil_type, days_since_planting))
    }
}

impl Default for ScenarioInput {
    /// Starting values of the input form
    fn default() -> Self {
        Self {
            rainfall_mm: 120.0,
            avg_temp_c: 25.0,
            soil_type: SoilType::Loam,
            days_since_planting: 20,
        }
    }
}

fn clamp_days(days: i64) -> u32 {
    // In [0, 120] after the clamp, so the cast is lossless
    days.clamp(0, i64::from(MAX_DAYS_SINCE_PLANTING)) as u32
}

fn clamp_finite(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}
