//! Agronomic rules
//!
//! Five independent pure functions. Thresholds are fixed constants.
//! Pest risk consumes the computed growth phase, not raw days, and compares
//! phase keys rather than any localized label.

use super::categories::*;
use super::scenario::SoilType;

/// Minimum rainfall (mm) for planting and for the productivity bonus
pub const MIN_RAINFALL_MM: f64 = 60.0;

/// Rainfall (mm) below which irrigation is needed
pub const IRRIGATION_RAINFALL_MM: f64 = 50.0;

/// Favorable average temperature window (°C), inclusive
pub const TEMP_WINDOW_C: (f64, f64) = (18.0, 30.0);

/// Temperature (°C) from which fall armyworm pressure rises during vegetative growth
pub const PEST_TEMP_C: f64 = 20.0;

/// Last day (inclusive) of each phase before filling and maturity
const EMERGENCE_LAST_DAY: u32 = 15;
const VEGETATIVE_LAST_DAY: u32 = 45;
const FLOWERING_LAST_DAY: u32 = 65;

const TEMP_POINTS: u8 = 2;
const RAINFALL_POINTS: u8 = 2;
const SOIL_POINTS: u8 = 1;

#[inline]
fn temp_in_window(temp: f64) -> bool {
    (TEMP_WINDOW_C.0..=TEMP_WINDOW_C.1).contains(&temp)
}

#[inline]
fn enough_rain(rainfall: f64) -> bool {
    rainfall >= MIN_RAINFALL_MM
}

/// Planting recommendation from rainfall, temperature and soil
pub fn evaluate_planting(rainfall: f64, temp: f64, soil: SoilType) -> Category<PlantingDecision> {
    if enough_rain(rainfall) && temp_in_window(temp) {
        if soil.retains_water() {
            Category::new(PlantingDecision::CanPlant, Severity::Good)
        } else {
            Category::new(PlantingDecision::SoilLimiting, Severity::Warning)
        }
    } else {
        Category::new(PlantingDecision::DoNotPlant, Severity::Bad)
    }
}

/// Growth phase from days since planting. Partitions `[0, ∞)`.
pub fn growth_phase(days: u32) -> GrowthPhase {
    if days <= EMERGENCE_LAST_DAY {
        GrowthPhase::Emergence
    } else if days <= VEGETATIVE_LAST_DAY {
        GrowthPhase::VegetativeGrowth
    } else if days <= FLOWERING_LAST_DAY {
        GrowthPhase::Flowering
    } else {
        GrowthPhase::FillingAndMaturity
    }
}

pub fn pest_alert(phase: GrowthPhase, temp: f64) -> Category<PestAlert> {
    if phase == GrowthPhase::VegetativeGrowth && temp >= PEST_TEMP_C {
        Category::new(PestAlert::HighPestRisk, Severity::Bad)
    } else {
        Category::new(PestAlert::NoSignificantRisk, Severity::Good)
    }
}

pub fn water_alert(rainfall: f64, soil: SoilType) -> Category<WaterAlert> {
    if rainfall < IRRIGATION_RAINFALL_MM || soil == SoilType::Sandy {
        Category::new(WaterAlert::HighWaterNeed, Severity::Bad)
    } else {
        Category::new(WaterAlert::AdequateWater, Severity::Good)
    }
}

/// Productivity tally (0-5) bucketed into three fixed display values
pub fn productivity(rainfall: f64, temp: f64, soil: SoilType) -> Productivity {
    let mut points = 0;
    if temp_in_window(temp) {
        points += TEMP_POINTS;
    }
    if enough_rain(rainfall) {
        points += RAINFALL_POINTS;
    }
    if soil.retains_water() {
        points += SOIL_POINTS;
    }

    let tier = if points >= 5 {
        ProductivityTier::High
    } else if points >= 3 {
        ProductivityTier::Medium
    } else {
        ProductivityTier::Low
    };

    Productivity {
        tier,
        points,
        score: tier.display_value(),
        severity: tier.severity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planting_window() {
        assert_eq!(evaluate_planting(60.0, 18.0, SoilType::Loam).key, PlantingDecision::CanPlant);
        assert_eq!(evaluate_planting(60.0, 30.0, SoilType::Clay).key, PlantingDecision::CanPlant);
        assert_eq!(
            evaluate_planting(120.0, 25.0, SoilType::Sandy),
            Category::new(PlantingDecision::SoilLimiting, Severity::Warning)
        );
    }

    #[test]
    fn test_planting_outside_window() {
        for soil in SoilType::all() {
            assert_eq!(evaluate_planting(59.9, 25.0, *soil).key, PlantingDecision::DoNotPlant);
            assert_eq!(evaluate_planting(120.0, 17.9, *soil).key, PlantingDecision::DoNotPlant);
            assert_eq!(evaluate_planting(120.0, 30.1, *soil).severity, Severity::Bad);
        }
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(growth_phase(0), GrowthPhase::Emergence);
        assert_eq!(growth_phase(15), GrowthPhase::Emergence);
        assert_eq!(growth_phase(16), GrowthPhase::VegetativeGrowth);
        assert_eq!(growth_phase(45), GrowthPhase::VegetativeGrowth);
        assert_eq!(growth_phase(46), GrowthPhase::Flowering);
        assert_eq!(growth_phase(65), GrowthPhase::Flowering);
        assert_eq!(growth_phase(66), GrowthPhase::FillingAndMaturity);
        assert_eq!(growth_phase(u32::MAX), GrowthPhase::FillingAndMaturity);
    }

    #[test]
    fn test_pest_temperature_boundary() {
        assert_eq!(
            pest_alert(GrowthPhase::VegetativeGrowth, 20.0),
            Category::new(PestAlert::HighPestRisk, Severity::Bad)
        );
        assert_eq!(
            pest_alert(GrowthPhase::VegetativeGrowth, 19.0),
            Category::new(PestAlert::NoSignificantRisk, Severity::Good)
        );
    }

    #[test]
    fn test_pest_risk_only_in_vegetative_growth() {
        for phase in GrowthPhase::all() {
            let alert = pest_alert(*phase, 35.0);
            let expected = *phase == GrowthPhase::VegetativeGrowth;
            assert_eq!(alert.key == PestAlert::HighPestRisk, expected, "{:?}", phase);
        }
    }

    #[test]
    fn test_water_alert() {
        assert_eq!(water_alert(30.0, SoilType::Loam).key, WaterAlert::HighWaterNeed);
        assert_eq!(water_alert(80.0, SoilType::Sandy).key, WaterAlert::HighWaterNeed);
        assert_eq!(water_alert(50.0, SoilType::Clay), Category::new(WaterAlert::AdequateWater, Severity::Good));
        assert_eq!(water_alert(49.9, SoilType::Clay).severity, Severity::Bad);
    }

    #[test]
    fn test_productivity_tiers() {
        let high = productivity(120.0, 25.0, SoilType::Loam);
        assert_eq!((high.points, high.tier, high.score, high.severity), (5, ProductivityTier::High, 90, Severity::Good));

        let low = productivity(40.0, 35.0, SoilType::Sandy);
        assert_eq!((low.points, low.tier, low.score, low.severity), (0, ProductivityTier::Low, 30, Severity::Bad));

        let medium = productivity(60.0, 25.0, SoilType::Sandy);
        assert_eq!((medium.points, medium.tier, medium.score, medium.severity), (4, ProductivityTier::Medium, 60, Severity::Warning));
    }

    #[test]
    fn test_productivity_three_points_is_medium() {
        // rain only (2) + soil (1)
        let p = productivity(100.0, 10.0, SoilType::Clay);
        assert_eq!(p.points, 3);
        assert_eq!(p.tier, ProductivityTier::Medium);

        // temperature only (2)
        let p = productivity(10.0, 22.0, SoilType::Sandy);
        assert_eq!(p.points, 2);
        assert_eq!(p.tier, ProductivityTier::Low);
    }
}
