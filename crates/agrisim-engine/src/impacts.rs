//! Derived impact analyses: irrigation, livestock, soil health breakdown,
//! and the baseline-vs-adjusted yield comparison.

use agrisim_types::{
    EnvironmentalReadings, FarmParameters, GrazingPressure, IrrigationAnalysis, LivestockImpact,
    MethodComparison, SoilHealthMetrics,
};

use crate::scoring::{
    OPTIMAL_IRRIGATION_MAX, OPTIMAL_IRRIGATION_MIN, base_yield, fertilizer_soil_penalty,
    irrigation_efficiency, irrigation_yield_boost, livestock_compaction,
    livestock_yield_reduction, water_efficiency_multiplier,
};

/// Starting soil health score before adjustments.
pub const SOIL_HEALTH_BASE: f64 = 80.0;

/// Build the irrigation effectiveness breakdown.
pub fn irrigation_analysis(
    params: &FarmParameters,
    readings: &EnvironmentalReadings,
) -> IrrigationAnalysis {
    let applied = params.irrigation_mm_per_day;
    let efficiency = irrigation_efficiency(readings.soil_moisture.root_zone);
    IrrigationAnalysis {
        applied_mm_per_day: applied,
        efficiency,
        yield_boost: irrigation_yield_boost(applied, efficiency),
        water_efficiency_multiplier: water_efficiency_multiplier(applied),
        within_optimal_band: (OPTIMAL_IRRIGATION_MIN..=OPTIMAL_IRRIGATION_MAX).contains(&applied),
    }
}

/// Build the livestock effect breakdown.
pub fn livestock_impact(params: &FarmParameters) -> LivestockImpact {
    let density = params.livestock_density_per_ha;
    LivestockImpact {
        yield_reduction: livestock_yield_reduction(density),
        soil_compaction: livestock_compaction(density),
        grazing_pressure: GrazingPressure::from_density(density),
    }
}

/// Build the step-by-step soil health derivation.
///
/// Starts at [`SOIL_HEALTH_BASE`], deducts for fertilizer extremes, 2
/// points per unit of livestock density, and 8 points for over-irrigation
/// above 10 mm/day, then adjusts for root-zone moisture thresholds
/// (above 0.3 helps, below 0.15 hurts). The final score is clamped to
/// [0, 100].
pub fn soil_health_metrics(
    params: &FarmParameters,
    readings: &EnvironmentalReadings,
) -> SoilHealthMetrics {
    let fertilizer_penalty = fertilizer_soil_penalty(params.fertilizer_kg_per_ha);
    let livestock_penalty = -2.0 * params.livestock_density_per_ha;
    let irrigation_penalty = if params.irrigation_mm_per_day > 10.0 { -8.0 } else { 0.0 };

    let root_zone = readings.soil_moisture.root_zone;
    let moisture_adjustment = if root_zone > 0.3 {
        5.0
    } else if root_zone < 0.15 {
        -5.0
    } else {
        0.0
    };

    let final_score = (SOIL_HEALTH_BASE
        + fertilizer_penalty
        + livestock_penalty
        + irrigation_penalty
        + moisture_adjustment)
        .clamp(0.0, 100.0);

    SoilHealthMetrics {
        base: SOIL_HEALTH_BASE,
        fertilizer_penalty,
        livestock_penalty,
        irrigation_penalty,
        moisture_adjustment,
        final_score,
    }
}

/// Compare the environment-only baseline yield against the adjusted yield.
pub fn method_comparison(
    params: &FarmParameters,
    readings: &EnvironmentalReadings,
    adjusted_yield: f64,
) -> MethodComparison {
    let baseline = base_yield(params.crop_type, params.soil_type, readings.temperature_c);
    let delta_percent = if baseline > 0.0 {
        (adjusted_yield - baseline) / baseline * 100.0
    } else {
        0.0
    };
    MethodComparison {
        baseline_yield: baseline,
        adjusted_yield,
        delta_percent,
    }
}

#[cfg(test)]
mod tests {
    use agrisim_types::{
        DroughtCategory, DroughtReading, SoilMoisture, VegetationIndices,
    };
    use approx::assert_relative_eq;

    use super::*;

    fn fixed_readings() -> EnvironmentalReadings {
        EnvironmentalReadings {
            temperature_c: 20.0,
            precipitation_mm_7day: 15.0,
            soil_moisture: SoilMoisture { surface: 0.25, root_zone: 0.3 },
            vegetation: VegetationIndices { ndvi: 0.65, evi: 0.4 },
            drought: DroughtReading { index: 1.0, category: DroughtCategory::AbnormallyDry },
        }
    }

    #[test]
    fn reference_soil_health_is_74() {
        // 80 - 2 fertilizer - 4 livestock, no irrigation or moisture terms.
        let params = FarmParameters::new(5.0, 15.0, 2.0);
        let metrics = soil_health_metrics(&params, &fixed_readings());
        assert_relative_eq!(metrics.final_score, 74.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.fertilizer_penalty, -2.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.livestock_penalty, -4.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.irrigation_penalty, 0.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.moisture_adjustment, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn heavy_fertilizer_never_beats_moderate_on_soil_health() {
        let readings = fixed_readings();
        let moderate = soil_health_metrics(&FarmParameters::new(5.0, 15.0, 2.0), &readings);
        for fertilizer in [25.0, 30.0, 50.0, 100.0] {
            let heavy = soil_health_metrics(&FarmParameters::new(5.0, fertilizer, 2.0), &readings);
            assert!(heavy.final_score <= moderate.final_score);
        }
    }

    #[test]
    fn over_irrigation_costs_soil_health() {
        let readings = fixed_readings();
        let normal = soil_health_metrics(&FarmParameters::new(5.0, 15.0, 2.0), &readings);
        let soaked = soil_health_metrics(&FarmParameters::new(11.0, 15.0, 2.0), &readings);
        assert_relative_eq!(
            normal.final_score - soaked.final_score,
            8.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn moisture_thresholds_adjust_soil_health() {
        let mut readings = fixed_readings();
        let params = FarmParameters::new(5.0, 15.0, 2.0);

        readings.soil_moisture.root_zone = 0.35;
        assert_relative_eq!(
            soil_health_metrics(&params, &readings).moisture_adjustment,
            5.0,
            epsilon = 1e-9
        );

        readings.soil_moisture.root_zone = 0.1;
        assert_relative_eq!(
            soil_health_metrics(&params, &readings).moisture_adjustment,
            -5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn soil_health_clamps_at_zero() {
        let params = FarmParameters::new(12.0, 50.0, 60.0);
        let metrics = soil_health_metrics(&params, &fixed_readings());
        assert_relative_eq!(metrics.final_score, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn irrigation_analysis_reference_values() {
        let params = FarmParameters::new(5.0, 15.0, 2.0);
        let analysis = irrigation_analysis(&params, &fixed_readings());
        assert_relative_eq!(analysis.efficiency, 0.8, epsilon = 1e-9);
        assert_relative_eq!(analysis.yield_boost, 8.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.water_efficiency_multiplier, 1.0, epsilon = 1e-9);
        assert!(analysis.within_optimal_band);
    }

    #[test]
    fn irrigation_band_edges_are_inclusive() {
        let readings = fixed_readings();
        assert!(irrigation_analysis(&FarmParameters::new(3.0, 0.0, 0.0), &readings).within_optimal_band);
        assert!(irrigation_analysis(&FarmParameters::new(7.0, 0.0, 0.0), &readings).within_optimal_band);
        assert!(!irrigation_analysis(&FarmParameters::new(7.5, 0.0, 0.0), &readings).within_optimal_band);
    }

    #[test]
    fn livestock_impact_reference_values() {
        let impact = livestock_impact(&FarmParameters::new(5.0, 15.0, 2.0));
        assert_relative_eq!(impact.yield_reduction, 1.0, epsilon = 1e-9);
        assert_relative_eq!(impact.soil_compaction, 4.0, epsilon = 1e-9);
        assert_eq!(impact.grazing_pressure, GrazingPressure::Low);
    }

    #[test]
    fn comparison_reports_gain_over_baseline() {
        let params = FarmParameters::new(5.0, 15.0, 2.0);
        let readings = fixed_readings();
        let comparison = method_comparison(&params, &readings, 123.0);
        assert_relative_eq!(comparison.baseline_yield, 110.0, epsilon = 1e-9);
        assert_relative_eq!(comparison.adjusted_yield, 123.0, epsilon = 1e-9);
        assert_relative_eq!(comparison.delta_percent, 11.818_181_818_181_818, epsilon = 1e-6);
    }
}
