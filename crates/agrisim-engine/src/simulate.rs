//! The top-level simulation pass.
//!
//! [`simulate`] composes the score formulas, impact analyses, insight
//! rules, and recommendation rules into one [`SimulationResult`]. The
//! whole pass is a pure function of its inputs: same parameters and
//! bundle, same result.

use agrisim_types::{EnvironmentalBundle, FarmParameters, SimulationResult};
use tracing::debug;

use crate::impacts::{
    irrigation_analysis, livestock_impact, method_comparison, soil_health_metrics,
};
use crate::insights::generate_insights;
use crate::recommend::generate_recommendations;
use crate::scoring::{
    carbon_footprint, economic_viability, final_yield, sustainability_score,
    water_efficiency_score,
};

/// Round a non-negative score to the nearest integer.
///
/// Inputs are formula outputs that are already floored at zero; the
/// clamp guards the cast, not the math.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_score(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Run one simulation for the given parameters and environmental bundle.
///
/// Stateless and side-effect free apart from a debug log line. The four
/// 0-100 scores are clamped before rounding; carbon footprint and
/// economic viability are unbounded but never negative.
pub fn simulate(params: &FarmParameters, bundle: &EnvironmentalBundle) -> SimulationResult {
    let readings = &bundle.readings;

    let yield_value = final_yield(params, readings);
    let sustainability = sustainability_score(params, readings);
    let soil_health = soil_health_metrics(params, readings);
    let water_efficiency = water_efficiency_score(params, readings);
    let carbon = carbon_footprint(params);
    let economics = economic_viability(yield_value, params);

    let insights = generate_insights(params, bundle);
    let recommendations = generate_recommendations(params, water_efficiency);

    debug!(
        yield_value,
        sustainability,
        soil_health = soil_health.final_score,
        water_efficiency,
        insight_count = insights.len(),
        recommendation_count = recommendations.len(),
        "Simulation computed"
    );

    SimulationResult {
        yield_score: round_score(yield_value),
        sustainability_score: round_score(sustainability),
        soil_health_score: round_score(soil_health.final_score),
        water_efficiency_score: round_score(water_efficiency),
        carbon_footprint: round_score(carbon),
        economic_viability: round_score(economics),
        insights,
        recommendations,
        comparison: method_comparison(params, readings, yield_value),
        livestock_impact: livestock_impact(params),
        irrigation_analysis: irrigation_analysis(params, readings),
        soil_health_metrics: soil_health,
    }
}
