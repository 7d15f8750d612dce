//! The simulation result returned to the client.
//!
//! Six numeric scores plus ordered insights, prioritized recommendation
//! records, and derived analyses. Produced once per request, never mutated,
//! never persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{GrazingPressure, Priority, RecommendationCategory};

/// A single prioritized recommendation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Recommendation {
    /// The management area this recommendation addresses.
    pub category: RecommendationCategory,
    /// Urgency of acting on the recommendation.
    pub priority: Priority,
    /// What to do.
    pub action: String,
    /// The expected effect of doing it.
    pub impact: String,
    /// How to put it into practice.
    pub implementation: String,
}

/// Comparison of the environment-only baseline yield against the yield
/// after input adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MethodComparison {
    /// Base yield from crop, soil, and weather alone.
    pub baseline_yield: f64,
    /// Yield after irrigation, fertilizer, and livestock adjustments.
    pub adjusted_yield: f64,
    /// Signed percentage change from baseline to adjusted.
    pub delta_percent: f64,
}

/// Breakdown of livestock effects on the farm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LivestockImpact {
    /// Yield points lost to grazing and trampling.
    pub yield_reduction: f64,
    /// Soil compaction index contributed by livestock.
    pub soil_compaction: f64,
    /// Qualitative grazing-pressure class.
    pub grazing_pressure: GrazingPressure,
}

/// Breakdown of irrigation effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct IrrigationAnalysis {
    /// Irrigation applied, millimetres per day.
    pub applied_mm_per_day: f64,
    /// Fraction of applied water reaching the crop (moisture dependent).
    pub efficiency: f64,
    /// Yield points gained from irrigation, capped.
    pub yield_boost: f64,
    /// Multiplier applied to water-use efficiency, floored at 0.5.
    pub water_efficiency_multiplier: f64,
    /// Whether the applied rate falls inside the 3-7 mm/day optimal band.
    pub within_optimal_band: bool,
}

/// Step-by-step soil health score derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SoilHealthMetrics {
    /// Starting soil health score before adjustments.
    pub base: f64,
    /// Points deducted for fertilizer extremes (negative or zero).
    pub fertilizer_penalty: f64,
    /// Points deducted for livestock density (negative or zero).
    pub livestock_penalty: f64,
    /// Points deducted for over-irrigation (negative or zero).
    pub irrigation_penalty: f64,
    /// Points added or removed by soil moisture thresholds.
    pub moisture_adjustment: f64,
    /// Final clamped score, 0-100.
    pub final_score: f64,
}

/// The complete result of one simulation run.
///
/// Invariant: `sustainability_score`, `soil_health_score`, and
/// `water_efficiency_score` are clamped to [0, 100]; `yield_score`,
/// `carbon_footprint`, and `economic_viability` are unbounded but
/// never negative. All six are rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationResult {
    /// Crop yield score after all adjustments.
    pub yield_score: u32,
    /// Sustainability score, 0-100.
    pub sustainability_score: u32,
    /// Soil health score, 0-100.
    pub soil_health_score: u32,
    /// Water-use efficiency score, 0-100.
    pub water_efficiency_score: u32,
    /// Estimated annual carbon footprint index.
    pub carbon_footprint: u32,
    /// Estimated economic viability index.
    pub economic_viability: u32,
    /// Ordered human-readable insight strings.
    pub insights: Vec<String>,
    /// Ordered prioritized recommendation records.
    pub recommendations: Vec<Recommendation>,
    /// Baseline-vs-adjusted yield comparison.
    pub comparison: MethodComparison,
    /// Livestock effect breakdown.
    pub livestock_impact: LivestockImpact,
    /// Irrigation effectiveness breakdown.
    pub irrigation_analysis: IrrigationAnalysis,
    /// Soil health derivation steps.
    pub soil_health_metrics: SoilHealthMetrics,
}
