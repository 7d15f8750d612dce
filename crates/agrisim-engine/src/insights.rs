//! Ordered, declarative insight rules.
//!
//! Each rule pairs a predicate with a message builder and the table is
//! evaluated top to bottom, so insight order is fixed: irrigation checks,
//! fertilizer checks, livestock checks, drought check, vegetation checks.
//! No randomness; the output is fully determined by the inputs.

use agrisim_types::{DroughtCategory, EnvironmentalBundle, FarmParameters};

/// Everything an insight rule may inspect.
pub struct InsightContext<'a> {
    /// The client's farm inputs.
    pub params: &'a FarmParameters,
    /// The environmental bundle for the farm's coordinate.
    pub bundle: &'a EnvironmentalBundle,
}

/// One row of the insight rule table.
struct InsightRule {
    /// Whether the rule fires for this context.
    applies: fn(&InsightContext<'_>) -> bool,
    /// The insight string to append when the rule fires.
    message: fn(&InsightContext<'_>) -> String,
}

/// The ordered rule table. Evaluation order is the table order.
const RULES: &[InsightRule] = &[
    // --- Irrigation ---
    InsightRule {
        applies: |ctx| ctx.params.irrigation_mm_per_day > 8.0,
        message: |ctx| {
            format!(
                "Irrigation of {:.1} mm/day is well above typical crop demand; expect waterlogging and runoff",
                ctx.params.irrigation_mm_per_day
            )
        },
    },
    InsightRule {
        applies: |ctx| {
            ctx.params.irrigation_mm_per_day < ctx.bundle.derived.irrigation_need_mm_per_day
        },
        message: |ctx| {
            format!(
                "Applied irrigation trails the estimated requirement of {:.1} mm/day for this location",
                ctx.bundle.derived.irrigation_need_mm_per_day
            )
        },
    },
    // --- Fertilizer ---
    InsightRule {
        applies: |ctx| ctx.params.fertilizer_kg_per_ha > 30.0,
        message: |ctx| {
            format!(
                "Fertilizer at {:.0} kg/ha is heavy; significant nitrogen leaching is likely",
                ctx.params.fertilizer_kg_per_ha
            )
        },
    },
    InsightRule {
        applies: |ctx| {
            ctx.params.fertilizer_kg_per_ha > 20.0 && ctx.params.fertilizer_kg_per_ha <= 30.0
        },
        message: |ctx| {
            format!(
                "Fertilizer at {:.0} kg/ha exceeds crop uptake; the surplus will run off",
                ctx.params.fertilizer_kg_per_ha
            )
        },
    },
    // --- Livestock ---
    InsightRule {
        applies: |ctx| ctx.params.livestock_density_per_ha > 3.0,
        message: |ctx| {
            format!(
                "Stocking density of {:.1} head/ha compacts soil and competes with crop area",
                ctx.params.livestock_density_per_ha
            )
        },
    },
    // --- Drought ---
    InsightRule {
        applies: |ctx| ctx.bundle.readings.drought.category >= DroughtCategory::Moderate,
        message: |ctx| {
            format!(
                "The location is under {:?} drought; water availability will constrain yields",
                ctx.bundle.readings.drought.category
            )
        },
    },
    // --- Vegetation ---
    InsightRule {
        applies: |ctx| ctx.bundle.readings.vegetation.ndvi > 0.7,
        message: |ctx| {
            format!(
                "Satellite vegetation index is strong (NDVI {:.2}); the canopy is in good shape",
                ctx.bundle.readings.vegetation.ndvi
            )
        },
    },
    InsightRule {
        applies: |ctx| ctx.bundle.readings.vegetation.ndvi < 0.3,
        message: |ctx| {
            format!(
                "Satellite vegetation index is weak (NDVI {:.2}); establishment may be failing",
                ctx.bundle.readings.vegetation.ndvi
            )
        },
    },
];

/// Evaluate the rule table in order and collect the insights that fire.
pub fn generate_insights(params: &FarmParameters, bundle: &EnvironmentalBundle) -> Vec<String> {
    let ctx = InsightContext { params, bundle };
    RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| (rule.message)(&ctx))
        .collect()
}
