//! Threshold-based recommendation records.
//!
//! Three fixed rules, evaluated in order: water management when the
//! water-efficiency score is poor, nutrient management when fertilizer is
//! heavy, livestock management when stocking density is high. Each fires
//! at most once per simulation.

use agrisim_types::{FarmParameters, Priority, Recommendation, RecommendationCategory};

/// Water-efficiency score below which the water recommendation fires.
const WATER_EFFICIENCY_FLOOR: f64 = 70.0;

/// Fertilizer rate above which the nutrient recommendation fires, kg/ha.
const FERTILIZER_CEILING: f64 = 20.0;

/// Stocking density above which the livestock recommendation fires, head/ha.
const LIVESTOCK_CEILING: f64 = 3.0;

/// Build the ordered recommendation list for one simulation.
pub fn generate_recommendations(
    params: &FarmParameters,
    water_efficiency_score: f64,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if water_efficiency_score < WATER_EFFICIENCY_FLOOR {
        recommendations.push(Recommendation {
            category: RecommendationCategory::WaterManagement,
            priority: Priority::High,
            action: String::from("Move to drip or scheduled deficit irrigation"),
            impact: String::from("Cuts water use 30-50% while holding yield"),
            implementation: String::from(
                "Install soil moisture probes and irrigate only when the root zone drops below field capacity",
            ),
        });
    }

    if params.fertilizer_kg_per_ha > FERTILIZER_CEILING {
        recommendations.push(Recommendation {
            category: RecommendationCategory::NutrientManagement,
            priority: Priority::Medium,
            action: String::from("Split fertilizer into smaller in-season applications"),
            impact: String::from("Reduces leaching losses and soil acidification"),
            implementation: String::from(
                "Apply no more than 20 kg/ha per pass, timed to crop growth stages",
            ),
        });
    }

    if params.livestock_density_per_ha > LIVESTOCK_CEILING {
        recommendations.push(Recommendation {
            category: RecommendationCategory::LivestockManagement,
            priority: Priority::Medium,
            action: String::from("Rotate grazing paddocks and lower stocking density"),
            impact: String::from("Limits compaction and lets pasture recover"),
            implementation: String::from(
                "Divide pasture into paddocks and rest each one for at least three weeks",
            ),
        });
    }

    recommendations
}
