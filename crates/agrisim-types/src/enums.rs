//! Enumeration types for the AgriSim farm simulation.
//!
//! Crop and soil classifications drive the scoring lookup tables; the
//! drought category is an ordinal classification derived from a drought
//! index; priority and category enums shape recommendation records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Crop types
// ---------------------------------------------------------------------------

/// A crop that can be planted on the simulated farm.
///
/// Each crop carries a base yield multiplier used by the scoring engine
/// (see `agrisim-engine`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CropType {
    /// Maize. Highest base yield of the supported crops.
    #[default]
    Corn,
    /// Winter or spring wheat.
    Wheat,
    /// Soybeans, a nitrogen-fixing legume.
    Soybeans,
    /// Paddy rice.
    Rice,
}

// ---------------------------------------------------------------------------
// Soil types
// ---------------------------------------------------------------------------

/// The dominant soil texture class of the farm.
///
/// Soil texture scales the base yield and controls how much applied
/// fertilizer is retained in the root zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SoilType {
    /// Balanced sand/silt/clay mix. The reference soil (factor 1.0).
    #[default]
    Loam,
    /// Heavy, water-retentive soil. Holds nutrients well but drains poorly.
    Clay,
    /// Coarse, fast-draining soil. Poor nutrient retention.
    Sand,
    /// Fine-grained, fertile soil with moderate drainage.
    Silt,
}

// ---------------------------------------------------------------------------
// Farming methods
// ---------------------------------------------------------------------------

/// The management practice applied across the farm.
///
/// Carried through the simulation for reporting; the closed-form score
/// formulas do not currently branch on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FarmingMethod {
    /// Standard mechanized practice with synthetic inputs.
    #[default]
    Conventional,
    /// No synthetic fertilizer or pesticide inputs.
    Organic,
    /// Planting without tillage to preserve soil structure.
    NoTill,
    /// Sensor-guided variable-rate input application.
    Precision,
}

// ---------------------------------------------------------------------------
// Drought categories
// ---------------------------------------------------------------------------

/// Ordinal drought classification derived from the drought index.
///
/// Mirrors the US Drought Monitor D0-D4 scale with an explicit
/// no-drought floor. Ordering is meaningful: `Moderate < Extreme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DroughtCategory {
    /// No drought conditions.
    None,
    /// D0: going into or coming out of drought.
    AbnormallyDry,
    /// D1: some damage to crops and pastures.
    Moderate,
    /// D2: crop losses likely, water shortages common.
    Severe,
    /// D3: major crop losses, widespread water restrictions.
    Extreme,
    /// D4: exceptional and widespread crop losses.
    Exceptional,
}

impl DroughtCategory {
    /// Classify a drought index value into a category.
    ///
    /// The index follows the generator's 0-5 scale where higher means
    /// drier. Values at or above each threshold fall into that category.
    pub fn from_index(index: f64) -> Self {
        if index >= 4.5 {
            Self::Exceptional
        } else if index >= 3.5 {
            Self::Extreme
        } else if index >= 2.5 {
            Self::Severe
        } else if index >= 1.5 {
            Self::Moderate
        } else if index >= 0.5 {
            Self::AbnormallyDry
        } else {
            Self::None
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendation metadata
// ---------------------------------------------------------------------------

/// Urgency level attached to a recommendation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Priority {
    /// Act this season.
    High,
    /// Plan for the next season.
    Medium,
    /// Worth considering over a multi-year horizon.
    Low,
}

/// The management area a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RecommendationCategory {
    /// Irrigation scheduling and water use.
    WaterManagement,
    /// Fertilizer rates and nutrient cycling.
    NutrientManagement,
    /// Stocking density and grazing rotation.
    LivestockManagement,
}

/// Qualitative grazing-pressure class derived from livestock density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GrazingPressure {
    /// Density at or below 2 head per hectare.
    Low,
    /// Density above 2 and at or below 5 head per hectare.
    Moderate,
    /// Density above 5 head per hectare.
    High,
}

impl GrazingPressure {
    /// Classify a livestock density (head per hectare) into a pressure class.
    pub fn from_density(density: f64) -> Self {
        if density > 5.0 {
            Self::High
        } else if density > 2.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drought_category_thresholds() {
        assert_eq!(DroughtCategory::from_index(0.0), DroughtCategory::None);
        assert_eq!(DroughtCategory::from_index(0.5), DroughtCategory::AbnormallyDry);
        assert_eq!(DroughtCategory::from_index(1.5), DroughtCategory::Moderate);
        assert_eq!(DroughtCategory::from_index(2.5), DroughtCategory::Severe);
        assert_eq!(DroughtCategory::from_index(3.5), DroughtCategory::Extreme);
        assert_eq!(DroughtCategory::from_index(4.5), DroughtCategory::Exceptional);
        assert_eq!(DroughtCategory::from_index(5.0), DroughtCategory::Exceptional);
    }

    #[test]
    fn drought_category_is_ordered() {
        assert!(DroughtCategory::Moderate < DroughtCategory::Extreme);
        assert!(DroughtCategory::None < DroughtCategory::AbnormallyDry);
    }

    #[test]
    fn grazing_pressure_classes() {
        assert_eq!(GrazingPressure::from_density(0.0), GrazingPressure::Low);
        assert_eq!(GrazingPressure::from_density(2.0), GrazingPressure::Low);
        assert_eq!(GrazingPressure::from_density(3.0), GrazingPressure::Moderate);
        assert_eq!(GrazingPressure::from_density(5.0), GrazingPressure::Moderate);
        assert_eq!(GrazingPressure::from_density(6.0), GrazingPressure::High);
    }

    #[test]
    fn defaults_match_api_contract() {
        assert_eq!(CropType::default(), CropType::Corn);
        assert_eq!(SoilType::default(), SoilType::Loam);
        assert_eq!(FarmingMethod::default(), FarmingMethod::Conventional);
    }

    #[test]
    fn enums_serialize_as_variant_names() {
        let json = serde_json::to_string(&CropType::Soybeans).ok();
        assert_eq!(json.as_deref(), Some("\"Soybeans\""));
        let json = serde_json::to_string(&RecommendationCategory::WaterManagement).ok();
        assert_eq!(json.as_deref(), Some("\"WaterManagement\""));
    }
}
