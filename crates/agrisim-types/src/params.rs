//! Farm input parameters supplied by the client for one simulation run.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::enums::{CropType, FarmingMethod, SoilType};

/// The complete set of farm management inputs for one simulation.
///
/// Created fresh per request and immutable within a computation. The
/// numeric inputs are validated as non-negative; the enums fall back to
/// their defaults (`Corn`, `Loam`, `Conventional`) when omitted from the
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FarmParameters {
    /// Applied irrigation in millimetres per day.
    #[validate(range(min = 0.0, message = "irrigation must be non-negative"))]
    pub irrigation_mm_per_day: f64,

    /// Applied fertilizer in kilograms per hectare.
    #[validate(range(min = 0.0, message = "fertilizer must be non-negative"))]
    pub fertilizer_kg_per_ha: f64,

    /// Livestock stocking density in head per hectare.
    #[validate(range(min = 0.0, message = "livestock density must be non-negative"))]
    pub livestock_density_per_ha: f64,

    /// The crop planted on the farm.
    #[serde(default)]
    pub crop_type: CropType,

    /// The dominant soil texture class.
    #[serde(default)]
    pub soil_type: SoilType,

    /// The management practice applied across the farm.
    #[serde(default)]
    pub farming_method: FarmingMethod,
}

impl FarmParameters {
    /// Build parameters from the three required numeric inputs, using the
    /// default crop, soil, and method.
    pub const fn new(irrigation_mm_per_day: f64, fertilizer_kg_per_ha: f64, livestock_density_per_ha: f64) -> Self {
        Self {
            irrigation_mm_per_day,
            fertilizer_kg_per_ha,
            livestock_density_per_ha,
            crop_type: CropType::Corn,
            soil_type: SoilType::Loam,
            farming_method: FarmingMethod::Conventional,
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn valid_parameters_pass_validation() {
        let params = FarmParameters::new(5.0, 15.0, 2.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_inputs_are_valid() {
        let params = FarmParameters::new(0.0, 0.0, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn negative_irrigation_fails_validation() {
        let params = FarmParameters::new(-1.0, 15.0, 2.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_fertilizer_fails_validation() {
        let params = FarmParameters::new(5.0, -0.1, 2.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn missing_enums_deserialize_to_defaults() {
        let json = r#"{
            "irrigation_mm_per_day": 4.0,
            "fertilizer_kg_per_ha": 10.0,
            "livestock_density_per_ha": 1.0
        }"#;
        let parsed: Result<FarmParameters, _> = serde_json::from_str(json);
        assert!(parsed.is_ok());
        let params = parsed.unwrap_or_else(|_| FarmParameters::new(0.0, 0.0, 0.0));
        assert_eq!(params.crop_type, CropType::Corn);
        assert_eq!(params.soil_type, SoilType::Loam);
        assert_eq!(params.farming_method, FarmingMethod::Conventional);
    }
}
