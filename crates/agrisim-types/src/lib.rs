//! Shared type definitions for the AgriSim farm simulation.
//!
//! This crate is the single source of truth for all types used across the
//! AgriSim workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`enums`] -- Crop, soil, method, drought, and recommendation enums
//! - [`params`] -- [`FarmParameters`], the validated client inputs
//! - [`readings`] -- The [`EnvironmentalBundle`] family of structs
//! - [`result`] -- [`SimulationResult`] and its derived-analysis structs

pub mod enums;
pub mod params;
pub mod readings;
pub mod result;

// Re-export all public types at crate root for convenience.
pub use enums::{
    CropType, DroughtCategory, FarmingMethod, GrazingPressure, Priority, RecommendationCategory,
    SoilType,
};
pub use params::FarmParameters;
pub use readings::{
    Coordinates, DerivedMetrics, DroughtReading, EnvironmentalBundle, EnvironmentalReadings,
    SoilMoisture, VegetationIndices,
};
pub use result::{
    IrrigationAnalysis, LivestockImpact, MethodComparison, Recommendation, SimulationResult,
    SoilHealthMetrics,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // Enums
        let _ = crate::enums::CropType::export_all();
        let _ = crate::enums::SoilType::export_all();
        let _ = crate::enums::FarmingMethod::export_all();
        let _ = crate::enums::DroughtCategory::export_all();
        let _ = crate::enums::Priority::export_all();
        let _ = crate::enums::RecommendationCategory::export_all();
        let _ = crate::enums::GrazingPressure::export_all();

        // Params
        let _ = crate::params::FarmParameters::export_all();

        // Readings
        let _ = crate::readings::Coordinates::export_all();
        let _ = crate::readings::SoilMoisture::export_all();
        let _ = crate::readings::VegetationIndices::export_all();
        let _ = crate::readings::DroughtReading::export_all();
        let _ = crate::readings::EnvironmentalReadings::export_all();
        let _ = crate::readings::DerivedMetrics::export_all();
        let _ = crate::readings::EnvironmentalBundle::export_all();

        // Results
        let _ = crate::result::Recommendation::export_all();
        let _ = crate::result::MethodComparison::export_all();
        let _ = crate::result::LivestockImpact::export_all();
        let _ = crate::result::IrrigationAnalysis::export_all();
        let _ = crate::result::SoilHealthMetrics::export_all();
        let _ = crate::result::SimulationResult::export_all();
    }
}
