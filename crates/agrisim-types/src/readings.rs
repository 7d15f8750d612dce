//! The environmental data bundle returned by the synthetic data source.
//!
//! Shaped like a real remote-sensing product: raw readings (temperature,
//! precipitation, soil moisture at two depths, vegetation indices, drought
//! index) plus derived aggregates computed by fixed formulas. The bundle is
//! regenerated on every fetch and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::DroughtCategory;

/// A geographic coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Latitude in decimal degrees, north positive, in [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive, in [-180, 180].
    pub longitude: f64,
}

/// Fractional volumetric soil moisture at two measurement depths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SoilMoisture {
    /// Water content in the top few centimetres, 0-1.
    pub surface: f64,
    /// Water content at crop root depth, 0-1.
    pub root_zone: f64,
}

/// Satellite-style vegetation indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VegetationIndices {
    /// Normalized difference vegetation index, 0-1. Proxy for plant health.
    pub ndvi: f64,
    /// Enhanced vegetation index, 0-1. Less saturated over dense canopy.
    pub evi: f64,
}

/// Drought index reading with its derived ordinal category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DroughtReading {
    /// Drought index on a 0-5 scale, higher is drier.
    pub index: f64,
    /// Category derived from the index via fixed thresholds.
    pub category: DroughtCategory,
}

/// Raw synthetic readings for one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EnvironmentalReadings {
    /// Near-surface air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Accumulated precipitation over the last seven days, in millimetres.
    pub precipitation_mm_7day: f64,
    /// Soil moisture at two depths.
    pub soil_moisture: SoilMoisture,
    /// Vegetation indices.
    pub vegetation: VegetationIndices,
    /// Drought index and category.
    pub drought: DroughtReading,
}

/// Aggregates computed from the raw readings by fixed formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DerivedMetrics {
    /// Composite soil condition score, 0-100.
    pub soil_health_score: f64,
    /// Estimated irrigation requirement in millimetres per day.
    pub irrigation_need_mm_per_day: f64,
    /// Composite crop stress score, 0-100, higher is worse.
    pub crop_stress_score: f64,
    /// Weekly water balance in millimetres; negative means a deficit.
    pub water_balance_mm: f64,
}

/// The full environmental bundle for one coordinate.
///
/// Regenerated pseudo-randomly on every fetch. With a fixed generator
/// seed the bundle is fully deterministic per coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EnvironmentalBundle {
    /// The coordinate the bundle was generated for.
    pub location: Coordinates,
    /// Echo of the requested dataset name (placeholder, never varies behavior).
    pub dataset: String,
    /// When the bundle was generated.
    pub generated_at: DateTime<Utc>,
    /// Raw readings.
    pub readings: EnvironmentalReadings,
    /// Derived aggregates.
    pub derived: DerivedMetrics,
    /// Short textual field notes derived from the readings.
    pub observations: Vec<String>,
    /// Short textual advisories derived from the readings.
    pub advisories: Vec<String>,
}
