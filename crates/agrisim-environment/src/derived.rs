//! Fixed formulas deriving aggregate metrics from raw readings.
//!
//! These are the "derived" section of the environmental bundle: a soil
//! health score, a daily irrigation requirement, a crop stress score, and
//! a weekly water balance. All four are deterministic given the readings.

use agrisim_types::{DerivedMetrics, EnvironmentalReadings};

/// Root-zone moisture treated as field capacity for normalization.
const FIELD_CAPACITY: f64 = 0.45;

/// Reference daily crop water demand slope per degree above 10 C.
const DEMAND_PER_DEGREE: f64 = 0.35;

/// Compute all derived aggregates for a set of readings.
pub fn derive_metrics(readings: &EnvironmentalReadings) -> DerivedMetrics {
    DerivedMetrics {
        soil_health_score: soil_health_score(readings),
        irrigation_need_mm_per_day: irrigation_need_mm_per_day(readings),
        crop_stress_score: crop_stress_score(readings),
        water_balance_mm: water_balance_mm(readings),
    }
}

/// Composite soil condition score, 0-100.
///
/// Weighted blend of root-zone moisture (normalized against field
/// capacity, weight 55) and NDVI (weight 45). Wet, green ground scores
/// high; parched bare ground scores low.
pub fn soil_health_score(readings: &EnvironmentalReadings) -> f64 {
    let moisture_norm = (readings.soil_moisture.root_zone / FIELD_CAPACITY).clamp(0.0, 1.0);
    let score = moisture_norm * 55.0 + readings.vegetation.ndvi.clamp(0.0, 1.0) * 45.0;
    score.clamp(0.0, 100.0)
}

/// Estimated irrigation requirement in millimetres per day.
///
/// Temperature-driven demand (`DEMAND_PER_DEGREE` mm per degree above
/// 10 C) minus the daily equivalent of the last week's precipitation.
/// Never negative: surplus rain does not create a negative requirement.
pub fn irrigation_need_mm_per_day(readings: &EnvironmentalReadings) -> f64 {
    let demand = (readings.temperature_c - 10.0).max(0.0) * DEMAND_PER_DEGREE;
    let supply = readings.precipitation_mm_7day / 7.0;
    (demand - supply).max(0.0)
}

/// Composite crop stress score, 0-100, higher is worse.
///
/// Sums a heat term (above 30 C), a cold term (below 5 C), a drought
/// term (12 points per index unit), and a dryness term for root zones
/// below the 0.2 wilting margin.
pub fn crop_stress_score(readings: &EnvironmentalReadings) -> f64 {
    let heat = (readings.temperature_c - 30.0).max(0.0) * 4.0;
    let cold = (5.0 - readings.temperature_c).max(0.0) * 3.0;
    let drought = readings.drought.index.max(0.0) * 12.0;
    let dryness = (0.2 - readings.soil_moisture.root_zone).max(0.0) * 150.0;
    (heat + cold + drought + dryness).clamp(0.0, 100.0)
}

/// Weekly water balance in millimetres: precipitation minus a
/// temperature-scaled evapotranspiration estimate. Negative means the
/// week ran a deficit.
pub fn water_balance_mm(readings: &EnvironmentalReadings) -> f64 {
    let et_per_day = (0.5 + readings.temperature_c.max(0.0) * 0.15).max(0.0);
    readings.precipitation_mm_7day - et_per_day * 7.0
}
