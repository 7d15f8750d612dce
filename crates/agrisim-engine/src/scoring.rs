//! Closed-form score formulas and crop/soil lookup tables.
//!
//! Every function here is pure: `(parameters, readings) -> number`. The
//! scoring pipeline in [`crate::simulate`] composes them into the final
//! result. Thresholds are strict comparisons throughout, so a value
//! sitting exactly on a boundary takes the milder branch.

use agrisim_types::{CropType, EnvironmentalReadings, FarmParameters, SoilType};

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Base yield multiplier for a crop.
pub const fn crop_base_yield(crop: CropType) -> f64 {
    match crop {
        CropType::Corn => 100.0,
        CropType::Wheat => 80.0,
        CropType::Soybeans => 90.0,
        CropType::Rice => 85.0,
    }
}

/// Yield factor for a soil texture class.
pub const fn soil_yield_factor(soil: SoilType) -> f64 {
    match soil {
        SoilType::Loam => 1.0,
        SoilType::Clay => 0.8,
        SoilType::Sand => 0.7,
        SoilType::Silt => 0.9,
    }
}

/// Fraction of applied fertilizer retained in the root zone, by soil.
///
/// Clay binds nutrients best; sand leaches more than half of them away.
pub const fn fertilizer_retention(soil: SoilType) -> f64 {
    match soil {
        SoilType::Loam => 0.8,
        SoilType::Clay => 0.9,
        SoilType::Sand => 0.5,
        SoilType::Silt => 0.7,
    }
}

// ---------------------------------------------------------------------------
// Yield
// ---------------------------------------------------------------------------

/// Weather multiplier on base yield: hot weeks (above 25 C) depress
/// yield, mild weeks boost it.
pub fn weather_factor(temperature_c: f64) -> f64 {
    if temperature_c > 25.0 { 0.9 } else { 1.1 }
}

/// Base yield from crop, soil, and temperature alone, before any
/// management adjustments.
pub fn base_yield(crop: CropType, soil: SoilType, temperature_c: f64) -> f64 {
    crop_base_yield(crop) * soil_yield_factor(soil) * weather_factor(temperature_c)
}

/// Irrigation efficiency: water applied to an already-moist root zone
/// reaches the crop more effectively than water lost to dry subsoil.
pub fn irrigation_efficiency(root_zone_moisture: f64) -> f64 {
    if root_zone_moisture > 0.25 { 0.8 } else { 0.6 }
}

/// Yield points gained from irrigation, capped at 20.
pub fn irrigation_yield_boost(irrigation_mm_per_day: f64, efficiency: f64) -> f64 {
    (irrigation_mm_per_day * 2.0 * efficiency).min(20.0)
}

/// Water-use efficiency multiplier: drops 0.1 per millimetre applied
/// above 5 mm/day, floored at 0.5.
pub fn water_efficiency_multiplier(irrigation_mm_per_day: f64) -> f64 {
    (1.0 - 0.1 * (irrigation_mm_per_day - 5.0).max(0.0)).max(0.5)
}

/// Yield points gained from fertilizer, scaled by soil retention and
/// capped at 15.
pub fn fertilizer_yield_boost(fertilizer_kg_per_ha: f64, soil: SoilType) -> f64 {
    (fertilizer_kg_per_ha * 0.5 * fertilizer_retention(soil)).min(15.0)
}

/// Soil points deducted for fertilizer extremes: heavy application
/// (above 20 kg/ha) costs 5, elevated (above 10) costs 2.
pub fn fertilizer_soil_penalty(fertilizer_kg_per_ha: f64) -> f64 {
    if fertilizer_kg_per_ha > 20.0 {
        -5.0
    } else if fertilizer_kg_per_ha > 10.0 {
        -2.0
    } else {
        0.0
    }
}

/// Yield points lost to grazing and trampling.
pub fn livestock_yield_reduction(density_per_ha: f64) -> f64 {
    density_per_ha * 0.5
}

/// Soil compaction index contributed by livestock.
pub fn livestock_compaction(density_per_ha: f64) -> f64 {
    density_per_ha * 2.0
}

/// Final yield after all management adjustments, floored at zero.
pub fn final_yield(params: &FarmParameters, readings: &EnvironmentalReadings) -> f64 {
    let base = base_yield(params.crop_type, params.soil_type, readings.temperature_c);
    let efficiency = irrigation_efficiency(readings.soil_moisture.root_zone);
    let irrigation = irrigation_yield_boost(params.irrigation_mm_per_day, efficiency);
    let fertilizer = fertilizer_yield_boost(params.fertilizer_kg_per_ha, params.soil_type);
    let livestock = livestock_yield_reduction(params.livestock_density_per_ha);
    (base + irrigation + fertilizer - livestock).max(0.0)
}

// ---------------------------------------------------------------------------
// Sustainability
// ---------------------------------------------------------------------------

/// Sustainability score: 100 minus threshold deductions for input
/// intensity, plus small bonuses for healthy vegetation and moist soil.
/// Clamped to [0, 100].
pub fn sustainability_score(params: &FarmParameters, readings: &EnvironmentalReadings) -> f64 {
    let mut score: f64 = 100.0;

    if params.irrigation_mm_per_day > 8.0 {
        score -= 15.0;
    } else if params.irrigation_mm_per_day > 5.0 {
        score -= 8.0;
    }

    if params.fertilizer_kg_per_ha > 30.0 {
        score -= 20.0;
    } else if params.fertilizer_kg_per_ha > 20.0 {
        score -= 10.0;
    }

    if params.livestock_density_per_ha > 5.0 {
        score -= 10.0;
    } else if params.livestock_density_per_ha > 3.0 {
        score -= 5.0;
    }

    if readings.vegetation.ndvi > 0.7 {
        score += 5.0;
    }
    if readings.soil_moisture.root_zone > 0.3 {
        score += 3.0;
    }

    score.clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Water efficiency
// ---------------------------------------------------------------------------

/// Lower edge of the optimal irrigation band, mm/day.
pub const OPTIMAL_IRRIGATION_MIN: f64 = 3.0;

/// Upper edge of the optimal irrigation band, mm/day.
pub const OPTIMAL_IRRIGATION_MAX: f64 = 7.0;

/// Water efficiency score: 100 minus per-millimetre penalties outside
/// the 3-7 mm/day optimal band, plus a 10 point bonus when irrigation
/// closely matches the precipitation-derived daily equivalent (within
/// 1 mm of the weekly total divided by 7). Clamped to [0, 100].
pub fn water_efficiency_score(params: &FarmParameters, readings: &EnvironmentalReadings) -> f64 {
    let irrigation = params.irrigation_mm_per_day;
    let mut score = 100.0;

    if irrigation < OPTIMAL_IRRIGATION_MIN {
        score -= 5.0 * (OPTIMAL_IRRIGATION_MIN - irrigation);
    } else if irrigation > OPTIMAL_IRRIGATION_MAX {
        score -= 8.0 * (irrigation - OPTIMAL_IRRIGATION_MAX);
    }

    let rain_equivalent = readings.precipitation_mm_7day / 7.0;
    if (irrigation - rain_equivalent).abs() <= 1.0 {
        score += 10.0;
    }

    score.clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Carbon and economics
// ---------------------------------------------------------------------------

/// Estimated annual carbon footprint index: a fixed farm baseline plus
/// per-input terms (fertilizer manufacture, annualized irrigation
/// pumping, livestock emissions). Unbounded, never negative for valid
/// inputs.
pub fn carbon_footprint(params: &FarmParameters) -> f64 {
    50.0 + params.fertilizer_kg_per_ha * 2.0
        + params.irrigation_mm_per_day * 365.0 * 0.1
        + params.livestock_density_per_ha * 15.0
}

/// Estimated economic viability index: half the yield as revenue proxy
/// minus annualized input costs. Floored at zero.
pub fn economic_viability(yield_value: f64, params: &FarmParameters) -> f64 {
    let costs = params.fertilizer_kg_per_ha * 0.8
        + params.irrigation_mm_per_day * 365.0 * 0.05
        + params.livestock_density_per_ha * 20.0;
    (yield_value * 0.5 - costs).max(0.0)
}
