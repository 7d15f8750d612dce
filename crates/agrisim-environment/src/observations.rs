//! Threshold-based textual field notes and advisories for a bundle.
//!
//! Short strings surfaced alongside the raw readings so a client can show
//! something human-readable without running the full simulation. Evaluated
//! in a fixed order; deterministic given the readings.

use agrisim_types::{DerivedMetrics, DroughtCategory, EnvironmentalReadings};

/// Build the ordered field notes for a set of readings.
///
/// Order: soil moisture, drought, vegetation, temperature.
pub fn field_notes(readings: &EnvironmentalReadings, derived: &DerivedMetrics) -> Vec<String> {
    let mut notes = Vec::new();

    if readings.soil_moisture.root_zone < 0.15 {
        notes.push(format!(
            "Root-zone soil moisture is low ({:.2}); crops may be water limited",
            readings.soil_moisture.root_zone
        ));
    } else if readings.soil_moisture.root_zone > 0.35 {
        notes.push(format!(
            "Root-zone soil moisture is ample ({:.2})",
            readings.soil_moisture.root_zone
        ));
    }

    if readings.drought.category >= DroughtCategory::Moderate {
        notes.push(format!(
            "Drought conditions detected: {:?} (index {:.1})",
            readings.drought.category, readings.drought.index
        ));
    }

    if readings.vegetation.ndvi > 0.7 {
        notes.push(format!(
            "Dense, healthy vegetation cover (NDVI {:.2})",
            readings.vegetation.ndvi
        ));
    } else if readings.vegetation.ndvi < 0.3 {
        notes.push(format!(
            "Sparse vegetation cover (NDVI {:.2})",
            readings.vegetation.ndvi
        ));
    }

    if readings.temperature_c > 30.0 {
        notes.push(format!(
            "High temperatures ({:.1} C) may cause heat stress",
            readings.temperature_c
        ));
    }

    if derived.crop_stress_score > 60.0 {
        notes.push(format!(
            "Composite crop stress is elevated ({:.0}/100)",
            derived.crop_stress_score
        ));
    }

    notes
}

/// Build the ordered advisories for a set of readings.
pub fn advisories(readings: &EnvironmentalReadings, derived: &DerivedMetrics) -> Vec<String> {
    let mut advisories = Vec::new();

    if derived.irrigation_need_mm_per_day > 2.0 {
        advisories.push(format!(
            "Supplemental irrigation of about {:.1} mm/day is advised",
            derived.irrigation_need_mm_per_day
        ));
    }

    if derived.water_balance_mm < -10.0 {
        advisories.push(format!(
            "Weekly water deficit of {:.0} mm; prioritize moisture retention",
            -derived.water_balance_mm
        ));
    }

    if readings.drought.category >= DroughtCategory::Severe {
        advisories.push(String::from(
            "Severe drought or worse: consider drought-tolerant varieties and mulching",
        ));
    }

    advisories
}

#[cfg(test)]
mod tests {
    use agrisim_types::{DroughtReading, SoilMoisture, VegetationIndices};

    use super::*;

    fn readings(root_zone: f64, ndvi: f64, temperature_c: f64, drought_index: f64) -> EnvironmentalReadings {
        EnvironmentalReadings {
            temperature_c,
            precipitation_mm_7day: 10.0,
            soil_moisture: SoilMoisture { surface: root_zone, root_zone },
            vegetation: VegetationIndices { ndvi, evi: ndvi * 0.6 },
            drought: DroughtReading {
                index: drought_index,
                category: DroughtCategory::from_index(drought_index),
            },
        }
    }

    fn derived(irrigation_need: f64, water_balance: f64, crop_stress: f64) -> DerivedMetrics {
        DerivedMetrics {
            soil_health_score: 60.0,
            irrigation_need_mm_per_day: irrigation_need,
            crop_stress_score: crop_stress,
            water_balance_mm: water_balance,
        }
    }

    #[test]
    fn dry_root_zone_produces_a_note() {
        let notes = field_notes(&readings(0.1, 0.5, 20.0, 0.0), &derived(0.0, 0.0, 10.0));
        assert!(notes.iter().any(|n| n.contains("water limited")));
    }

    #[test]
    fn moderate_drought_produces_a_note() {
        let notes = field_notes(&readings(0.3, 0.5, 20.0, 2.0), &derived(0.0, 0.0, 10.0));
        assert!(notes.iter().any(|n| n.contains("Drought conditions")));
    }

    #[test]
    fn benign_conditions_produce_no_drought_note() {
        let notes = field_notes(&readings(0.3, 0.5, 20.0, 0.0), &derived(0.0, 0.0, 10.0));
        assert!(!notes.iter().any(|n| n.contains("Drought conditions")));
    }

    #[test]
    fn irrigation_advisory_fires_on_need() {
        let advice = advisories(&readings(0.3, 0.5, 20.0, 0.0), &derived(4.5, 0.0, 10.0));
        assert!(advice.iter().any(|a| a.contains("irrigation")));
    }

    #[test]
    fn severe_drought_advisory_fires() {
        let advice = advisories(&readings(0.1, 0.3, 33.0, 3.0), &derived(6.0, -20.0, 80.0));
        assert!(advice.iter().any(|a| a.contains("drought-tolerant")));
    }

    #[test]
    fn notes_are_deterministic() {
        let r = readings(0.1, 0.8, 32.0, 2.5);
        let d = derived(5.0, -15.0, 70.0);
        assert_eq!(field_notes(&r, &d), field_notes(&r, &d));
    }
}
