//! Synthetic generation of satellite-style environmental readings.
//!
//! The generator draws pseudo-random readings shaped like real
//! remote-sensing products. A real implementation would call a
//! satellite-data API; this one fabricates plausible numbers with a
//! latitude-modulated temperature band and precipitation-correlated
//! soil moisture.
//!
//! # Determinism
//!
//! Randomness is injectable: a source built with [`SyntheticDataSource::with_seed`]
//! derives a per-fetch RNG from `(seed, latitude, longitude)`, so the same
//! seed and coordinate always produce the same bundle. A source built with
//! [`SyntheticDataSource::from_entropy`] reseeds from the OS on every fetch,
//! which gives the "regenerated randomly every time" production behavior.

use agrisim_types::{
    Coordinates, DroughtCategory, DroughtReading, EnvironmentalBundle, EnvironmentalReadings,
    SoilMoisture, VegetationIndices,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::derived::derive_metrics;
use crate::error::EnvironmentError;
use crate::observations;

/// A pseudo-random environmental data source for a coordinate.
///
/// Treated as an external collaborator by the rest of the workspace:
/// the scoring engine only ever sees the resulting
/// [`EnvironmentalBundle`].
#[derive(Debug, Clone, Copy)]
pub struct SyntheticDataSource {
    /// Fixed seed for reproducible bundles; `None` reseeds per fetch.
    seed: Option<u64>,
}

impl SyntheticDataSource {
    /// Create a source with a fixed seed. The same seed and coordinate
    /// always produce the same bundle.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Create a source that reseeds from OS entropy on every fetch.
    pub const fn from_entropy() -> Self {
        Self { seed: None }
    }

    /// Generate the environmental bundle for a coordinate.
    ///
    /// The `dataset` name is echoed into the bundle but never varies
    /// behavior; it exists as a placeholder for future dataset selection.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if either coordinate is not a
    /// finite number or falls outside the valid geographic range.
    pub fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        dataset: &str,
    ) -> Result<EnvironmentalBundle, EnvironmentError> {
        validate_coordinates(latitude, longitude)?;

        let base_seed = match self.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        let mut rng = StdRng::seed_from_u64(coordinate_seed(base_seed, latitude, longitude));

        let readings = generate_readings(&mut rng, latitude);
        let derived = derive_metrics(&readings);
        let observations = observations::field_notes(&readings, &derived);
        let advisories = observations::advisories(&readings, &derived);

        debug!(
            latitude,
            longitude,
            dataset,
            temperature_c = readings.temperature_c,
            drought_index = readings.drought.index,
            "Environmental bundle generated"
        );

        Ok(EnvironmentalBundle {
            location: Coordinates { latitude, longitude },
            dataset: dataset.to_owned(),
            generated_at: Utc::now(),
            readings,
            derived,
            observations,
            advisories,
        })
    }
}

/// Validate that coordinates are finite and within geographic bounds.
fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), EnvironmentError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(EnvironmentError::NonFiniteCoordinate { latitude, longitude });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(EnvironmentError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(EnvironmentError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

/// Derive a per-fetch RNG seed from the base seed and the coordinate.
///
/// Mixes the coordinate bit patterns into the seed with an xorshift64
/// step so nearby coordinates do not produce correlated streams. The
/// mixing constant is a well-known 64-bit mixing constant.
fn coordinate_seed(base_seed: u64, latitude: f64, longitude: f64) -> u64 {
    let mut state = base_seed
        ^ latitude.to_bits().wrapping_mul(0x517c_c1b7_2722_0a95)
        ^ longitude.to_bits().rotate_left(32);

    // xorshift requires non-zero state.
    if state == 0 {
        state = 0xdead_beef_cafe_babe;
    }

    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

/// Draw one set of raw readings for the given latitude.
fn generate_readings(rng: &mut StdRng, latitude: f64) -> EnvironmentalReadings {
    // Temperature band cools moving away from the equator.
    let band = 28.0 - latitude.abs() * 0.4;
    let temperature_c = band + rng.random_range(-6.0..6.0);

    // Squaring skews toward dry weeks, matching real precipitation tails.
    let precipitation_mm_7day = rng.random_range(0.0_f64..1.0).powi(2) * 60.0;
    let precip_fraction = precipitation_mm_7day / 60.0;

    let surface =
        (0.05 + precip_fraction * 0.3 + rng.random_range(0.0..0.1)).clamp(0.02, 0.5);
    let root_zone =
        (surface * 0.85 + 0.05 + rng.random_range(-0.03..0.03)).clamp(0.02, 0.5);

    let ndvi = (0.2 + root_zone * 0.8 + rng.random_range(0.0..0.35)).clamp(0.05, 0.95);
    let evi = (ndvi * 0.6 + rng.random_range(-0.05..0.05)).clamp(0.0, 1.0);

    // Dry weeks and dry root zones push the drought index up.
    let index = (3.2 - precipitation_mm_7day / 12.0 - root_zone * 5.0
        + rng.random_range(-0.5..0.5))
    .clamp(0.0, 5.0);

    EnvironmentalReadings {
        temperature_c,
        precipitation_mm_7day,
        soil_moisture: SoilMoisture { surface, root_zone },
        vegetation: VegetationIndices { ndvi, evi },
        drought: DroughtReading {
            index,
            category: DroughtCategory::from_index(index),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_and_coordinate_reproduce_the_bundle() {
        let source = SyntheticDataSource::with_seed(42);
        let a = source.fetch(41.5, -93.6, "comprehensive").unwrap();
        let b = source.fetch(41.5, -93.6, "comprehensive").unwrap();
        assert_eq!(a.readings, b.readings);
        assert_eq!(a.derived, b.derived);
        assert_eq!(a.observations, b.observations);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SyntheticDataSource::with_seed(42)
            .fetch(41.5, -93.6, "comprehensive")
            .unwrap();
        let b = SyntheticDataSource::with_seed(99)
            .fetch(41.5, -93.6, "comprehensive")
            .unwrap();
        assert_ne!(a.readings, b.readings);
    }

    #[test]
    fn different_coordinates_diverge() {
        let source = SyntheticDataSource::with_seed(42);
        let a = source.fetch(41.5, -93.6, "comprehensive").unwrap();
        let b = source.fetch(-12.0, 130.8, "comprehensive").unwrap();
        assert_ne!(a.readings, b.readings);
    }

    #[test]
    fn readings_stay_in_plausible_ranges() {
        let source = SyntheticDataSource::with_seed(7);
        for lat in [-60.0, -30.0, 0.0, 30.0, 60.0] {
            for lon in [-120.0, 0.0, 120.0] {
                let bundle = source.fetch(lat, lon, "comprehensive").unwrap();
                let r = &bundle.readings;
                assert!((-60.0..=50.0).contains(&r.temperature_c));
                assert!((0.0..=60.0).contains(&r.precipitation_mm_7day));
                assert!((0.0..=0.5).contains(&r.soil_moisture.surface));
                assert!((0.0..=0.5).contains(&r.soil_moisture.root_zone));
                assert!((0.0..=1.0).contains(&r.vegetation.ndvi));
                assert!((0.0..=1.0).contains(&r.vegetation.evi));
                assert!((0.0..=5.0).contains(&r.drought.index));
            }
        }
    }

    #[test]
    fn equator_runs_warmer_than_high_latitudes() {
        // Average over many seeds so jitter cannot flip the comparison.
        let mut equator_sum = 0.0;
        let mut polar_sum = 0.0;
        for seed in 0_u64..200 {
            let source = SyntheticDataSource::with_seed(seed);
            equator_sum += source.fetch(0.0, 10.0, "x").unwrap().readings.temperature_c;
            polar_sum += source.fetch(65.0, 10.0, "x").unwrap().readings.temperature_c;
        }
        assert!(equator_sum > polar_sum);
    }

    #[test]
    fn dataset_name_is_echoed() {
        let source = SyntheticDataSource::with_seed(1);
        let bundle = source.fetch(10.0, 10.0, "smap-l4").unwrap();
        assert_eq!(bundle.dataset, "smap-l4");
    }

    #[test]
    fn nan_latitude_is_rejected() {
        let source = SyntheticDataSource::with_seed(1);
        let result = source.fetch(f64::NAN, 0.0, "comprehensive");
        assert!(matches!(
            result,
            Err(EnvironmentError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn infinite_longitude_is_rejected() {
        let source = SyntheticDataSource::with_seed(1);
        let result = source.fetch(0.0, f64::INFINITY, "comprehensive");
        assert!(matches!(
            result,
            Err(EnvironmentError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let source = SyntheticDataSource::with_seed(1);
        let result = source.fetch(91.0, 0.0, "comprehensive");
        assert!(matches!(result, Err(EnvironmentError::LatitudeOutOfRange(_))));
    }

    #[test]
    fn out_of_range_longitude_is_rejected() {
        let source = SyntheticDataSource::with_seed(1);
        let result = source.fetch(0.0, -181.0, "comprehensive");
        assert!(matches!(result, Err(EnvironmentError::LongitudeOutOfRange(_))));
    }

    #[test]
    fn drought_category_matches_index() {
        for seed in 0_u64..50 {
            let bundle = SyntheticDataSource::with_seed(seed)
                .fetch(20.0, 20.0, "comprehensive")
                .unwrap();
            let drought = bundle.readings.drought;
            assert_eq!(drought.category, DroughtCategory::from_index(drought.index));
        }
    }

    #[test]
    fn coordinate_seed_is_stable() {
        assert_eq!(coordinate_seed(42, 1.0, 2.0), coordinate_seed(42, 1.0, 2.0));
        assert_ne!(coordinate_seed(42, 1.0, 2.0), coordinate_seed(42, 2.0, 1.0));
    }
}
