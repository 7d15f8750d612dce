//! Error types for the `agrisim-environment` crate.
//!
//! The data source has a single failure mode: malformed coordinates.
//! Everything else is deterministic generation that cannot fail.

/// Errors that can occur when fetching environmental data.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// A coordinate component was NaN or infinite.
    #[error("coordinate is not a finite number: lat={latitude}, lon={longitude}")]
    NonFiniteCoordinate {
        /// The latitude as received.
        latitude: f64,
        /// The longitude as received.
        longitude: f64,
    },

    /// Latitude outside the valid [-90, 90] range.
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside the valid [-180, 180] range.
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}
