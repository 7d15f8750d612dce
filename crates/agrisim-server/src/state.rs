//! Shared application state for the AgriSim API server.
//!
//! [`AppState`] holds the synthetic data source and the default
//! coordinate for simulation requests that omit one. The simulation
//! itself is stateless, so there is nothing mutable here: the state is
//! built once at startup and shared read-only across requests.

use agrisim_environment::SyntheticDataSource;
use agrisim_types::Coordinates;

use crate::config::AgrisimConfig;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// The environmental data source used by both endpoints.
    pub source: SyntheticDataSource,
    /// Coordinate used when a simulation request omits one.
    pub default_location: Coordinates,
}

impl AppState {
    /// Build application state from the loaded configuration.
    ///
    /// A configured seed makes every bundle reproducible; without one
    /// the source reseeds from OS entropy per fetch.
    pub const fn from_config(config: &AgrisimConfig) -> Self {
        let source = match config.generator.seed {
            Some(seed) => SyntheticDataSource::with_seed(seed),
            None => SyntheticDataSource::from_entropy(),
        };
        Self {
            source,
            default_location: Coordinates {
                latitude: config.generator.default_latitude,
                longitude: config.generator.default_longitude,
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AgrisimConfig::default())
    }
}
