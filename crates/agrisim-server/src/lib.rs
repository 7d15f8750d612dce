//! Axum HTTP API server for the AgriSim farm simulation.
//!
//! Exposes the two public endpoints over the synthetic environmental
//! data source and the pure scoring engine:
//!
//! - `GET /api/environmental-data` -- environmental bundle for a coordinate
//! - `POST /api/simulate` -- run one farm simulation
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration with env overrides.
//! - [`state`] -- Shared [`AppState`](state::AppState).
//! - [`handlers`] -- Endpoint handlers and request structs.
//! - [`router`] -- Route assembly, CORS, and request tracing.
//! - [`server`] -- TCP bind and serve loop.
//! - [`error`] -- [`ApiError`](error::ApiError) and its HTTP mapping.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export the pieces the binary and integration tests assemble.
pub use config::AgrisimConfig;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
