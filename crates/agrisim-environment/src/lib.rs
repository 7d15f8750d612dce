//! Synthetic environmental data source for the AgriSim farm simulation.
//!
//! Produces satellite-style readings (temperature, precipitation, soil
//! moisture at two depths, vegetation indices, drought index) for a
//! coordinate, plus derived aggregates and short textual notes. In a real
//! deployment this crate would be replaced by a client for an actual
//! satellite-data API; the bundle shape is the contract.
//!
//! # Modules
//!
//! - [`generator`] -- [`SyntheticDataSource`], coordinate validation, and
//!   the seeded pseudo-random reading generation.
//! - [`derived`] -- Fixed formulas for soil health, irrigation need,
//!   crop stress, and water balance.
//! - [`observations`] -- Threshold-based field notes and advisories.
//! - [`error`] -- [`EnvironmentError`] for malformed coordinates.

pub mod derived;
pub mod error;
pub mod generator;
pub mod observations;

// Re-export primary types at crate root.
pub use error::EnvironmentError;
pub use generator::SyntheticDataSource;
