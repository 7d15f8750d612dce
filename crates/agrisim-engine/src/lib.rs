//! Scoring engine and insight generator for the AgriSim farm simulation.
//!
//! A pure computation pipeline: `(FarmParameters, EnvironmentalBundle)`
//! in, [`SimulationResult`](agrisim_types::SimulationResult) out. No
//! state, no I/O, no randomness.
//!
//! # Modules
//!
//! - [`scoring`] -- Closed-form score formulas and crop/soil lookup tables.
//! - [`impacts`] -- Irrigation, livestock, and soil-health breakdowns plus
//!   the baseline-vs-adjusted yield comparison.
//! - [`insights`] -- The ordered declarative insight rule table.
//! - [`recommend`] -- Threshold-based prioritized recommendation records.
//! - [`simulate`] -- The top-level pass composing everything.

pub mod impacts;
pub mod insights;
pub mod recommend;
pub mod scoring;
pub mod simulate;

// Re-export the primary entry point at crate root.
pub use simulate::simulate;
