//! Telemetry simulation engine for the ground control station.
//!
//! Owns the armed/mission state machine, runs per-tick systems at a fixed
//! 1 Hz cadence, and produces `TelemetrySnapshot`s for the dashboard.

pub mod engine;
pub mod locator;
pub mod systems;

pub use engine::{SimConfig, TelemetrySimulator};
pub use gcs_core as core;

#[cfg(test)]
mod tests;
