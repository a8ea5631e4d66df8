//! Core types and definitions for the ground control station.
//!
//! This crate defines the vocabulary shared across all other crates:
//! telemetry snapshots, operator commands, mission plans and records,
//! alerts, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod mission;
pub mod state;
pub mod types;
