//! Ground control station glue.
//!
//! Wires the simulator into a 1 Hz loop thread, keeps the shared
//! application state and mission log, and hosts plan persistence, the
//! display clock, and the CSV/GPX log exports.

pub mod clock;
pub mod export;
pub mod persistence;
pub mod records;
pub mod sim_loop;
pub mod state;
pub mod util;

pub use gcs_core as core;
