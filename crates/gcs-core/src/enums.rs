//! Enumeration types used throughout the station.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Autopilot flight mode as shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    /// Pilot-controlled, no automation.
    Manual,
    /// Holding position under automatic control.
    #[default]
    Loiter,
    /// Climb-out after mission launch.
    #[serde(rename = "Take Off")]
    TakeOff,
    /// Waypoint-following mission flight.
    Auto,
    /// Return to launch point.
    Rtl,
}

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlightMode::Manual => "Manual",
            FlightMode::Loiter => "Loiter",
            FlightMode::TakeOff => "Take Off",
            FlightMode::Auto => "Auto",
            FlightMode::Rtl => "RTL",
        };
        f.write_str(name)
    }
}

/// Category of a detected breeding site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteCategory {
    /// Contained water: pots, gutters, discarded containers.
    Enclosed,
    /// Standing water in the open: ponds, puddles, tires.
    Open,
}

/// Outcome of a completed mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    #[default]
    Completed,
    Interrupted,
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissionStatus::Completed => "Completed",
            MissionStatus::Interrupted => "Interrupted",
        };
        f.write_str(name)
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
