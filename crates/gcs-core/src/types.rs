//! Fundamental geographic, power, and timing types.

use serde::{Deserialize, Serialize};

use crate::constants::{VOLTAGE_FLOOR, VOLTAGE_SPAN};
use crate::enums::SiteCategory;

/// Geographic coordinate in degrees (WGS-84 lat/lon).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Battery pack state as reported to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryState {
    /// Pack voltage (V), floored at [`VOLTAGE_FLOOR`].
    pub voltage: f64,
    /// Charge percentage, clamped to [0, 100].
    pub percentage: f64,
}

impl BatteryState {
    /// Derive the full battery state from a charge percentage via the fixed
    /// linear voltage mapping.
    pub fn from_percentage(percentage: f64) -> Self {
        let percentage = percentage.clamp(0.0, 100.0);
        let voltage = (VOLTAGE_FLOOR + percentage / 100.0 * VOLTAGE_SPAN).max(VOLTAGE_FLOOR);
        Self {
            voltage,
            percentage,
        }
    }
}

/// Elapsed mission time in whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionClock {
    seconds: u64,
}

impl MissionClock {
    /// Advance by one second.
    pub fn advance(&mut self) {
        self.seconds += 1;
    }

    /// Reset to zero at mission start.
    pub fn reset(&mut self) {
        self.seconds = 0;
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Zero-padded `MM:SS` display string. Minutes are not capped at 59.
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

/// A detected breeding site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingSiteInfo {
    #[serde(rename = "type")]
    pub category: SiteCategory,
    pub object: String,
}
