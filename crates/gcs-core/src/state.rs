//! Telemetry snapshot — the complete drone state shown on the dashboard
//! each tick.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::FlightMode;
use crate::events::{Alert, SimEvent};
use crate::types::{BatteryState, BreedingSiteInfo, GeoCoordinate};

/// Live telemetry published to the dashboard after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub gps: GeoCoordinate,
    /// Altitude above home (meters).
    pub altitude: f64,
    /// Horizontal speed (m/s).
    pub speed: f64,
    /// Roll (degrees).
    pub roll: f64,
    /// Pitch (degrees).
    pub pitch: f64,
    /// Heading (degrees, always in [0, 360)).
    pub heading: f64,
    /// Altitude delta over the last second (m/s).
    pub vertical_speed: f64,
    /// Straight-line distance from home (meters).
    pub distance_from_home: f64,
    /// Link signal strength (dBm).
    pub signal_strength: i32,
    pub satellites: u32,
    pub battery: BatteryState,
    pub flight_mode: FlightMode,
    pub armed: bool,
    /// Elapsed flight time, zero-padded `MM:SS`.
    pub flight_time: String,
    /// Whether a breeding site is currently inside the detection window.
    pub site_detected: bool,
    /// The detection record for the open window, if any.
    pub current_site: Option<BreedingSiteInfo>,
    /// All sites detected during the current mission, in detection order.
    pub detected_sites: Vec<BreedingSiteInfo>,
    /// Cumulative GPS track, one point per active mission tick.
    pub gps_track: Vec<GeoCoordinate>,
    /// Alerts raised since the previous snapshot.
    pub alerts: Vec<Alert>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            gps: GeoCoordinate::new(DEFAULT_HOME_LAT, DEFAULT_HOME_LON),
            altitude: 0.0,
            speed: 0.0,
            roll: 0.0,
            pitch: 0.0,
            heading: DEFAULT_HEADING,
            vertical_speed: 0.0,
            distance_from_home: 0.0,
            signal_strength: DEFAULT_SIGNAL_STRENGTH,
            satellites: DEFAULT_SATELLITES,
            battery: BatteryState::from_percentage(DEFAULT_BATTERY_PCT),
            flight_mode: FlightMode::default(),
            armed: false,
            flight_time: "00:00".to_string(),
            site_detected: false,
            current_site: None,
            detected_sites: Vec::new(),
            gps_track: Vec::new(),
            alerts: Vec::new(),
            events: Vec::new(),
        }
    }
}
