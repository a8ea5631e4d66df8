//! Mission plans, end-of-mission summaries, and completed-mission records.

use serde::{Deserialize, Serialize};

use crate::enums::MissionStatus;
use crate::types::{BreedingSiteInfo, GeoCoordinate};

/// A planned flight path. Immutable once launched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionPlan {
    /// Storage id, assigned when the plan is saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub waypoints: Vec<GeoCoordinate>,
    /// Flight altitude (meters).
    pub altitude: u32,
    /// Flight speed (m/s).
    pub speed: u32,
}

/// What the simulator hands back when a mission ends. The application
/// materializes this into a [`MissionRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSummary {
    /// Final flight time, `MM:SS`.
    pub flight_time: String,
    pub gps_track: Vec<GeoCoordinate>,
    pub detected_sites: Vec<BreedingSiteInfo>,
}

/// One entry in the mission history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub id: String,
    pub name: String,
    /// Display date, e.g. "Oct 9, 2025".
    pub date: String,
    /// Display duration, e.g. "142 secs".
    pub duration: String,
    pub status: MissionStatus,
    pub location: String,
    #[serde(default)]
    pub gps_track: Vec<GeoCoordinate>,
    #[serde(default)]
    pub detected_sites: Vec<BreedingSiteInfo>,
}
