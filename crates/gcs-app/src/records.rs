//! Completed-mission record materialization.

use chrono::Local;

use gcs_core::constants::MISSION_LOCATION;
use gcs_core::enums::MissionStatus;
use gcs_core::mission::{MissionRecord, MissionSummary};

use crate::util::epoch_millis;

/// Build the history record for a finished mission. `mission_count` is the
/// number of records already in the log, used for the fallback name.
pub fn materialize(
    plan_name: Option<String>,
    summary: &MissionSummary,
    mission_count: usize,
) -> MissionRecord {
    let name = plan_name.unwrap_or_else(|| format!("Mission {}", mission_count + 1));
    MissionRecord {
        id: format!("m-{}", epoch_millis()),
        name,
        date: Local::now().format("%b %-d, %Y").to_string(),
        duration: format!("{} secs", duration_secs(&summary.flight_time)),
        status: MissionStatus::Completed,
        location: MISSION_LOCATION.to_string(),
        gps_track: summary.gps_track.clone(),
        detected_sites: summary.detected_sites.clone(),
    }
}

/// Parse a `MM:SS` flight time into whole seconds. Malformed parts count
/// as zero.
fn duration_secs(flight_time: &str) -> u64 {
    let mut parts = flight_time.splitn(2, ':');
    let minutes = parts
        .next()
        .and_then(|p| p.parse::<u64>().ok())
        .unwrap_or(0);
    let seconds = parts
        .next()
        .and_then(|p| p.parse::<u64>().ok())
        .unwrap_or(0);
    minutes * 60 + seconds
}
