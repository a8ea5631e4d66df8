//! Flight log exports: CSV over the mission list, GPX over a single
//! mission's track. Pure formatting functions; callers turn the returned
//! strings into downloadable files.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};

use gcs_core::mission::MissionRecord;

/// Which slice of the mission log to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRange {
    Last10,
    Last20,
    Last7Days,
    Last30Days,
    All,
}

impl ExportRange {
    /// Label used in export file names.
    pub fn label(&self) -> &'static str {
        match self {
            ExportRange::Last10 => "last10",
            ExportRange::Last20 => "last20",
            ExportRange::Last7Days => "last7days",
            ExportRange::Last30Days => "last30days",
            ExportRange::All => "all",
        }
    }
}

/// CSV header, fixed column order.
const CSV_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Date",
    "Duration",
    "Status",
    "Location",
    "Detected Sites Count",
    "GPS Track Points",
];

/// Export the selected missions as CSV. An empty selection is rejected so
/// the caller can surface the notice instead of writing an empty file.
pub fn export_missions_csv(
    missions: &[MissionRecord],
    range: ExportRange,
    now: DateTime<Local>,
) -> Result<String, String> {
    let selected = select_range(missions, range, now);
    if selected.is_empty() {
        return Err("No missions to export for the selected range.".to_string());
    }

    let mut rows = vec![CSV_HEADERS.join(",")];
    for m in selected {
        rows.push(
            [
                m.id.clone(),
                quote(&m.name),
                m.date.clone(),
                m.duration.clone(),
                m.status.to_string(),
                quote(&m.location),
                m.detected_sites.len().to_string(),
                m.gps_track.len().to_string(),
            ]
            .join(","),
        );
    }
    Ok(rows.join("\n"))
}

/// File name for a CSV export, e.g. `gcs-mission-logs-last10-2025-10-09.csv`.
pub fn csv_file_name(range: ExportRange, now: DateTime<Local>) -> String {
    format!(
        "gcs-mission-logs-{}-{}.csv",
        range.label(),
        now.format("%Y-%m-%d")
    )
}

/// Export one mission's GPS track as a GPX 1.1 document. Missions without
/// recorded track points are rejected at this boundary.
pub fn export_track_gpx(mission: &MissionRecord, now: DateTime<Utc>) -> Result<String, String> {
    if mission.gps_track.is_empty() {
        return Err("Mission has no recorded GPS track.".to_string());
    }

    let trackpoints = mission
        .gps_track
        .iter()
        .map(|p| format!("    <trkpt lat=\"{:.6}\" lon=\"{:.6}\"></trkpt>", p.lat, p.lon))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="Ground Control System" xmlns="http://www.topografix.com/GPX/1/1">
  <metadata>
    <name>Mission {name} Track</name>
    <time>{time}</time>
  </metadata>
  <trk>
    <name>{name}</name>
    <trkseg>
{trackpoints}
    </trkseg>
  </trk>
</gpx>"#,
        name = mission.name,
        time = now.to_rfc3339_opts(SecondsFormat::Millis, true),
    ))
}

/// File name for a GPX export, e.g. `mission-m-173031-track.gpx`.
pub fn gpx_file_name(mission: &MissionRecord) -> String {
    format!("mission-{}-track.gpx", mission.id)
}

fn select_range(
    missions: &[MissionRecord],
    range: ExportRange,
    now: DateTime<Local>,
) -> Vec<&MissionRecord> {
    let today = now.date_naive();
    match range {
        ExportRange::Last10 => missions.iter().take(10).collect(),
        ExportRange::Last20 => missions.iter().take(20).collect(),
        ExportRange::Last7Days => missions
            .iter()
            .filter(|m| within_days(&m.date, today, 7))
            .collect(),
        ExportRange::Last30Days => missions
            .iter()
            .filter(|m| within_days(&m.date, today, 30))
            .collect(),
        ExportRange::All => missions.iter().collect(),
    }
}

/// Whether a record's display date falls within `days` of today.
/// Unparseable dates are excluded.
fn within_days(date: &str, today: NaiveDate, days: i64) -> bool {
    match NaiveDate::parse_from_str(date, "%b %d, %Y") {
        Ok(d) => (today - d).num_days().abs() <= days,
        Err(_) => false,
    }
}

/// CSV-quote a field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
