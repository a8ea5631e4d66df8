//! Tests for the telemetry simulator: state machine transitions, tick
//! dynamics, detection windows, and determinism.

use gcs_core::commands::OperatorCommand;
use gcs_core::enums::{AlertLevel, FlightMode};
use gcs_core::events::SimEvent;
use gcs_core::types::GeoCoordinate;

use crate::engine::{SimConfig, TelemetrySimulator};
use crate::locator::FixedLocator;

fn armed_engine(seed: u64) -> TelemetrySimulator {
    let mut engine = TelemetrySimulator::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(OperatorCommand::SetArmed { armed: true });
    engine
}

// ---- Determinism ----

#[test]
fn same_seed_same_snapshots() {
    let mut engine_a = armed_engine(12345);
    let mut engine_b = armed_engine(12345);
    engine_a.queue_command(OperatorCommand::StartMission);
    engine_b.queue_command(OperatorCommand::StartMission);

    for _ in 0..120 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn different_seeds_diverge() {
    let mut engine_a = armed_engine(111);
    let mut engine_b = armed_engine(222);
    engine_a.queue_command(OperatorCommand::StartMission);
    engine_b.queue_command(OperatorCommand::StartMission);

    let mut diverged = false;
    for _ in 0..30 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();
        if serde_json::to_string(&snap_a).unwrap() != serde_json::to_string(&snap_b).unwrap() {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should produce divergent telemetry");
}

// ---- Arming state machine ----

#[test]
fn arm_enters_loiter() {
    let mut engine = armed_engine(1);
    let snap = engine.tick();
    assert!(snap.armed);
    assert_eq!(snap.flight_mode, FlightMode::Loiter);
    assert!(!engine.mission_active());
}

#[test]
fn disarm_while_idle_zeroes_flight_values() {
    let mut engine = armed_engine(2);
    engine.tick();
    engine.queue_command(OperatorCommand::SetArmed { armed: false });
    let snap = engine.tick();
    assert!(!snap.armed);
    assert_eq!(snap.flight_mode, FlightMode::Manual);
    assert_eq!(snap.altitude, 0.0);
    assert_eq!(snap.speed, 0.0);
    assert_eq!(snap.roll, 0.0);
    assert_eq!(snap.pitch, 0.0);
    assert_eq!(snap.vertical_speed, 0.0);
    assert_eq!(snap.distance_from_home, 0.0);
    assert!(snap.alerts.is_empty());
}

#[test]
fn disarm_during_mission_rejected_with_alert() {
    let mut engine = armed_engine(3);
    engine.queue_command(OperatorCommand::StartMission);
    engine.tick();

    engine.queue_command(OperatorCommand::SetArmed { armed: false });
    let snap = engine.tick();
    assert!(snap.armed, "disarm must be rejected while a mission is active");
    assert_eq!(snap.flight_mode, FlightMode::TakeOff);
    assert_eq!(snap.alerts.len(), 1);
    assert_eq!(snap.alerts[0].level, AlertLevel::Warning);
    assert!(snap.alerts[0].message.contains("Cannot disarm"));

    // The alert is drained, not repeated.
    let snap = engine.tick();
    assert!(snap.alerts.is_empty());
}

// ---- Mission lifecycle ----

#[test]
fn start_mission_resets_track_and_detections() {
    let mut engine = armed_engine(4);
    engine.queue_command(OperatorCommand::StartMission);
    for _ in 0..30 {
        engine.tick();
    }
    assert!(!engine.telemetry().gps_track.is_empty());

    engine.queue_command(OperatorCommand::EndMission);
    engine.tick();
    engine.queue_command(OperatorCommand::StartMission);
    let snap = engine.tick();
    // One tick into the new mission: exactly one fresh track point.
    assert_eq!(snap.gps_track.len(), 1);
    assert!(snap.detected_sites.is_empty());
    assert_eq!(snap.flight_time, "00:01");
    assert_eq!(snap.flight_mode, FlightMode::TakeOff);
}

#[test]
fn end_mission_emits_summary_and_disarms() {
    let mut engine = armed_engine(5);
    engine.queue_command(OperatorCommand::StartMission);
    for _ in 0..30 {
        engine.tick();
    }
    let track_len = engine.telemetry().gps_track.len();
    let sites_len = engine.telemetry().detected_sites.len();

    engine.queue_command(OperatorCommand::EndMission);
    let snap = engine.tick();
    assert!(!snap.armed);
    assert_eq!(snap.flight_mode, FlightMode::Manual);
    assert_eq!(snap.flight_time, "00:00");

    let summary = snap
        .events
        .iter()
        .find_map(|e| match e {
            SimEvent::MissionEnded { summary } => Some(summary),
            _ => None,
        })
        .expect("mission end should emit a summary");
    assert_eq!(summary.flight_time, "00:30");
    assert_eq!(summary.gps_track.len(), track_len);
    assert_eq!(summary.detected_sites.len(), sites_len);

    // Track already handed off is not cleared from the snapshot.
    assert_eq!(snap.gps_track.len(), track_len);
}

#[test]
fn end_mission_when_inactive_is_noop() {
    let mut engine = armed_engine(6);
    engine.queue_command(OperatorCommand::EndMission);
    let snap = engine.tick();
    assert!(snap.events.is_empty());
    assert!(snap.armed);
}

// ---- Per-tick properties ----

#[test]
fn battery_bounded_over_long_run() {
    let mut engine = armed_engine(7);
    engine.queue_command(OperatorCommand::StartMission);
    for _ in 0..5000 {
        let snap = engine.tick();
        assert!(
            (0.0..=100.0).contains(&snap.battery.percentage),
            "battery {} out of range",
            snap.battery.percentage
        );
        assert!(snap.battery.voltage >= 12.0);
    }
}

#[test]
fn heading_always_in_range() {
    let mut engine = armed_engine(8);
    engine.queue_command(OperatorCommand::StartMission);
    for _ in 0..2000 {
        let snap = engine.tick();
        assert!(
            (0.0..360.0).contains(&snap.heading),
            "heading {} out of range",
            snap.heading
        );
    }
}

#[test]
fn track_grows_one_point_per_active_tick() {
    let mut engine = armed_engine(9);
    engine.queue_command(OperatorCommand::StartMission);
    for n in 1..=60u64 {
        let snap = engine.tick();
        assert_eq!(snap.gps_track.len() as u64, n);
    }
}

#[test]
fn armed_idle_accumulates_no_track() {
    let mut engine = armed_engine(10);
    for _ in 0..20 {
        let snap = engine.tick();
        assert!(snap.gps_track.is_empty());
        assert_eq!(snap.flight_time, "00:00");
        assert_eq!(snap.altitude, 0.0);
    }
}

#[test]
fn detections_grow_monotonically() {
    let mut engine = armed_engine(11);
    engine.queue_command(OperatorCommand::StartMission);
    let mut previous = 0;
    for _ in 0..200 {
        let snap = engine.tick();
        assert!(snap.detected_sites.len() >= previous);
        previous = snap.detected_sites.len();
    }
    // 200 seconds cover eight detection cycles.
    assert_eq!(previous, 8);
}

#[test]
fn scenario_25_ticks_one_detection() {
    let mut engine = armed_engine(20);
    engine.queue_command(OperatorCommand::StartMission);
    let mut detection_events = 0;
    let mut last = None;
    for _ in 0..25 {
        let snap = engine.tick();
        detection_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::SiteDetected { .. }))
            .count();
        last = Some(snap);
    }
    let snap = last.unwrap();
    assert_eq!(snap.gps_track.len(), 25);
    assert_eq!(snap.detected_sites.len(), 1);
    assert_eq!(detection_events, 1);
}

#[test]
fn battery_never_rises_beyond_jitter() {
    let mut engine = armed_engine(21);
    engine.queue_command(OperatorCommand::StartMission);
    let mut previous = engine.tick().battery.percentage;
    for _ in 0..500 {
        let current = engine.tick().battery.percentage;
        // Mission drain dominates the bounded positive jitter.
        assert!(current < previous);
        previous = current;
    }
}

// ---- Home fix ----

#[test]
fn home_fix_applied_without_blocking() {
    let fix = GeoCoordinate::new(14.5995, 120.9842);
    let mut engine =
        TelemetrySimulator::with_locator(SimConfig::default(), Box::new(FixedLocator(fix)));
    engine.queue_command(OperatorCommand::SetArmed { armed: true });
    engine.queue_command(OperatorCommand::StartMission);
    let snap = engine.tick();
    assert_eq!(engine.home(), fix);
    // One second into the orbit around the fixed home.
    assert!((snap.gps.lat - fix.lat).abs() < 0.001);
    assert!((snap.gps.lon - fix.lon).abs() < 0.001);
}

#[test]
fn missing_fix_keeps_default_home() {
    let mut engine = armed_engine(22);
    engine.queue_command(OperatorCommand::StartMission);
    let snap = engine.tick();
    assert_eq!(
        engine.home(),
        GeoCoordinate::new(34.0522, -118.2437)
    );
    assert!((snap.gps.lat - 34.0522).abs() < 0.001);
}
