//! Flight dynamics: orbit position, altitude, attitude, heading, and the
//! GPS track.
//!
//! While a mission is active the drone flies a fixed-radius circle around
//! home with sinusoidal altitude/attitude oscillations plus bounded jitter.
//! While merely armed, all dynamic values hold at neutral and the position
//! holds at home.

use rand_chacha::ChaCha8Rng;

use gcs_core::constants::*;
use gcs_core::state::TelemetrySnapshot;
use gcs_core::types::GeoCoordinate;

use super::jitter;

/// Advance position, attitude, and track by one second.
pub fn run(
    telemetry: &mut TelemetrySnapshot,
    home: &GeoCoordinate,
    seconds: u64,
    mission_active: bool,
    rng: &mut ChaCha8Rng,
) {
    let s = seconds as f64;

    let gps = if mission_active {
        GeoCoordinate::new(
            home.lat + (s * ORBIT_RATE).sin() * ORBIT_RADIUS_DEG,
            home.lon + (s * ORBIT_RATE).cos() * ORBIT_RADIUS_DEG,
        )
    } else {
        *home
    };
    if mission_active {
        telemetry.gps_track.push(gps);
    }
    telemetry.gps = gps;

    let altitude = if mission_active {
        ALTITUDE_BASE_M
            + (s * ALTITUDE_RATE).sin() * ALTITUDE_SWING_M
            + jitter(rng, ALTITUDE_JITTER_SPAN)
    } else {
        0.0
    };
    telemetry.vertical_speed = altitude - telemetry.altitude;
    telemetry.altitude = altitude;

    telemetry.speed = if mission_active {
        SPEED_BASE_MPS + (s * SPEED_RATE).cos() * SPEED_SWING_MPS + jitter(rng, SPEED_JITTER_SPAN)
    } else {
        0.0
    };
    telemetry.roll = if mission_active {
        (s * ROLL_RATE).sin() * ROLL_SWING_DEG + jitter(rng, ATTITUDE_JITTER_SPAN)
    } else {
        0.0
    };
    telemetry.pitch = if mission_active {
        (s * PITCH_RATE).cos() * PITCH_SWING_DEG + jitter(rng, ATTITUDE_JITTER_SPAN)
    } else {
        0.0
    };

    let heading_step = if mission_active {
        HEADING_STEP_DEG + jitter(rng, HEADING_JITTER_SPAN)
    } else {
        0.0
    };
    telemetry.heading = (telemetry.heading + heading_step).rem_euclid(360.0);

    telemetry.distance_from_home = if mission_active {
        ((s * 2.0).powi(2) + s.powi(2)).sqrt()
    } else {
        0.0
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn armed_idle_holds_neutral_at_home() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let home = GeoCoordinate::new(34.0522, -118.2437);
        let mut telemetry = TelemetrySnapshot {
            armed: true,
            ..Default::default()
        };
        run(&mut telemetry, &home, 0, false, &mut rng);
        assert_eq!(telemetry.gps, home);
        assert_eq!(telemetry.altitude, 0.0);
        assert_eq!(telemetry.speed, 0.0);
        assert_eq!(telemetry.roll, 0.0);
        assert_eq!(telemetry.pitch, 0.0);
        assert_eq!(telemetry.heading, 345.0);
        assert!(telemetry.gps_track.is_empty());
    }

    #[test]
    fn heading_wraps_into_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let home = GeoCoordinate::default();
        let mut telemetry = TelemetrySnapshot::default();
        for s in 1..5000 {
            run(&mut telemetry, &home, s, true, &mut rng);
            assert!((0.0..360.0).contains(&telemetry.heading), "heading {}", telemetry.heading);
        }
    }

    #[test]
    fn track_appends_once_per_active_second() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let home = GeoCoordinate::default();
        let mut telemetry = TelemetrySnapshot::default();
        for s in 1..=40 {
            run(&mut telemetry, &home, s, true, &mut rng);
        }
        assert_eq!(telemetry.gps_track.len(), 40);
        assert_eq!(*telemetry.gps_track.last().unwrap(), telemetry.gps);
    }

    #[test]
    fn vertical_speed_is_altitude_delta() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let home = GeoCoordinate::default();
        let mut telemetry = TelemetrySnapshot::default();
        run(&mut telemetry, &home, 1, true, &mut rng);
        let prev = telemetry.altitude;
        run(&mut telemetry, &home, 2, true, &mut rng);
        assert!((telemetry.vertical_speed - (telemetry.altitude - prev)).abs() < 1e-12);
    }

    #[test]
    fn distance_from_home_zero_when_idle() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let home = GeoCoordinate::default();
        let mut telemetry = TelemetrySnapshot::default();
        run(&mut telemetry, &home, 10, true, &mut rng);
        assert!(telemetry.distance_from_home > 0.0);
        run(&mut telemetry, &home, 10, false, &mut rng);
        assert_eq!(telemetry.distance_from_home, 0.0);
    }
}
