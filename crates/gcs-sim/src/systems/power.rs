//! Battery drain and voltage derivation.
//!
//! The slow display-clock bleed applies every second. The armed drain and
//! jitter only apply while the airframe is armed, with a larger drain
//! during an active mission.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gcs_core::constants::*;
use gcs_core::state::TelemetrySnapshot;
use gcs_core::types::BatteryState;

/// Advance the battery level by one second and publish it to the snapshot.
pub fn run(
    telemetry: &mut TelemetrySnapshot,
    level: &mut f64,
    mission_active: bool,
    rng: &mut ChaCha8Rng,
) {
    let mut next = *level - BATTERY_DISPLAY_BLEED;
    if telemetry.armed {
        let drain = if mission_active {
            BATTERY_MISSION_DRAIN
        } else {
            BATTERY_IDLE_DRAIN
        };
        next = next - drain + rng.gen::<f64>() * BATTERY_JITTER_MAX;
    }
    *level = next.clamp(0.0, 100.0);
    telemetry.battery = BatteryState::from_percentage(*level);
}
