//! Breeding-site detection windows.
//!
//! Detection is a periodic boolean window over elapsed mission seconds. A
//! new site record is synthesized only on the rising edge of the window;
//! while the window stays open, the same record keeps being reported.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gcs_core::constants::*;
use gcs_core::enums::SiteCategory;
use gcs_core::state::TelemetrySnapshot;
use gcs_core::types::BreedingSiteInfo;

/// Whether elapsed seconds fall inside the detection window of the current
/// cycle. The window arithmetic mirrors the flight software exactly.
pub fn in_detection_window(seconds: u64) -> bool {
    let s = seconds % DETECTION_CYCLE_SECS;
    s > DETECTION_WINDOW_OPEN && s < DETECTION_WINDOW_CLOSE
}

/// Evaluate the window for this tick, synthesizing a record on a rising
/// edge. Returns the new record if one was created.
pub fn run(
    telemetry: &mut TelemetrySnapshot,
    seconds: u64,
    mission_active: bool,
    rng: &mut ChaCha8Rng,
) -> Option<BreedingSiteInfo> {
    let in_window = mission_active && in_detection_window(seconds);

    let mut new_site = None;
    if in_window {
        if !telemetry.site_detected {
            let site = synthesize_site(rng);
            telemetry.detected_sites.push(site.clone());
            telemetry.current_site = Some(site.clone());
            new_site = Some(site);
        }
    } else {
        telemetry.current_site = None;
    }
    telemetry.site_detected = in_window;
    new_site
}

fn synthesize_site(rng: &mut ChaCha8Rng) -> BreedingSiteInfo {
    let category = if rng.gen::<f64>() > 0.5 {
        SiteCategory::Enclosed
    } else {
        SiteCategory::Open
    };
    let object = match category {
        SiteCategory::Enclosed => ENCLOSED_SITE_OBJECTS[0],
        SiteCategory::Open => OPEN_SITE_OBJECTS[0],
    };
    BreedingSiteInfo {
        category,
        object: object.to_string(),
    }
}
