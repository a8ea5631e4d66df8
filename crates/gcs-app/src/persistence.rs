//! Saved mission plans — a single JSON array read and written wholesale.
//!
//! There is no partial update and no concurrency control; the store is
//! local to one station.

use std::fs;
use std::path::{Path, PathBuf};

use gcs_core::constants::PLANS_FILE_NAME;
use gcs_core::mission::MissionPlan;

use crate::util::epoch_millis;

fn plans_path(dir: &Path) -> PathBuf {
    dir.join(PLANS_FILE_NAME)
}

/// Load all saved plans. A missing or unreadable file is an empty store.
pub fn load_plans(dir: &Path) -> Vec<MissionPlan> {
    let json = match fs::read_to_string(plans_path(dir)) {
        Ok(json) => json,
        Err(_) => return Vec::new(),
    };
    serde_json::from_str(&json).unwrap_or_default()
}

/// Append a plan to the store, assigning it a generated id. Returns the
/// stored plan.
pub fn save_plan(dir: &Path, plan: &MissionPlan) -> Result<MissionPlan, String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create plans directory: {e}"))?;
    let mut plans = load_plans(dir);
    // Timestamp ids can collide for rapid saves; bump until unique.
    let mut stamp = epoch_millis();
    while plans
        .iter()
        .any(|p| p.id.as_deref() == Some(&format!("plan-{stamp}")))
    {
        stamp += 1;
    }
    let mut stored = plan.clone();
    stored.id = Some(format!("plan-{stamp}"));
    plans.push(stored.clone());
    write_plans(dir, &plans)?;
    Ok(stored)
}

/// Remove the plan with the given id. Unknown ids are a no-op.
pub fn delete_plan(dir: &Path, id: &str) -> Result<(), String> {
    let mut plans = load_plans(dir);
    let before = plans.len();
    plans.retain(|p| p.id.as_deref() != Some(id));
    if plans.len() != before {
        write_plans(dir, &plans)?;
    }
    Ok(())
}

fn write_plans(dir: &Path, plans: &[MissionPlan]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(plans)
        .map_err(|e| format!("Failed to serialize plans: {e}"))?;
    fs::write(plans_path(dir), json).map_err(|e| format!("Failed to write plans file: {e}"))
}
