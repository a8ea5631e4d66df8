//! Headless ground control station demo.
//!
//! Spawns the sim loop, scripts a short mission against it, and prints
//! telemetry snapshots as JSON lines. Useful for eyeballing the simulator
//! without a frontend attached.

use std::time::Duration;

use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use gcs_app::sim_loop;
use gcs_app::state::AppState;
use gcs_core::commands::OperatorCommand;
use gcs_core::mission::MissionPlan;
use gcs_core::types::GeoCoordinate;
use gcs_sim::engine::SimConfig;

fn main() -> Result<(), String> {
    setup_logging();
    info!("Ground control station starting...");

    let state = AppState::new();
    sim_loop::start(&state, SimConfig::default())?;

    *state.active_plan.lock().map_err(|e| e.to_string())? = Some(MissionPlan {
        id: None,
        name: "Demo Survey".to_string(),
        waypoints: vec![
            GeoCoordinate::new(34.0510, -118.2440),
            GeoCoordinate::new(34.0530, -118.2420),
        ],
        altitude: 50,
        speed: 10,
    });

    sim_loop::send_command(&state, OperatorCommand::SetArmed { armed: true })?;
    sim_loop::send_command(&state, OperatorCommand::StartMission)?;

    for _ in 0..30 {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snapshot) = sim_loop::latest_snapshot(&state)? {
            let json =
                serde_json::to_string(&snapshot).map_err(|e| format!("serialize failed: {e}"))?;
            println!("{json}");
        }
    }

    sim_loop::send_command(&state, OperatorCommand::EndMission)?;
    std::thread::sleep(Duration::from_secs(2));

    for record in state.missions.lock().map_err(|e| e.to_string())?.iter() {
        info!(
            id = %record.id,
            name = %record.name,
            duration = %record.duration,
            sites = record.detected_sites.len(),
            "mission complete"
        );
    }

    sim_loop::shutdown(&state)?;
    info!("Ground control station stopped");
    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .try_init()
        .expect("Failed to initialize logging");
}
