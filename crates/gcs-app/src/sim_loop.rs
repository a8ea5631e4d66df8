//! Sim loop thread — runs the telemetry simulator at 1 Hz.
//!
//! The simulator is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are stored in
//! shared state for synchronous polling, and mission-end events are
//! externalized into the mission log as they arrive.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use gcs_core::constants::TICK_RATE;
use gcs_core::commands::OperatorCommand;
use gcs_core::events::SimEvent;
use gcs_core::mission::{MissionPlan, MissionRecord};
use gcs_core::state::TelemetrySnapshot;
use gcs_planner::checklist::{can_launch, PreflightChecklist};
use gcs_planner::editor::PlanEditor;
use gcs_sim::engine::{SimConfig, TelemetrySimulator};

use crate::records;
use crate::state::{AppState, LoopCommand};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the sim loop in a new thread.
///
/// Returns the command sender for the control surface to use.
pub fn spawn_sim_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<TelemetrySnapshot>>>,
    missions: Arc<Mutex<Vec<MissionRecord>>>,
    active_plan: Arc<Mutex<Option<MissionPlan>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("gcs-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, cmd_rx, &latest_snapshot, &missions, &active_plan);
        })
        .expect("Failed to spawn sim loop thread");

    cmd_tx
}

/// The sim loop. Runs until Shutdown command or channel disconnect.
fn run_sim_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<TelemetrySnapshot>>,
    missions: &Mutex<Vec<MissionRecord>>,
    active_plan: &Mutex<Option<MissionPlan>>,
) {
    let mut engine = TelemetrySimulator::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Externalize events into the mission log
        handle_events(&snapshot.events, missions, active_plan);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Turn mission-end events into log records. The record takes the active
/// plan's name when one is loaded; the plan is consumed either way.
fn handle_events(
    events: &[SimEvent],
    missions: &Mutex<Vec<MissionRecord>>,
    active_plan: &Mutex<Option<MissionPlan>>,
) {
    for event in events {
        if let SimEvent::MissionEnded { summary } = event {
            let plan_name = active_plan
                .lock()
                .ok()
                .and_then(|mut lock| lock.take())
                .map(|plan| plan.name);
            if let Ok(mut log) = missions.lock() {
                let record = records::materialize(plan_name, summary, log.len());
                tracing::info!(id = %record.id, name = %record.name, "mission recorded");
                log.insert(0, record);
            }
        }
    }
}

/// Start the simulation. Spawns the sim loop thread if not already running.
pub fn start(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let cmd_tx = spawn_sim_loop(
        config,
        state.latest_snapshot.clone(),
        state.missions.clone(),
        state.active_plan.clone(),
    );

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send an operator command to the simulation.
pub fn send_command(state: &AppState, command: OperatorCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Operator(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Launch a mission from the planner. The launch gate must pass; the
/// assembled plan becomes the active plan, and the drone is armed and
/// started in one step.
pub fn launch(
    state: &AppState,
    editor: &PlanEditor,
    checklist: &PreflightChecklist,
    name: &str,
    altitude: u32,
    speed: u32,
) -> Result<(), String> {
    if !can_launch(editor, checklist) {
        return Err(
            "Launch requires at least 2 waypoints and a completed pre-flight checklist."
                .to_string(),
        );
    }
    let plan = editor.assemble_plan(name, altitude, speed);
    *state.active_plan.lock().map_err(|e| e.to_string())? = Some(plan);
    send_command(state, OperatorCommand::SetArmed { armed: true })?;
    send_command(state, OperatorCommand::StartMission)
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn latest_snapshot(state: &AppState) -> Result<Option<TelemetrySnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the loop thread. Safe to call when it was never started.
pub fn shutdown(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    if let Some(tx) = tx_lock.take() {
        let _ = tx.send(LoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}
