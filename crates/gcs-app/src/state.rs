//! Application state shared between the control surface and the sim loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use gcs_core::commands::OperatorCommand;
use gcs_core::mission::{MissionPlan, MissionRecord};
use gcs_core::state::TelemetrySnapshot;

/// Commands sent from the control surface to the sim loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the simulator.
    Operator(OperatorCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The loop thread and the control surface share:
/// - `mpsc::Sender` wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that may not exist before `start`
/// - `Arc<Mutex<...>>` for values the loop thread writes
pub struct AppState {
    /// Channel sender to forward commands to the loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<TelemetrySnapshot>>>,
    /// Completed-mission history, newest first.
    pub missions: Arc<Mutex<Vec<MissionRecord>>>,
    /// The plan of the mission currently in flight, if any.
    pub active_plan: Arc<Mutex<Option<MissionPlan>>>,
    /// Whether the loop thread is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            missions: Arc::new(Mutex::new(Vec::new())),
            active_plan: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
