//! Operator commands sent from the dashboard to the simulator.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All operator actions the simulator accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    /// Arm or disarm the airframe. Disarming is rejected with an alert while
    /// a mission is active.
    SetArmed { armed: bool },
    /// Begin a mission: reset the clock, clear track and detections, request
    /// a home fix, arm, and enter Take Off.
    StartMission,
    /// End the active mission and emit a `MissionEnded` summary event.
    EndMission,
}
