//! Events emitted by the simulator for UI feedback and mission bookkeeping.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;
use crate::mission::MissionSummary;
use crate::types::BreedingSiteInfo;

/// Events the surrounding application reacts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A breeding site entered detection (rising edge of the window).
    SiteDetected { site: BreedingSiteInfo },
    /// A mission ended; the summary is ready to be materialized into a record.
    MissionEnded { summary: MissionSummary },
}

/// Alert for the UI notice queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
