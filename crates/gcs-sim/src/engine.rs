//! Telemetry simulator — the core of the station.
//!
//! `TelemetrySimulator` owns the drone state, processes operator commands,
//! runs all per-tick systems, and produces `TelemetrySnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::sync::mpsc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gcs_core::commands::OperatorCommand;
use gcs_core::constants::{DEFAULT_HOME_LAT, DEFAULT_HOME_LON};
use gcs_core::enums::{AlertLevel, FlightMode};
use gcs_core::events::{Alert, SimEvent};
use gcs_core::mission::MissionSummary;
use gcs_core::state::TelemetrySnapshot;
use gcs_core::types::{BatteryState, GeoCoordinate, MissionClock};

use crate::locator::{HomeLocator, NoLocator};
use crate::systems;

/// Configuration for a new simulator.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Home coordinate used until a device fix arrives.
    pub home: GeoCoordinate,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            home: GeoCoordinate::new(DEFAULT_HOME_LAT, DEFAULT_HOME_LON),
        }
    }
}

/// The telemetry simulator. Owns the drone state machine and all sim state.
pub struct TelemetrySimulator {
    telemetry: TelemetrySnapshot,
    clock: MissionClock,
    /// Engine-owned battery level. Never resets upward; the snapshot always
    /// reflects it.
    battery_level: f64,
    home: GeoCoordinate,
    mission_active: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<OperatorCommand>,
    alerts: Vec<Alert>,
    events: Vec<SimEvent>,
    tick: u64,
    locator: Box<dyn HomeLocator>,
    home_fix: Option<mpsc::Receiver<GeoCoordinate>>,
}

impl TelemetrySimulator {
    /// Create a new simulator with no device location source.
    pub fn new(config: SimConfig) -> Self {
        Self::with_locator(config, Box::new(NoLocator))
    }

    /// Create a new simulator with the given home location source.
    pub fn with_locator(config: SimConfig, locator: Box<dyn HomeLocator>) -> Self {
        Self {
            telemetry: TelemetrySnapshot::default(),
            clock: MissionClock::default(),
            battery_level: gcs_core::constants::DEFAULT_BATTERY_PCT,
            home: config.home,
            mission_active: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            alerts: Vec::new(),
            events: Vec::new(),
            tick: 0,
            locator,
            home_fix: None,
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one second and return the resulting
    /// snapshot. Alerts and events raised since the previous tick are
    /// drained into it.
    pub fn tick(&mut self) -> TelemetrySnapshot {
        self.process_commands();
        self.tick += 1;

        if self.telemetry.armed && self.mission_active {
            self.clock.advance();
        }
        self.poll_home_fix();

        let seconds = self.clock.seconds();
        systems::power::run(
            &mut self.telemetry,
            &mut self.battery_level,
            self.mission_active,
            &mut self.rng,
        );
        if self.telemetry.armed {
            systems::dynamics::run(
                &mut self.telemetry,
                &self.home,
                seconds,
                self.mission_active,
                &mut self.rng,
            );
            if let Some(site) =
                systems::detection::run(&mut self.telemetry, seconds, self.mission_active, &mut self.rng)
            {
                self.events.push(SimEvent::SiteDetected { site });
            }
            self.telemetry.flight_time = self.clock.formatted();
        }

        let mut snapshot = self.telemetry.clone();
        snapshot.alerts = std::mem::take(&mut self.alerts);
        snapshot.events = std::mem::take(&mut self.events);
        snapshot
    }

    pub fn armed(&self) -> bool {
        self.telemetry.armed
    }

    pub fn mission_active(&self) -> bool {
        self.mission_active
    }

    /// Current home coordinate (default or device fix).
    pub fn home(&self) -> GeoCoordinate {
        self.home
    }

    /// Current telemetry without draining alerts or events.
    pub fn telemetry(&self) -> &TelemetrySnapshot {
        &self.telemetry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SetArmed { armed } => self.set_armed(armed),
            OperatorCommand::StartMission => self.start_mission(),
            OperatorCommand::EndMission => self.end_mission(),
        }
    }

    /// Arm or disarm. Disarming during an active mission is rejected with a
    /// user-visible alert and leaves all state untouched.
    fn set_armed(&mut self, armed: bool) {
        if self.mission_active && !armed {
            self.alerts.push(Alert {
                level: AlertLevel::Warning,
                message: "Cannot disarm while a mission is active. Please end the mission first."
                    .to_string(),
                tick: self.tick,
            });
            return;
        }
        self.telemetry.armed = armed;
        self.telemetry.flight_mode = if armed {
            FlightMode::Loiter
        } else {
            FlightMode::Manual
        };
        if !self.mission_active {
            self.telemetry.altitude = 0.0;
            self.telemetry.speed = 0.0;
            self.telemetry.roll = 0.0;
            self.telemetry.pitch = 0.0;
            self.telemetry.vertical_speed = 0.0;
            self.telemetry.distance_from_home = 0.0;
        }
    }

    /// Enter Armed/Active: wholesale snapshot replacement, keeping the
    /// engine-owned battery level and the current home coordinate.
    fn start_mission(&mut self) {
        self.clock.reset();
        self.home_fix = Some(self.locator.request());
        self.telemetry = TelemetrySnapshot {
            armed: true,
            flight_mode: FlightMode::TakeOff,
            gps: self.home,
            battery: BatteryState::from_percentage(self.battery_level),
            ..TelemetrySnapshot::default()
        };
        self.mission_active = true;
    }

    /// Leave Armed/Active: emit the mission summary, disarm, and reset the
    /// displayed flight time. Track and detections stay in the snapshot for
    /// the caller to externalize.
    fn end_mission(&mut self) {
        if !self.mission_active {
            return;
        }
        self.mission_active = false;
        let summary = MissionSummary {
            flight_time: self.telemetry.flight_time.clone(),
            gps_track: self.telemetry.gps_track.clone(),
            detected_sites: self.telemetry.detected_sites.clone(),
        };
        self.events.push(SimEvent::MissionEnded { summary });
        self.telemetry.armed = false;
        self.telemetry.flight_mode = FlightMode::Manual;
        self.telemetry.flight_time = "00:00".to_string();
    }

    /// Non-blocking poll of the one-shot home fix. A closed channel means
    /// the lookup failed or was denied; the default home stays in effect.
    fn poll_home_fix(&mut self) {
        if let Some(rx) = &self.home_fix {
            match rx.try_recv() {
                Ok(fix) => {
                    self.home = fix;
                    self.home_fix = None;
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::warn!("home position lookup unavailable, using default coordinates");
                    self.home_fix = None;
                }
            }
        }
    }
}
