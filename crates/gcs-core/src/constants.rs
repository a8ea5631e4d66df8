//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Telemetry advances once per wall-clock second.
pub const TICK_RATE: u32 = 1;

// --- Defaults ---

/// Fallback home latitude when no device fix is available.
pub const DEFAULT_HOME_LAT: f64 = 34.0522;

/// Fallback home longitude when no device fix is available.
pub const DEFAULT_HOME_LON: f64 = -118.2437;

/// Heading the airframe reports before any mission (degrees).
pub const DEFAULT_HEADING: f64 = 345.0;

/// Nominal link signal strength (dBm).
pub const DEFAULT_SIGNAL_STRENGTH: i32 = -55;

/// Nominal satellite count.
pub const DEFAULT_SATELLITES: u32 = 14;

/// Battery level the station boots with (percent).
pub const DEFAULT_BATTERY_PCT: f64 = 98.7;

// --- Battery ---

/// Slow global bleed applied every display-clock second (percent).
pub const BATTERY_DISPLAY_BLEED: f64 = 0.0005;

/// Drain per second while armed but idle (percent).
pub const BATTERY_IDLE_DRAIN: f64 = 0.005;

/// Drain per second during an active mission (percent).
pub const BATTERY_MISSION_DRAIN: f64 = 0.05;

/// Upper bound of the positive per-tick battery jitter (percent).
pub const BATTERY_JITTER_MAX: f64 = 0.01;

/// Pack voltage at 0% charge; also the reported floor.
pub const VOLTAGE_FLOOR: f64 = 12.0;

/// Voltage span between empty and full charge.
pub const VOLTAGE_SPAN: f64 = 4.8;

// --- Flight dynamics ---

/// Radius of the simulated orbit around home (degrees).
pub const ORBIT_RADIUS_DEG: f64 = 0.0005;

/// Angular rate of the orbit (radians per elapsed second).
pub const ORBIT_RATE: f64 = 1.0 / 20.0;

/// Baseline mission altitude (meters).
pub const ALTITUDE_BASE_M: f64 = 50.0;

/// Altitude oscillation amplitude (meters).
pub const ALTITUDE_SWING_M: f64 = 5.0;

/// Altitude oscillation rate (radians per elapsed second).
pub const ALTITUDE_RATE: f64 = 1.0 / 10.0;

/// Altitude jitter span, centered on zero (meters).
pub const ALTITUDE_JITTER_SPAN: f64 = 2.0;

/// Baseline horizontal speed (m/s).
pub const SPEED_BASE_MPS: f64 = 10.0;

/// Speed oscillation amplitude (m/s).
pub const SPEED_SWING_MPS: f64 = 2.0;

/// Speed oscillation rate (radians per elapsed second).
pub const SPEED_RATE: f64 = 1.0 / 5.0;

/// Speed jitter span, centered on zero (m/s).
pub const SPEED_JITTER_SPAN: f64 = 1.5;

/// Roll oscillation amplitude (degrees).
pub const ROLL_SWING_DEG: f64 = 5.0;

/// Roll oscillation rate (radians per elapsed second).
pub const ROLL_RATE: f64 = 1.0 / 2.0;

/// Pitch oscillation amplitude (degrees).
pub const PITCH_SWING_DEG: f64 = 3.0;

/// Pitch oscillation rate (radians per elapsed second).
pub const PITCH_RATE: f64 = 1.0 / 3.0;

/// Roll/pitch jitter span, centered on zero (degrees).
pub const ATTITUDE_JITTER_SPAN: f64 = 1.0;

/// Heading advance per active second (degrees).
pub const HEADING_STEP_DEG: f64 = 0.5;

/// Heading jitter span, centered on zero (degrees).
pub const HEADING_JITTER_SPAN: f64 = 1.0;

// --- Breeding site detection ---

/// Length of one detection cycle (seconds).
pub const DETECTION_CYCLE_SECS: u64 = 25;

/// Window opens after this many seconds into the cycle (exclusive).
pub const DETECTION_WINDOW_OPEN: u64 = 10;

/// Window closes at this many seconds into the cycle (exclusive).
pub const DETECTION_WINDOW_CLOSE: u64 = 14;

/// Objects reported for enclosed breeding sites.
pub const ENCLOSED_SITE_OBJECTS: [&str; 3] =
    ["Flower Pots", "Discarded Containers", "Clogged Gutters"];

/// Objects reported for open breeding sites.
pub const OPEN_SITE_OBJECTS: [&str; 3] =
    ["Stagnant Ponds", "Construction Puddles", "Old Tires"];

// --- Planning area ---

pub const MAP_MIN_LAT: f64 = 34.0500;
pub const MAP_MAX_LAT: f64 = 34.0550;
pub const MAP_MIN_LON: f64 = -118.2450;
pub const MAP_MAX_LON: f64 = -118.2400;

// --- Mission plan limits ---

/// Lowest plannable altitude (meters).
pub const MIN_PLAN_ALTITUDE_M: u32 = 10;

/// Highest plannable altitude (meters).
pub const MAX_PLAN_ALTITUDE_M: u32 = 120;

/// Lowest plannable speed (m/s).
pub const MIN_PLAN_SPEED_MPS: u32 = 1;

/// Highest plannable speed (m/s).
pub const MAX_PLAN_SPEED_MPS: u32 = 25;

pub const DEFAULT_PLAN_ALTITUDE_M: u32 = 50;
pub const DEFAULT_PLAN_SPEED_MPS: u32 = 10;

/// A plan cannot launch with fewer waypoints than this.
pub const MIN_LAUNCH_WAYPOINTS: usize = 2;

// --- Storage / records ---

/// File the saved-plan array is read from and written to wholesale.
pub const PLANS_FILE_NAME: &str = "gcs-mission-plans.json";

/// Location string stamped on completed-mission records.
pub const MISSION_LOCATION: &str = "Live Location";
