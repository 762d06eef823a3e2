//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default translational speed without dash
pub const BASE_SPEED: u8 = 80;

/// Default translational speed while dash is held
pub const MAX_SPEED: u8 = 255;

/// Default heading delta per tick while a rotation intent is held (degrees)
pub const ANGULAR_STEP_DEG: u16 = 9;

/// Default inactivity threshold before the session terminates (ms)
pub const IDLE_TIMEOUT_MS: u64 = 60_000;

/// Default control-loop cadence (ms)
///
/// Bounds the actuator call rate and is the de facto debounce granularity.
pub const TICK_INTERVAL_MS: u64 = 4;

/// Session parameters
///
/// Treated as immutable inputs by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RemoteConfig {
    /// Translational speed without dash
    pub base_speed: u8,
    /// Translational speed while dash is held
    pub max_speed: u8,
    /// Heading delta per tick while rotating (degrees)
    pub angular_step_deg: u16,
    /// Watchdog threshold (ms)
    pub idle_timeout_ms: u64,
    /// Control-loop cadence (ms)
    pub tick_interval_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            angular_step_deg: ANGULAR_STEP_DEG,
            idle_timeout_ms: IDLE_TIMEOUT_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}
