//! Heading and speed tracking

use crate::config::RemoteConfig;

/// Per-session heading and speed, mutated every tick
///
/// Heading is in degrees and always in `0..360`; it wraps modulo 360 and
/// is mutated only by rotation intents. Speed is recomputed from the dash
/// signal every tick regardless of motion intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionClock {
    heading: u16,
    speed: u8,
}

impl SessionClock {
    /// Heading 0, speed 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Current commanded heading in degrees
    pub fn heading(&self) -> u16 {
        self.heading
    }

    /// Speed selected for this tick
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Recompute speed from the dash signal
    pub fn select_speed(&mut self, dash: bool, config: &RemoteConfig) {
        self.speed = if dash {
            config.max_speed
        } else {
            config.base_speed
        };
    }

    /// Heading rotated 180 degrees, used by the backward branch
    pub fn reverse_heading(&self) -> u16 {
        (self.heading + 180) % 360
    }

    /// Advance clockwise by `step` degrees
    pub fn advance_cw(&mut self, step: u16) {
        self.heading = (self.heading + step) % 360;
    }

    /// Advance counter-clockwise by `step` degrees
    pub fn advance_ccw(&mut self, step: u16) {
        self.heading = (self.heading + 360 - step % 360) % 360;
    }
}
