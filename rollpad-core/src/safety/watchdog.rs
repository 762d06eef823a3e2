//! Idle watchdog implementation

/// Watchdog verdict for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogStatus {
    /// Activity seen recently enough
    Ok,
    /// Inactivity threshold exceeded; the session must end
    Expired,
}

/// Tracks time since the last state-affecting activity
///
/// Stateless beyond the threshold and the last activity timestamp. Expiry
/// does not retry or recover; the caller ends the session.
#[derive(Debug, Clone)]
pub struct IdleWatchdog {
    timeout_ms: u64,
    last_activity_ms: u64,
}

impl IdleWatchdog {
    /// Create a watchdog, counting from `now_ms`
    pub fn new(timeout_ms: u64, now_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_activity_ms: now_ms,
        }
    }

    /// Reset the inactivity window
    pub fn record_activity(&mut self, now_ms: u64) {
        self.last_activity_ms = now_ms;
    }

    /// Time since the last recorded activity
    pub fn idle_for_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_activity_ms)
    }

    /// Expired strictly after `timeout_ms` of silence
    pub fn check(&self, now_ms: u64) -> WatchdogStatus {
        if self.idle_for_ms(now_ms) > self.timeout_ms {
            WatchdogStatus::Expired
        } else {
            WatchdogStatus::Ok
        }
    }
}
