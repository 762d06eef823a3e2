//! Motion intent arbitration
//!
//! The arbiter guarantees that at most one motion vector is commanded to
//! the toy at a time: a held intent must be released back to [`MotionIntent::Stopped`]
//! before a different one can take over, while re-affirming the held intent
//! every tick is allowed and is not a transition.

/// Motion intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionIntent {
    /// Neutral state; the only intent from which any other may be acquired
    #[default]
    Stopped,
    /// Roll along the current heading
    Forward,
    /// Roll along the reversed heading
    Backward,
    /// Rotate in place, clockwise seen from above
    RotateCw,
    /// Rotate in place, counter-clockwise seen from above
    RotateCcw,
}

impl MotionIntent {
    /// Check if this is the neutral intent
    pub fn is_stopped(&self) -> bool {
        matches!(self, MotionIntent::Stopped)
    }
}

/// Outcome of an acquisition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grant {
    /// The requested intent may act this tick
    pub acquired: bool,
    /// This call transitioned out of `Stopped` (a refresh reports `false`)
    pub changed: bool,
}

/// Exclusive-motion state machine
///
/// Single-writer: read and mutated only by the control loop. No internal
/// locking; not safe for concurrent use without external synchronization.
#[derive(Debug, Clone, Default)]
pub struct MotionArbiter {
    current: MotionIntent,
}

impl MotionArbiter {
    /// Create an arbiter in the `Stopped` state
    pub fn new() -> Self {
        Self {
            current: MotionIntent::Stopped,
        }
    }

    /// Currently held intent
    pub fn current(&self) -> MotionIntent {
        self.current
    }

    /// Attempt to make `requested` the active intent
    ///
    /// - already held: `(acquired: true, changed: false)`
    /// - currently `Stopped`: takes over, `(true, true)`
    /// - a different intent is held: denied, `(false, false)` - the caller
    ///   must not act on behalf of `requested`
    pub fn acquire(&mut self, requested: MotionIntent) -> Grant {
        if self.current == requested {
            Grant {
                acquired: true,
                changed: false,
            }
        } else if self.current == MotionIntent::Stopped {
            self.current = requested;
            Grant {
                acquired: true,
                changed: true,
            }
        } else {
            Grant {
                acquired: false,
                changed: false,
            }
        }
    }

    /// Release the active intent back to `Stopped`, returning the previous one
    ///
    /// Releasing while nothing is held is a benign anomaly, not an error.
    pub fn release(&mut self) -> MotionIntent {
        if self.current == MotionIntent::Stopped {
            #[cfg(feature = "defmt")]
            defmt::warn!("release called while nothing is held");
            return MotionIntent::Stopped;
        }
        let prev = self.current;
        self.current = MotionIntent::Stopped;
        prev
    }
}
