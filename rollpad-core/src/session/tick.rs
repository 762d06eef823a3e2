//! Per-tick session control
//!
//! One tick evaluates, in fixed order: speed selection, translational
//! arbitration (forward, backward), rotational arbitration (cw, ccw), the
//! idle release, and the watchdog. The order is the tie-break policy:
//! translational presses win arbitration within a tick; once the held
//! intent is released, arbitration restarts from scratch next tick.
//!
//! The caller owns the cadence sleep and the dispatch of the produced
//! command to the actuator.

use crate::config::RemoteConfig;
use crate::safety::{IdleWatchdog, WatchdogStatus};
use crate::state::{MotionArbiter, MotionIntent};
use crate::traits::ButtonState;

use super::SessionClock;

/// Actuator command produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionCommand {
    /// Start or refresh a roll
    Roll { heading: u16, speed: u8 },
    /// Stop rolling, keeping the heading
    Stop { heading: u16, reverse: bool },
}

/// Why the session must end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminateReason {
    /// No state-changing activity within the idle timeout
    IdleTimeout,
}

/// Whether the loop continues
///
/// Expected session-ending conditions are data, not unwinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickStatus {
    Continue,
    Terminate(TerminateReason),
}

/// Everything one tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    pub status: TickStatus,
    /// At most one actuator command per tick
    pub command: Option<MotionCommand>,
    /// Intent released by the idle branch, if any
    pub released: Option<MotionIntent>,
}

/// Session state driven by the control loop
///
/// Exclusively owned by the loop's execution context; nothing here locks.
pub struct Session {
    config: RemoteConfig,
    arbiter: MotionArbiter,
    clock: SessionClock,
    watchdog: IdleWatchdog,
}

impl Session {
    /// Create a session in the `Stopped` state, watchdog counting from `now_ms`
    pub fn new(config: RemoteConfig, now_ms: u64) -> Self {
        Self {
            arbiter: MotionArbiter::new(),
            clock: SessionClock::new(),
            watchdog: IdleWatchdog::new(config.idle_timeout_ms, now_ms),
            config,
        }
    }

    /// Currently held motion intent
    pub fn intent(&self) -> MotionIntent {
        self.arbiter.current()
    }

    /// Current commanded heading
    pub fn heading(&self) -> u16 {
        self.clock.heading()
    }

    /// Speed selected on the last tick
    pub fn speed(&self) -> u8 {
        self.clock.speed()
    }

    /// Evaluate one control-loop tick
    ///
    /// Only genuine intent transitions (acquisition out of `Stopped`, or a
    /// release back to it) refresh the watchdog; refreshing a held intent
    /// or a press denied by arbitration does not.
    pub fn tick(&mut self, buttons: ButtonState, now_ms: u64) -> TickOutcome {
        self.clock.select_speed(buttons.dash, &self.config);

        let mut command = None;
        let mut released = None;

        if buttons.forward {
            let grant = self.arbiter.acquire(MotionIntent::Forward);
            if grant.acquired {
                if grant.changed {
                    self.watchdog.record_activity(now_ms);
                }
                command = Some(MotionCommand::Roll {
                    heading: self.clock.heading(),
                    speed: self.clock.speed(),
                });
            }
        }

        if buttons.backward {
            let grant = self.arbiter.acquire(MotionIntent::Backward);
            if grant.acquired {
                if grant.changed {
                    self.watchdog.record_activity(now_ms);
                }
                command = Some(MotionCommand::Roll {
                    heading: self.clock.reverse_heading(),
                    speed: self.clock.speed(),
                });
            }
        }

        if buttons.rotate_cw {
            let grant = self.arbiter.acquire(MotionIntent::RotateCw);
            if grant.acquired {
                if grant.changed {
                    self.watchdog.record_activity(now_ms);
                }
                // Heading advances every tick while held, not only on the
                // transition tick. Rotation carries no translation.
                self.clock.advance_cw(self.config.angular_step_deg);
                command = Some(MotionCommand::Roll {
                    heading: self.clock.heading(),
                    speed: 0,
                });
            }
        }

        if buttons.rotate_ccw {
            let grant = self.arbiter.acquire(MotionIntent::RotateCcw);
            if grant.acquired {
                if grant.changed {
                    self.watchdog.record_activity(now_ms);
                }
                self.clock.advance_ccw(self.config.angular_step_deg);
                command = Some(MotionCommand::Roll {
                    heading: self.clock.heading(),
                    speed: 0,
                });
            }
        }

        if !buttons.any_direction() && !self.arbiter.current().is_stopped() {
            command = Some(MotionCommand::Stop {
                heading: self.clock.heading(),
                reverse: false,
            });
            released = Some(self.arbiter.release());
            self.watchdog.record_activity(now_ms);
        }

        let status = match self.watchdog.check(now_ms) {
            WatchdogStatus::Expired => TickStatus::Terminate(TerminateReason::IdleTimeout),
            WatchdogStatus::Ok => TickStatus::Continue,
        };

        TickOutcome {
            status,
            command,
            released,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: ButtonState = ButtonState {
        forward: true,
        backward: false,
        rotate_cw: false,
        rotate_ccw: false,
        dash: false,
    };

    const IDLE: ButtonState = ButtonState {
        forward: false,
        backward: false,
        rotate_cw: false,
        rotate_ccw: false,
        dash: false,
    };

    fn session() -> Session {
        Session::new(RemoteConfig::default(), 0)
    }

    #[test]
    fn forward_press_hold_release_scenario() {
        let mut session = session();

        // First tick: transition + roll at base speed along heading 0
        let outcome = session.tick(FORWARD, 0);
        assert_eq!(session.intent(), MotionIntent::Forward);
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 0,
                speed: 80
            })
        );
        assert_eq!(outcome.status, TickStatus::Continue);

        // Held: refresh, same command again
        let outcome = session.tick(FORWARD, 4);
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 0,
                speed: 80
            })
        );

        // Released: one stop, intent back to Stopped
        let outcome = session.tick(IDLE, 8);
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Stop {
                heading: 0,
                reverse: false
            })
        );
        assert_eq!(outcome.released, Some(MotionIntent::Forward));
        assert_eq!(session.intent(), MotionIntent::Stopped);

        // Second idle tick is a true no-op
        let outcome = session.tick(IDLE, 12);
        assert_eq!(outcome.command, None);
        assert_eq!(outcome.released, None);
    }

    #[test]
    fn backward_uses_reversed_heading() {
        let mut session = session();
        let buttons = ButtonState {
            backward: true,
            ..IDLE
        };

        let outcome = session.tick(buttons, 0);
        assert_eq!(session.intent(), MotionIntent::Backward);
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 180,
                speed: 80
            })
        );
        // Heading itself is untouched by translation
        assert_eq!(session.heading(), 0);
    }

    #[test]
    fn rotation_advances_heading_every_tick() {
        let mut session = session();
        let buttons = ButtonState {
            rotate_cw: true,
            ..IDLE
        };

        for i in 1..=40u64 {
            let outcome = session.tick(buttons, i * 4);
            let expected = ((i * 9) % 360) as u16;
            assert_eq!(session.heading(), expected);
            assert_eq!(
                outcome.command,
                Some(MotionCommand::Roll {
                    heading: expected,
                    speed: 0
                })
            );
        }
        // 40 * 9 degrees = full circle
        assert_eq!(session.heading(), 0);
    }

    #[test]
    fn counter_rotation_wraps_below_zero() {
        let mut session = session();
        let buttons = ButtonState {
            rotate_ccw: true,
            ..IDLE
        };

        let outcome = session.tick(buttons, 0);
        assert_eq!(session.heading(), 351);
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 351,
                speed: 0
            })
        );
    }

    #[test]
    fn dash_selects_max_speed_independent_of_intent() {
        let mut session = session();

        // Dash with no direction still recomputes speed
        session.tick(ButtonState { dash: true, ..IDLE }, 0);
        assert_eq!(session.speed(), 255);
        session.tick(IDLE, 4);
        assert_eq!(session.speed(), 80);

        // Dash while rolling boosts the issued command
        let outcome = session.tick(
            ButtonState {
                forward: true,
                dash: true,
                ..IDLE
            },
            8,
        );
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 0,
                speed: 255
            })
        );
    }

    #[test]
    fn translational_press_blocks_rotation_in_same_tick() {
        let mut session = session();
        let both = ButtonState {
            forward: true,
            rotate_cw: true,
            ..IDLE
        };

        let outcome = session.tick(both, 0);
        assert_eq!(session.intent(), MotionIntent::Forward);
        // Forward wins; rotation is denied and the heading never moves
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 0,
                speed: 80
            })
        );
        assert_eq!(session.heading(), 0);
    }

    #[test]
    fn held_intent_blocks_other_buttons_until_release() {
        let mut session = session();
        session.tick(
            ButtonState {
                rotate_cw: true,
                ..IDLE
            },
            0,
        );
        assert_eq!(session.intent(), MotionIntent::RotateCw);

        // Forward press while rotation is held: denied, rotation continues
        let both = ButtonState {
            forward: true,
            rotate_cw: true,
            ..IDLE
        };
        let outcome = session.tick(both, 4);
        assert_eq!(session.intent(), MotionIntent::RotateCw);
        assert_eq!(
            outcome.command,
            Some(MotionCommand::Roll {
                heading: 18,
                speed: 0
            })
        );

        // After release, forward can take over next tick
        session.tick(IDLE, 8);
        session.tick(FORWARD, 12);
        assert_eq!(session.intent(), MotionIntent::Forward);
    }

    #[test]
    fn watchdog_terminates_after_idle_timeout() {
        let config = RemoteConfig {
            idle_timeout_ms: 60,
            ..RemoteConfig::default()
        };
        let mut session = Session::new(config, 0);

        assert_eq!(session.tick(IDLE, 60).status, TickStatus::Continue);
        assert_eq!(
            session.tick(IDLE, 61).status,
            TickStatus::Terminate(TerminateReason::IdleTimeout)
        );
    }

    #[test]
    fn transitions_refresh_the_watchdog() {
        let config = RemoteConfig {
            idle_timeout_ms: 60,
            ..RemoteConfig::default()
        };
        let mut session = Session::new(config, 0);

        // Acquisition at t=50 restarts the window
        session.tick(FORWARD, 50);
        assert_eq!(session.tick(FORWARD, 100).status, TickStatus::Continue);

        // Release at t=105 restarts it again
        session.tick(IDLE, 105);
        assert_eq!(session.tick(IDLE, 160).status, TickStatus::Continue);
        assert_eq!(
            session.tick(IDLE, 166).status,
            TickStatus::Terminate(TerminateReason::IdleTimeout)
        );
    }

    #[test]
    fn watchdog_ignores_denied_and_held_presses() {
        let config = RemoteConfig {
            idle_timeout_ms: 60,
            ..RemoteConfig::default()
        };
        let mut session = Session::new(config, 0);

        // Transition at t=0, then hold forward and mash rotate: neither the
        // refresh nor the denied press counts as activity.
        session.tick(FORWARD, 0);
        let held = ButtonState {
            forward: true,
            rotate_cw: true,
            ..IDLE
        };
        for t in (4..=60).step_by(4) {
            assert_eq!(session.tick(held, t).status, TickStatus::Continue);
        }
        assert_eq!(
            session.tick(held, 61).status,
            TickStatus::Terminate(TerminateReason::IdleTimeout)
        );
    }
}
