//! Per-session control
//!
//! [`Session`] owns the arbiter, heading/speed state and the watchdog, and
//! exposes the fixed-order per-tick evaluation the control loop drives.

pub mod clock;
pub mod tick;

pub use clock::SessionClock;
pub use tick::{MotionCommand, Session, TerminateReason, TickOutcome, TickStatus};
