//! Liveness monitoring
//!
//! Ends a session after a period with no state-changing activity.

pub mod watchdog;

pub use watchdog::{IdleWatchdog, WatchdogStatus};
