//! Session lifecycle events
//!
//! The core emits these at session boundaries; rendering them is the
//! status display's concern.

use heapless::String;

/// Maximum toy name length
pub const MAX_NAME_LEN: usize = 24;

/// Coarse session lifecycle, in the order a session normally goes through
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleEvent {
    /// Toy discovery in progress
    Scanning,
    /// Toy found and connected
    Connected {
        name: String<MAX_NAME_LEN>,
        address: [u8; 6],
    },
    /// Discovery finished without finding a toy
    NotFound,
    /// Control loop running
    Running,
    /// Session ended (watchdog expiry or a fatal tick error)
    Terminated,
}
