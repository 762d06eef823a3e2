//! Configuration types
//!
//! Immutable numeric parameters, loaded once before the control loop starts.

pub mod types;

pub use types::*;
