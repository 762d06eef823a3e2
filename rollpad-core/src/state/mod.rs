//! Exclusive motion state
//!
//! At most one motion intent may drive the toy at any instant. The
//! arbiter is explicit, finite, and deterministic.

pub mod events;
pub mod intent;

pub use events::LifecycleEvent;
pub use intent::{Grant, MotionArbiter, MotionIntent};
