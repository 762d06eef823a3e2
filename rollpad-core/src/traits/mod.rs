//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and
//! hardware-specific implementations.

pub mod actuator;
pub mod buttons;

pub use actuator::MotionActuator;
pub use buttons::{Button, ButtonSource, ButtonState};
