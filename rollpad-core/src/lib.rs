//! Board-agnostic core logic for the Rollpad remote
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (button source, motion actuator)
//! - Exclusive motion state machine
//! - Per-tick session control
//! - Idle watchdog
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]
#![allow(async_fn_in_trait)]

pub mod config;
pub mod safety;
pub mod session;
pub mod state;
pub mod traits;
