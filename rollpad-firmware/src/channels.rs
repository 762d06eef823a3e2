//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication between the
//! control task and the status display task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use rollpad_core::state::LifecycleEvent;

/// Channel capacity for lifecycle events
const LIFECYCLE_CHANNEL_SIZE: usize = 4;

/// Session lifecycle events toward the display task (single consumer)
pub static LIFECYCLE_CHANNEL: Channel<
    CriticalSectionRawMutex,
    LifecycleEvent,
    LIFECYCLE_CHANNEL_SIZE,
> = Channel::new();

/// Publish a lifecycle event without blocking the control loop
///
/// The display lags behind rather than stalling a tick if the channel is
/// momentarily full.
pub fn publish(event: LifecycleEvent) {
    let _ = LIFECYCLE_CHANNEL.try_send(event);
}
