//! Status display task
//!
//! Renders lifecycle events received from the control task. The display
//! never sees individual ticks.

use embassy_rp::i2c::{Blocking, I2c};

use rollpad_core::state::LifecycleEvent;

use crate::channels::LIFECYCLE_CHANNEL;
use crate::display;

/// Display task - consumes lifecycle events
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, Blocking>) {
    let mut oled = display::init(i2c);
    display::draw_scanning(&mut oled);

    loop {
        match LIFECYCLE_CHANNEL.receive().await {
            LifecycleEvent::Scanning => display::draw_scanning(&mut oled),
            LifecycleEvent::Connected { name, .. } => {
                display::draw_connected(&mut oled, name.as_str())
            }
            LifecycleEvent::NotFound => display::draw_not_found(&mut oled),
            // The connected screen stays up while the loop runs
            LifecycleEvent::Running => {}
            LifecycleEvent::Terminated => display::draw_terminated(&mut oled),
        }
    }
}
