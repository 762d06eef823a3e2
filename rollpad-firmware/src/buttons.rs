//! GPIO button source
//!
//! The five pad buttons are wired between their GPIO and ground with the
//! internal pull-up enabled, so a pressed button reads low. The inversion
//! to pressed = `true` happens here; the control loop's tick cadence is
//! the only debounce applied.

use core::convert::Infallible;

use embassy_rp::gpio::Input;

use rollpad_core::traits::{Button, ButtonSource};

/// Button source over five pulled-up GPIO inputs
pub struct GpioButtons {
    forward: Input<'static>,
    backward: Input<'static>,
    rotate_cw: Input<'static>,
    rotate_ccw: Input<'static>,
    dash: Input<'static>,
}

impl GpioButtons {
    pub fn new(
        forward: Input<'static>,
        backward: Input<'static>,
        rotate_cw: Input<'static>,
        rotate_ccw: Input<'static>,
        dash: Input<'static>,
    ) -> Self {
        Self {
            forward,
            backward,
            rotate_cw,
            rotate_ccw,
            dash,
        }
    }
}

impl ButtonSource for GpioButtons {
    type Error = Infallible;

    fn is_pressed(&mut self, button: Button) -> Result<bool, Self::Error> {
        let input = match button {
            Button::Forward => &self.forward,
            Button::Backward => &self.backward,
            Button::RotateCw => &self.rotate_cw,
            Button::RotateCcw => &self.rotate_ccw,
            Button::Dash => &self.dash,
        };
        // Active-low: pressed pulls the pin to ground
        Ok(input.is_low())
    }
}
