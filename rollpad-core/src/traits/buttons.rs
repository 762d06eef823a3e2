//! Button source capability

/// Physical buttons on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Forward,
    Backward,
    RotateCw,
    RotateCcw,
    Dash,
}

/// One tick's worth of sampled button state, pressed = `true`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    pub forward: bool,
    pub backward: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub dash: bool,
}

impl ButtonState {
    /// True if any directional button is held (dash alone is not direction)
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.rotate_cw || self.rotate_ccw
    }
}

/// Per-button boolean input
///
/// Implementations already invert active-low wiring so that pressed reads
/// as `true`, and must surface read failures as errors, never as a silent
/// `false`. Callable every tick with bounded latency.
pub trait ButtonSource {
    type Error;

    /// Raw pressed state of a single button
    fn is_pressed(&mut self, button: Button) -> Result<bool, Self::Error>;

    /// Sample all five buttons for one tick
    fn sample(&mut self) -> Result<ButtonState, Self::Error> {
        Ok(ButtonState {
            forward: self.is_pressed(Button::Forward)?,
            backward: self.is_pressed(Button::Backward)?,
            rotate_cw: self.is_pressed(Button::RotateCw)?,
            rotate_ccw: self.is_pressed(Button::RotateCcw)?,
            dash: self.is_pressed(Button::Dash)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedButtons(ButtonState);

    impl ButtonSource for FixedButtons {
        type Error = core::convert::Infallible;

        fn is_pressed(&mut self, button: Button) -> Result<bool, Self::Error> {
            Ok(match button {
                Button::Forward => self.0.forward,
                Button::Backward => self.0.backward,
                Button::RotateCw => self.0.rotate_cw,
                Button::RotateCcw => self.0.rotate_ccw,
                Button::Dash => self.0.dash,
            })
        }
    }

    #[test]
    fn sample_reads_all_buttons() {
        let state = ButtonState {
            forward: true,
            dash: true,
            ..Default::default()
        };
        let mut source = FixedButtons(state);
        assert_eq!(source.sample().unwrap(), state);
    }

    #[test]
    fn dash_alone_is_not_direction() {
        let state = ButtonState {
            dash: true,
            ..Default::default()
        };
        assert!(!state.any_direction());

        let state = ButtonState {
            rotate_ccw: true,
            ..Default::default()
        };
        assert!(state.any_direction());
    }
}
