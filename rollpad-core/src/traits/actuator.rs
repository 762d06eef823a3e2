//! Motion actuator capability

/// Roll commands toward the toy
///
/// Both calls are fire-and-forget from the control loop's perspective and
/// must be safe to repeat every tick while an intent is held. There is no
/// per-call timeout; a hung actuator stalls the loop by design.
pub trait MotionActuator {
    type Error;

    /// Start (or refresh) a roll along `heading` at `speed`
    ///
    /// `heading` is in degrees, `0..360`. Rotation intents pass speed 0.
    async fn start_roll(&mut self, heading: u16, speed: u8) -> Result<(), Self::Error>;

    /// Stop rolling while keeping `heading`
    ///
    /// `reverse` selects the toy's reverse-stop behavior; the control loop
    /// always passes `false`.
    async fn stop_roll(&mut self, heading: u16, reverse: bool) -> Result<(), Self::Error>;
}
