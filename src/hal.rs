use crate::model::{AxisSample, LedFrame, ScreenContext, ScreenKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputPin {
    TouchSensor,
    JoystickButton,
}

/// Board-side collaborators the game core drives. Calls are synchronous and
/// assumed to succeed.
pub trait Peripherals {
    /// One-time display bring-up.
    fn prepare_display(&mut self);

    /// Starts drawing a screen. `param` uses the packed wire layout of `kind`.
    fn render_screen(&mut self, kind: ScreenKind, param: u16, context: &ScreenContext);

    fn set_led_colors(&mut self, frame: &LedFrame);

    fn read_joystick_axes(&mut self) -> AxisSample;

    /// Raw pin level, `true` when high.
    fn read_digital(&mut self, pin: InputPin) -> bool;

    /// Polled by the scheduler. Implementations may advance a multi-pass
    /// transfer here.
    fn display_is_busy(&mut self) -> bool;
}
