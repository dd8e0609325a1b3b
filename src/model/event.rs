use super::{LedCommand, Screen, TimerId};

/// Raw joystick reading, one ADC sample per axis.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

impl AxisSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            x: ((self.x as u32 + other.x as u32) / 2) as u16,
            y: ((self.y as u32 + other.y as u32) / 2) as u16,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputVerdict {
    Correct,
    CorrectFinal,
    Incorrect,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    Init,
    Calibrate(AxisSample),
    Timeout(TimerId),
    PlayerPress,
    InputDetected,
    JoystickInput(AxisSample),
    Verdict(InputVerdict),
    FirstRound,
    NextRound,
    RoundComplete,
    GameOver { score: u16 },
    MasterReset,
    Render(Screen),
    RenderComplete,
    Led(LedCommand),
}
