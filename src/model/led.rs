#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LedCommand {
    Off,
    Red,
    Green,
    Random,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LedColor {
    pub brightness: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LedColor {
    pub const OFF: Self = Self::new(0, 0, 0, 0);
    pub const RED: Self = Self::new(0xFF, 0xFF, 0, 0);
    pub const GREEN: Self = Self::new(0xFF, 0, 0xFF, 0);

    pub const fn new(brightness: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            brightness,
            red,
            green,
            blue,
        }
    }
}

/// Colors for the two physical LEDs, LED1 first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LedFrame {
    pub leds: [LedColor; 2],
}

impl LedFrame {
    pub const fn dark() -> Self {
        Self {
            leds: [LedColor::OFF; 2],
        }
    }

    pub const fn new(first: LedColor, second: LedColor) -> Self {
        Self {
            leds: [first, second],
        }
    }
}
