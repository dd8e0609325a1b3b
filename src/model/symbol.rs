/// One cue of the sequence: a joystick direction, or the display-only blank.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Symbol {
    Left = 0,
    SuperLeft = 1,
    Right = 2,
    SuperRight = 3,
    Up = 4,
    SuperUp = 5,
    Down = 6,
    SuperDown = 7,
    #[default]
    Blank = 8,
}

impl Symbol {
    pub const DIRECTIONS: [Self; 8] = [
        Self::Left,
        Self::SuperLeft,
        Self::Right,
        Self::SuperRight,
        Self::Up,
        Self::SuperUp,
        Self::Down,
        Self::SuperDown,
    ];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Left),
            1 => Some(Self::SuperLeft),
            2 => Some(Self::Right),
            3 => Some(Self::SuperRight),
            4 => Some(Self::Up),
            5 => Some(Self::SuperUp),
            6 => Some(Self::Down),
            7 => Some(Self::SuperDown),
            8 => Some(Self::Blank),
            _ => None,
        }
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn is_super(self) -> bool {
        matches!(
            self,
            Self::SuperLeft | Self::SuperRight | Self::SuperUp | Self::SuperDown
        )
    }

    /// The symbol reached by reversing the sign of the deflection.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::SuperLeft => Self::SuperRight,
            Self::Right => Self::Left,
            Self::SuperRight => Self::SuperLeft,
            Self::Up => Self::Down,
            Self::SuperUp => Self::SuperDown,
            Self::Down => Self::Up,
            Self::SuperDown => Self::SuperUp,
            Self::Blank => Self::Blank,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::SuperLeft => "SUPER LEFT",
            Self::Right => "RIGHT",
            Self::SuperRight => "SUPER RIGHT",
            Self::Up => "UP",
            Self::SuperUp => "SUPER UP",
            Self::Down => "DOWN",
            Self::SuperDown => "SUPER DOWN",
            Self::Blank => "",
        }
    }
}
