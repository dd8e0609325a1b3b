/// The five cooperating services. Declaration order is dispatch priority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ServiceId {
    Watchdog = 0,
    GameFlow = 1,
    Sequence = 2,
    Display = 3,
    Led = 4,
}

impl ServiceId {
    pub const COUNT: usize = 5;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Watchdog,
        Self::GameFlow,
        Self::Sequence,
        Self::Display,
        Self::Led,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Watchdog => "watchdog",
            Self::GameFlow => "game_flow",
            Self::Sequence => "sequence",
            Self::Display => "display",
            Self::Led => "led",
        }
    }
}

/// Logical deadlines. A timeout carries one of these so the handler can tell
/// which deadline fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum TimerId {
    Ready = 0,
    Direction = 1,
    LastDirection = 2,
    Go = 3,
    Input = 4,
    Instruction = 5,
    Demo = 6,
    DemoScreen = 7,
    GameOver = 8,
    Idle = 9,
    LedPattern = 10,
}

impl TimerId {
    pub const COUNT: usize = 11;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Ready,
        Self::Direction,
        Self::LastDirection,
        Self::Go,
        Self::Input,
        Self::Instruction,
        Self::Demo,
        Self::DemoScreen,
        Self::GameOver,
        Self::Idle,
        Self::LedPattern,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Service that receives this timer's expiry.
    pub const fn recipient(self) -> ServiceId {
        match self {
            Self::LastDirection | Self::Demo | Self::GameOver => ServiceId::GameFlow,
            Self::Idle => ServiceId::Watchdog,
            Self::LedPattern => ServiceId::Led,
            Self::Ready
            | Self::Direction
            | Self::Go
            | Self::Input
            | Self::Instruction
            | Self::DemoScreen => ServiceId::Sequence,
        }
    }
}
