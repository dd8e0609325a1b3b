use super::Symbol;

const SCORE_SHIFT: u16 = 8;
const TIME_SHIFT: u16 = 4;
const NIBBLE_MASK: u16 = 0x0F;
const SCORE_MAX: u16 = 0xFF;

/// In-round status line: score, seconds left and the last input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlayUpdate {
    pub score: u16,
    pub time: u8,
    pub symbol: Symbol,
}

impl PlayUpdate {
    /// Packs as `score:8 | time:4 | direction:4`, most significant first.
    /// Scores above 255 saturate; time keeps its low nibble.
    pub const fn pack(self) -> u16 {
        let score = if self.score > SCORE_MAX {
            SCORE_MAX
        } else {
            self.score
        };
        (score << SCORE_SHIFT)
            | (((self.time as u16) & NIBBLE_MASK) << TIME_SHIFT)
            | ((self.symbol.as_u8() as u16) & NIBBLE_MASK)
    }

    pub const fn unpack(raw: u16) -> Self {
        let symbol = match Symbol::from_u8((raw & NIBBLE_MASK) as u8) {
            Some(symbol) => symbol,
            None => Symbol::Blank,
        };
        Self {
            score: raw >> SCORE_SHIFT,
            time: ((raw >> TIME_SHIFT) & NIBBLE_MASK) as u8,
            symbol,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ScreenKind {
    Welcome = 0,
    Ready = 1,
    Instruction = 2,
    Go = 3,
    PlayUpdate = 4,
    RoundComplete = 5,
    GameComplete = 6,
    Demo = 7,
}

impl ScreenKind {
    pub const COUNT: usize = 8;
}

/// A render request as it travels between services.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Welcome,
    Ready { round: u16 },
    Instruction { symbol: Symbol },
    Go,
    PlayUpdate(PlayUpdate),
    RoundComplete,
    GameComplete { score: u16, high_scores: [u16; 3] },
    Demo,
}

impl Screen {
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::Welcome => ScreenKind::Welcome,
            Self::Ready { .. } => ScreenKind::Ready,
            Self::Instruction { .. } => ScreenKind::Instruction,
            Self::Go => ScreenKind::Go,
            Self::PlayUpdate(_) => ScreenKind::PlayUpdate,
            Self::RoundComplete => ScreenKind::RoundComplete,
            Self::GameComplete { .. } => ScreenKind::GameComplete,
            Self::Demo => ScreenKind::Demo,
        }
    }

    /// Kind and packed parameter handed to the display peripheral.
    pub const fn to_wire(&self) -> (ScreenKind, u16) {
        let param = match self {
            Self::Ready { round } => *round,
            Self::Instruction { symbol } => symbol.as_u8() as u16,
            Self::PlayUpdate(update) => update.pack(),
            Self::GameComplete { score, .. } => *score,
            Self::Welcome | Self::Go | Self::RoundComplete | Self::Demo => 0,
        };
        (self.kind(), param)
    }
}

/// What the display remembers between requests: the round, the running
/// score and the last published high-score table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScreenContext {
    pub round: u16,
    pub score: u16,
    pub high_scores: [u16; 3],
}

impl ScreenContext {
    pub fn absorb(&mut self, screen: &Screen) {
        match *screen {
            Screen::Welcome => self.score = 0,
            Screen::Ready { round } => self.round = round,
            Screen::PlayUpdate(update) => self.score = update.score,
            Screen::GameComplete { score, high_scores } => {
                self.score = score;
                self.high_scores = high_scores;
            }
            Screen::Instruction { .. } | Screen::Go | Screen::RoundComplete | Screen::Demo => {}
        }
    }
}
