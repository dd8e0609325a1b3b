//! Two-LED indicator patterns: alternating red, alternating green, random
//! colors, or dark.

mod engine;
mod machine;

pub use engine::LedEngine;

use crate::model::LedCommand;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LedStateId {
    #[default]
    Initializing,
    Off,
    Red,
    Green,
    Random,
}

impl From<LedCommand> for LedStateId {
    fn from(command: LedCommand) -> Self {
        match command {
            LedCommand::Off => Self::Off,
            LedCommand::Red => Self::Red,
            LedCommand::Green => Self::Green,
            LedCommand::Random => Self::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LedSnapshot {
    pub state: LedStateId,
    pub flipflop: u8,
}
