pub mod display;
pub mod game_flow;
pub mod led;
pub mod sequence;
pub mod watchdog;

pub use display::{DisplayEngine, DisplaySnapshot, DisplayStateId};
pub use game_flow::{GameFlowEngine, GameFlowSnapshot, GameFlowStateId, HighScoreTable};
pub use led::{LedEngine, LedSnapshot, LedStateId};
pub use sequence::{SequenceEngine, SequenceSnapshot, SequenceStateId};
pub use watchdog::{WatchdogEngine, WatchdogStateId};
