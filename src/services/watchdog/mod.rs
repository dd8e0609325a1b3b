//! Idle-reset watchdog: with no player input for the configured period the
//! whole game is sent back to the welcome screen.

mod engine;
mod machine;

pub use engine::WatchdogEngine;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WatchdogStateId {
    #[default]
    Initializing,
    Waiting,
}
