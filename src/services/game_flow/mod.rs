//! Top-level game phases: welcome, leader playback, follower input,
//! round and game completion, attract-mode demo and the high-score table.

mod engine;
mod high_scores;
mod machine;

pub use engine::GameFlowEngine;
pub use high_scores::{HighScoreTable, VISIBLE_HIGH_SCORES};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GameFlowStateId {
    #[default]
    Initializing,
    Welcome,
    Leader,
    Follower,
    RoundComplete,
    GameComplete,
    Demo,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameFlowSnapshot {
    pub state: GameFlowStateId,
    pub round: u16,
    pub last_score: u16,
    pub high_scores: [u16; VISIBLE_HIGH_SCORES],
}
