//! Owns the cue sequence: generation, timed playback, joystick
//! classification, input checking, scoring and the per-round play clock.

mod classify;
mod engine;
mod machine;
mod store;

pub use classify::classify;
pub use engine::SequenceEngine;
pub use store::{check_input, score_increment, SEQUENCE_CAPACITY};

use crate::model::AxisSample;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SequenceStateId {
    #[default]
    Calibrating,
    Creating,
    Displaying,
    AwaitingInput,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequenceSnapshot {
    pub state: SequenceStateId,
    pub round: u16,
    pub score: u16,
    pub playtime_left: u8,
    pub seq_index: usize,
    pub length: usize,
    pub neutral: AxisSample,
}
