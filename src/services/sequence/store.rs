use heapless::Vec;
use rand::{rngs::SmallRng, Rng as _};

use crate::{
    error::ServiceError,
    model::{InputVerdict, Symbol},
};

pub const SEQUENCE_CAPACITY: usize = 150;

/// The growing list of cues for the current game.
#[derive(Clone, Debug, Default)]
pub(super) struct SymbolSequence {
    symbols: Vec<Symbol, SEQUENCE_CAPACITY>,
}

impl SymbolSequence {
    pub(super) const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    pub(super) fn regenerate(
        &mut self,
        rng: &mut SmallRng,
        length: usize,
    ) -> Result<(), ServiceError> {
        self.symbols.clear();
        for _ in 0..length {
            self.extend(rng)?;
        }
        Ok(())
    }

    pub(super) fn extend(&mut self, rng: &mut SmallRng) -> Result<(), ServiceError> {
        self.symbols
            .push(random_direction(rng))
            .map_err(|_| ServiceError::SequenceOverflow)
    }

    pub(super) fn is_full(&self) -> bool {
        self.symbols.is_full()
    }

    pub(super) fn len(&self) -> usize {
        self.symbols.len()
    }

    pub(super) fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    pub(super) fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }
}

fn random_direction(rng: &mut SmallRng) -> Symbol {
    Symbol::DIRECTIONS[rng.gen_range(0..Symbol::DIRECTIONS.len())]
}

/// Points for one correct input in a round whose sequence has `length` cues.
pub fn score_increment(length: usize) -> u16 {
    (length / 4).max(1).min(u16::MAX as usize) as u16
}

/// Compares a player input against the cue at `seq_index`.
pub fn check_input(sequence: &[Symbol], seq_index: usize, input: Symbol) -> InputVerdict {
    match sequence.get(seq_index) {
        Some(expected) if *expected == input => {
            if seq_index + 1 == sequence.len() {
                InputVerdict::CorrectFinal
            } else {
                InputVerdict::Correct
            }
        }
        _ => InputVerdict::Incorrect,
    }
}
