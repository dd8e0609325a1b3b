use statig::blocking::IntoStateMachineExt as _;

use super::{
    machine::{SequenceMachine, DEFAULT_SEED},
    SequenceSnapshot,
};
use crate::{
    config::{active_config, GameConfig},
    framework::{DispatchContext, Service, ServiceOutput},
    model::{Event, ServiceId, Symbol},
};

pub struct SequenceEngine {
    machine: statig::blocking::StateMachine<SequenceMachine>,
}

impl Default for SequenceEngine {
    fn default() -> Self {
        Self::new(active_config())
    }
}

impl SequenceEngine {
    pub fn new(config: &'static GameConfig) -> Self {
        Self::with_seed(config, DEFAULT_SEED)
    }

    pub fn with_seed(config: &'static GameConfig, seed: u64) -> Self {
        Self {
            machine: SequenceMachine::new(config, seed).state_machine(),
        }
    }

    pub fn snapshot(&self) -> SequenceSnapshot {
        let inner = self.machine.inner();
        SequenceSnapshot {
            state: inner.state_id,
            round: inner.round,
            score: inner.score,
            playtime_left: inner.playtime_left,
            seq_index: inner.seq_index,
            length: inner.sequence.len(),
            neutral: inner.neutral,
        }
    }

    pub fn sequence(&self) -> &[Symbol] {
        self.machine.inner().sequence.as_slice()
    }
}

impl Service for SequenceEngine {
    const ID: ServiceId = ServiceId::Sequence;

    fn handle(&mut self, event: &Event, now_ms: u32) -> ServiceOutput {
        let mut context = DispatchContext::new(now_ms);
        self.machine.handle_with_context(event, &mut context);
        context.finish()
    }
}
