use statig::blocking::IntoStateMachineExt as _;

use super::{machine::GameFlowMachine, GameFlowSnapshot};
use crate::{
    config::{active_config, GameConfig},
    framework::{DispatchContext, Service, ServiceOutput},
    model::{Event, ServiceId},
};

pub struct GameFlowEngine {
    machine: statig::blocking::StateMachine<GameFlowMachine>,
}

impl Default for GameFlowEngine {
    fn default() -> Self {
        Self::new(active_config())
    }
}

impl GameFlowEngine {
    pub fn new(config: &'static GameConfig) -> Self {
        Self {
            machine: GameFlowMachine::new(config).state_machine(),
        }
    }

    pub fn snapshot(&self) -> GameFlowSnapshot {
        let inner = self.machine.inner();
        GameFlowSnapshot {
            state: inner.state_id,
            round: inner.round,
            last_score: inner.last_score,
            high_scores: inner.high_scores.visible(),
        }
    }
}

impl Service for GameFlowEngine {
    const ID: ServiceId = ServiceId::GameFlow;

    fn handle(&mut self, event: &Event, now_ms: u32) -> ServiceOutput {
        let mut context = DispatchContext::new(now_ms);
        self.machine.handle_with_context(event, &mut context);
        context.finish()
    }
}
