use statig::blocking::IntoStateMachineExt as _;

use super::{machine::LedMachine, LedSnapshot};
use crate::{
    config::{active_config, GameConfig},
    framework::{DispatchContext, Service, ServiceOutput},
    model::{Event, ServiceId},
};

pub struct LedEngine {
    machine: statig::blocking::StateMachine<LedMachine>,
}

impl Default for LedEngine {
    fn default() -> Self {
        Self::new(active_config())
    }
}

impl LedEngine {
    pub fn new(config: &'static GameConfig) -> Self {
        Self {
            machine: LedMachine::new(config).state_machine(),
        }
    }

    pub fn snapshot(&self) -> LedSnapshot {
        let inner = self.machine.inner();
        LedSnapshot {
            state: inner.state_id,
            flipflop: inner.flipflop,
        }
    }
}

impl Service for LedEngine {
    const ID: ServiceId = ServiceId::Led;

    fn handle(&mut self, event: &Event, now_ms: u32) -> ServiceOutput {
        let mut context = DispatchContext::new(now_ms);
        self.machine.handle_with_context(event, &mut context);
        context.finish()
    }
}
