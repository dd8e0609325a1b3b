use statig::blocking::IntoStateMachineExt as _;

use super::{machine::DisplayMachine, DisplaySnapshot};
use crate::{
    framework::{DispatchContext, Service, ServiceOutput},
    model::{Event, ServiceId},
};

pub struct DisplayEngine {
    machine: statig::blocking::StateMachine<DisplayMachine>,
}

impl Default for DisplayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayEngine {
    pub fn new() -> Self {
        Self {
            machine: DisplayMachine::new().state_machine(),
        }
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        let inner = self.machine.inner();
        DisplaySnapshot {
            state: inner.state_id,
            deferred: inner.deferred.len(),
            renders: inner.renders,
            screen: inner.screen,
        }
    }
}

impl Service for DisplayEngine {
    const ID: ServiceId = ServiceId::Display;

    fn handle(&mut self, event: &Event, now_ms: u32) -> ServiceOutput {
        let mut context = DispatchContext::new(now_ms);
        self.machine.handle_with_context(event, &mut context);
        context.finish()
    }
}
