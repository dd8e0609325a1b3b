use statig::blocking::IntoStateMachineExt as _;

use super::{machine::WatchdogMachine, WatchdogStateId};
use crate::{
    config::{active_config, GameConfig},
    framework::{DispatchContext, Service, ServiceOutput},
    model::{Event, ServiceId},
};

pub struct WatchdogEngine {
    machine: statig::blocking::StateMachine<WatchdogMachine>,
}

impl Default for WatchdogEngine {
    fn default() -> Self {
        Self::new(active_config())
    }
}

impl WatchdogEngine {
    pub fn new(config: &'static GameConfig) -> Self {
        Self {
            machine: WatchdogMachine::new(config).state_machine(),
        }
    }

    pub fn state(&self) -> WatchdogStateId {
        self.machine.inner().state_id
    }

    pub fn resets(&self) -> u32 {
        self.machine.inner().resets
    }
}

impl Service for WatchdogEngine {
    const ID: ServiceId = ServiceId::Watchdog;

    fn handle(&mut self, event: &Event, now_ms: u32) -> ServiceOutput {
        let mut context = DispatchContext::new(now_ms);
        self.machine.handle_with_context(event, &mut context);
        context.finish()
    }
}
