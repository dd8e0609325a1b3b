use statig::prelude::*;

use super::WatchdogStateId;
use crate::{
    config::GameConfig,
    framework::DispatchContext,
    model::{Event, ServiceId, TimerId},
    telemetry,
};

pub(super) struct WatchdogMachine {
    config: &'static GameConfig,
    pub(super) state_id: WatchdogStateId,
    pub(super) resets: u32,
}

impl WatchdogMachine {
    pub(super) fn new(config: &'static GameConfig) -> Self {
        Self {
            config,
            state_id: WatchdogStateId::Initializing,
            resets: 0,
        }
    }

    fn arm(&self, context: &mut DispatchContext) {
        context.arm(TimerId::Idle, self.config.timing.idle_reset_ms);
    }
}

#[state_machine(initial = "State::initializing()")]
impl WatchdogMachine {
    #[state]
    fn initializing(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Init => {
                self.arm(context);
                self.state_id = WatchdogStateId::Waiting;
                Transition(State::waiting())
            }
            _ => Handled,
        }
    }

    #[state]
    fn waiting(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::InputDetected => {
                self.arm(context);
                Handled
            }
            Event::Timeout(TimerId::Idle) => {
                self.resets = self.resets.wrapping_add(1);
                telemetry::record_master_reset();
                log::info!(
                    "watchdog: idle reset after_ms={} count={}",
                    self.config.timing.idle_reset_ms,
                    self.resets
                );
                context.post(ServiceId::GameFlow, Event::MasterReset);
                context.post(ServiceId::Sequence, Event::MasterReset);
                self.arm(context);
                Handled
            }
            _ => Handled,
        }
    }
}
