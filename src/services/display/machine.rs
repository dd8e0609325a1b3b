use statig::prelude::*;

use super::{DisplayStateId, DEFERRAL_CAPACITY};
use crate::{
    framework::{Action, DeferralQueue, DispatchContext},
    model::{Event, Screen, ScreenContext, ServiceId},
    telemetry,
};

pub(super) struct DisplayMachine {
    pub(super) state_id: DisplayStateId,
    pub(super) screen: ScreenContext,
    pub(super) deferred: DeferralQueue<Screen, DEFERRAL_CAPACITY>,
    pub(super) renders: u32,
}

impl DisplayMachine {
    pub(super) fn new() -> Self {
        Self {
            state_id: DisplayStateId::Initializing,
            screen: ScreenContext::default(),
            deferred: DeferralQueue::new(),
            renders: 0,
        }
    }

    fn render(&mut self, context: &mut DispatchContext, screen: &Screen) {
        self.screen.absorb(screen);
        let (kind, param) = screen.to_wire();
        context.actions.push(Action::Render {
            kind,
            param,
            context: self.screen,
        });
        self.renders = self.renders.wrapping_add(1);
        self.state_id = DisplayStateId::Busy;
        log::debug!("display: render kind={:?} param={:#06x}", kind, param);
    }

    fn defer(&mut self, context: &mut DispatchContext, screen: &Screen) {
        match self.deferred.defer(*screen) {
            Ok(()) => {
                telemetry::record_render_deferred();
                log::debug!(
                    "display: deferred kind={:?} pending={}",
                    screen.kind(),
                    self.deferred.len()
                );
            }
            Err(fault) => {
                telemetry::record_deferral_overflow();
                log::warn!(
                    "display: dropped kind={:?} capacity={}",
                    screen.kind(),
                    self.deferred.capacity()
                );
                context.fail(fault);
            }
        }
    }

    fn recall_deferred(&mut self, context: &mut DispatchContext) {
        let mut recalled = 0u32;
        for screen in self.deferred.drain() {
            context.recall(ServiceId::Display, Event::Render(screen));
            recalled += 1;
        }
        if recalled > 0 {
            telemetry::record_renders_recalled(recalled);
            log::debug!("display: recalled count={}", recalled);
        }
    }
}

#[state_machine(initial = "State::initializing()")]
impl DisplayMachine {
    #[state]
    fn initializing(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Init => {
                context.actions.push(Action::PrepareDisplay);
                self.recall_deferred(context);
                self.state_id = DisplayStateId::Available;
                Transition(State::available())
            }
            Event::Render(screen) => {
                self.defer(context, screen);
                Handled
            }
            _ => Handled,
        }
    }

    #[state]
    fn available(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Render(screen) => {
                self.render(context, screen);
                Transition(State::busy())
            }
            _ => Handled,
        }
    }

    #[state]
    fn busy(&mut self, context: &mut DispatchContext, event: &Event) -> Outcome<State> {
        match event {
            Event::Render(screen) => {
                self.defer(context, screen);
                Handled
            }
            Event::RenderComplete => {
                self.recall_deferred(context);
                self.state_id = DisplayStateId::Available;
                Transition(State::available())
            }
            _ => Handled,
        }
    }
}
