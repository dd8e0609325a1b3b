use crate::{
    error::ServiceError,
    model::{Event, LedFrame, ScreenContext, ScreenKind, ServiceId, TimerId},
    telemetry,
};

/// Side effects a service asks the scheduler to carry out after a dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Append to the back of a service queue.
    Post { to: ServiceId, event: Event },
    /// Re-deliver ahead of anything already queued, keeping relative order.
    Recall { to: ServiceId, event: Event },
    /// (Re)start a timer. Re-arming drops the pending expiry.
    ArmTimer { timer: TimerId, duration_ms: u32 },
    /// Drop a pending expiry, if any.
    DisarmTimer(TimerId),
    PrepareDisplay,
    Render {
        kind: ScreenKind,
        param: u16,
        context: ScreenContext,
    },
    WriteLeds(LedFrame),
}

#[derive(Clone, Copy, Debug)]
pub struct ActionBuffer {
    len: usize,
    slots: [Option<Action>; Self::MAX],
}

impl ActionBuffer {
    pub const MAX: usize = 12;

    pub const fn new() -> Self {
        Self {
            len: 0,
            slots: [None; Self::MAX],
        }
    }

    pub fn push(&mut self, action: Action) {
        if self.len >= Self::MAX {
            telemetry::record_action_dropped();
            log::warn!("actions: buffer full, dropped={:?}", action);
            return;
        }
        self.slots[self.len] = Some(action);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Action> {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    pub fn posted_to(&self, service: ServiceId) -> impl Iterator<Item = Event> + '_ {
        self.iter().filter_map(move |action| match *action {
            Action::Post { to, event } if to == service => Some(event),
            _ => None,
        })
    }

    pub fn contains_post(&self, service: ServiceId, event: Event) -> bool {
        self.posted_to(service).any(|posted| posted == event)
    }

    pub fn armed(&self, timer: TimerId) -> Option<u32> {
        self.iter().find_map(|action| match *action {
            Action::ArmTimer {
                timer: armed,
                duration_ms,
            } if armed == timer => Some(duration_ms),
            _ => None,
        })
    }

    pub fn disarms(&self, timer: TimerId) -> bool {
        self.iter().any(|action| *action == Action::DisarmTimer(timer))
    }

    pub fn rendered(&self) -> Option<(ScreenKind, u16)> {
        self.iter().find_map(|action| match *action {
            Action::Render { kind, param, .. } => Some((kind, param)),
            _ => None,
        })
    }

    pub fn led_frame(&self) -> Option<LedFrame> {
        self.iter().find_map(|action| match *action {
            Action::WriteLeds(frame) => Some(frame),
            _ => None,
        })
    }
}

impl Default for ActionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ServiceOutput {
    pub actions: ActionBuffer,
    pub fault: Option<ServiceError>,
}

/// Per-dispatch scratch passed to every state handler.
pub(crate) struct DispatchContext {
    pub(crate) now_ms: u32,
    pub(crate) actions: ActionBuffer,
    pub(crate) fault: Option<ServiceError>,
}

impl DispatchContext {
    pub(crate) fn new(now_ms: u32) -> Self {
        Self {
            now_ms,
            actions: ActionBuffer::new(),
            fault: None,
        }
    }

    pub(crate) fn post(&mut self, to: ServiceId, event: Event) {
        self.actions.push(Action::Post { to, event });
    }

    pub(crate) fn recall(&mut self, to: ServiceId, event: Event) {
        self.actions.push(Action::Recall { to, event });
    }

    pub(crate) fn arm(&mut self, timer: TimerId, duration_ms: u32) {
        self.actions.push(Action::ArmTimer { timer, duration_ms });
    }

    pub(crate) fn disarm(&mut self, timer: TimerId) {
        self.actions.push(Action::DisarmTimer(timer));
    }

    pub(crate) fn fail(&mut self, fault: ServiceError) {
        self.fault = Some(fault);
    }

    pub(crate) fn finish(self) -> ServiceOutput {
        ServiceOutput {
            actions: self.actions,
            fault: self.fault,
        }
    }
}
