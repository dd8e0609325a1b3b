use super::actions::ServiceOutput;
use crate::model::{Event, ServiceId};

/// A run-to-completion event handler with private state.
///
/// `handle` is called once per queued event and must return without blocking.
/// Anything it wants done outside its own state comes back as actions.
pub trait Service {
    const ID: ServiceId;

    fn handle(&mut self, event: &Event, now_ms: u32) -> ServiceOutput;
}
