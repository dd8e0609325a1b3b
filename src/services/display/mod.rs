//! Serializes render requests against a slow multi-pass display. Requests
//! that arrive mid-render wait in a bounded deferral buffer and are recalled,
//! in order, when the display reports ready.

mod engine;
mod machine;

pub use engine::DisplayEngine;

use crate::model::{ScreenContext, ScreenKind};

/// One slot per render-triggering screen kind.
pub const DEFERRAL_CAPACITY: usize = ScreenKind::COUNT;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisplayStateId {
    #[default]
    Initializing,
    Available,
    Busy,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisplaySnapshot {
    pub state: DisplayStateId,
    pub deferred: usize,
    pub renders: u32,
    pub screen: ScreenContext,
}

#[cfg(test)]
mod tests;
