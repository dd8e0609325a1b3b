//! Run-to-completion substrate: per-service queues, software timers, the
//! action buffer services return, and the priority scheduler tying them to
//! the board.

mod actions;
mod queue;
mod scheduler;
mod service;
mod timers;

pub(crate) use actions::DispatchContext;
pub use actions::{Action, ActionBuffer, ServiceOutput};
pub use queue::{DeferralQueue, EventQueue, QUEUE_DEPTH};
pub use scheduler::{Scheduler, MAX_STEPS_PER_CYCLE};
pub use service::Service;
pub use timers::{Expired, TimerBank};
