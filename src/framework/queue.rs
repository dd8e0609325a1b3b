use heapless::Deque;

use crate::{
    error::ServiceError,
    model::{Event, ServiceId},
};

pub const QUEUE_DEPTH: usize = 16;

/// FIFO inbox of one service.
pub struct EventQueue<const N: usize = QUEUE_DEPTH> {
    owner: ServiceId,
    events: Deque<Event, N>,
}

impl<const N: usize> EventQueue<N> {
    pub const fn new(owner: ServiceId) -> Self {
        Self {
            owner,
            events: Deque::new(),
        }
    }

    pub fn push_back(&mut self, event: Event) -> Result<(), ServiceError> {
        self.events
            .push_back(event)
            .map_err(|_| ServiceError::QueueOverflow(self.owner))
    }

    pub fn push_front(&mut self, event: Event) -> Result<(), ServiceError> {
        self.events
            .push_front(event)
            .map_err(|_| ServiceError::QueueOverflow(self.owner))
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Bounded holding area for work that arrived while its owner was busy.
/// Exceeding the capacity is reported, never overwritten.
pub struct DeferralQueue<T, const N: usize> {
    items: Deque<T, N>,
}

impl<T, const N: usize> DeferralQueue<T, N> {
    pub const fn new() -> Self {
        Self {
            items: Deque::new(),
        }
    }

    pub fn defer(&mut self, item: T) -> Result<(), ServiceError> {
        self.items
            .push_back(item)
            .map_err(|_| ServiceError::DeferralOverflow)
    }

    /// Yields every deferred item in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        core::iter::from_fn(move || self.items.pop_front())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, const N: usize> Default for DeferralQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
