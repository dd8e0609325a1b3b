use heapless::Vec;

use crate::model::TimerId;

pub type Expired = Vec<TimerId, { TimerId::COUNT }>;

/// One software countdown per timer id, ticked by the scheduler quantum.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerBank {
    remaining_ms: [Option<u32>; TimerId::COUNT],
}

impl TimerBank {
    pub const fn new() -> Self {
        Self {
            remaining_ms: [None; TimerId::COUNT],
        }
    }

    /// Starts `timer`, replacing whatever expiry was pending for it.
    pub fn arm(&mut self, timer: TimerId, duration_ms: u32) {
        self.remaining_ms[timer.index()] = Some(duration_ms.max(1));
    }

    pub fn disarm(&mut self, timer: TimerId) {
        self.remaining_ms[timer.index()] = None;
    }

    pub fn is_armed(&self, timer: TimerId) -> bool {
        self.remaining_ms[timer.index()].is_some()
    }

    pub fn remaining_ms(&self, timer: TimerId) -> Option<u32> {
        self.remaining_ms[timer.index()]
    }

    pub fn next_expiry_ms(&self) -> Option<u32> {
        self.remaining_ms.iter().flatten().copied().min()
    }

    /// Counts every armed timer down by `elapsed_ms`; returns the ones that hit
    /// zero in id order. Expired timers are disarmed.
    pub fn advance(&mut self, elapsed_ms: u32) -> Expired {
        let mut expired = Expired::new();
        for timer in TimerId::ALL {
            let slot = &mut self.remaining_ms[timer.index()];
            let Some(remaining) = *slot else {
                continue;
            };
            if remaining <= elapsed_ms {
                *slot = None;
                let _ = expired.push(timer);
            } else {
                *slot = Some(remaining - elapsed_ms);
            }
        }
        expired
    }
}
