//! Virtual-clock timer queue
//!
//! Time only moves when the owner advances it. Tests step it by hand; the
//! terminal front-end feeds it wall-clock milliseconds before each event.

use crate::sim::{TimerHandle, TimerHost};

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    /// (handle, deadline)
    pending: Vec<(TimerHandle, u64)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward by `delta_ms`
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TimerHandle> {
        self.advance_to(self.now_ms.saturating_add(delta_ms))
    }

    /// Move the clock to `now_ms` and return every expired handle, earliest
    /// deadline first. The clock never runs backwards.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<TimerHandle> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut fired = Vec::new();
        self.pending.retain(|&(handle, deadline)| {
            if deadline <= now {
                fired.push((deadline, handle));
                false
            } else {
                true
            }
        });
        fired.sort_unstable();
        fired.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl TimerHost for TimerQueue {
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending
            .push((handle, self.now_ms.saturating_add(delay_ms)));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(h, _)| h != handle);
    }
}
