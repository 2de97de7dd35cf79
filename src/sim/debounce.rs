//! Repeated-tap detection
//!
//! Turns a burst of taps on the same board cell into a single commit. Timing
//! is delegated to a [`TimerHost`]; when an armed timer expires the host
//! hands its handle back through [`TapDebouncer::on_timeout`].

use crate::consts::{TAPS_TO_QUEUE, TAP_WINDOW_MS};
use crate::in_range;

/// Opaque id of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Schedules one-shot timers
pub trait TimerHost {
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// In-progress tap sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<u8>,
    pub tap_count: u8,
}

/// What a single tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Ignored: the number is called or not on the board
    Rejected,
    /// Sequence continues; `taps` so far on `number`
    Counting { number: u8, taps: u8 },
    /// Threshold reached for `number`
    Commit(u8),
}

#[derive(Debug, Clone)]
pub struct TapDebouncer {
    selection: SelectionState,
    armed: Option<TimerHandle>,
    window_ms: u64,
    trigger: u8,
}

impl Default for TapDebouncer {
    fn default() -> Self {
        Self::new(TAP_WINDOW_MS, TAPS_TO_QUEUE)
    }
}

impl TapDebouncer {
    pub fn new(window_ms: u64, trigger: u8) -> Self {
        Self {
            selection: SelectionState::default(),
            armed: None,
            window_ms,
            trigger: trigger.max(1),
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Handle of the pending timeout, if a sequence is open
    pub fn armed(&self) -> Option<TimerHandle> {
        self.armed
    }

    /// Register a tap on `number`.
    ///
    /// Called numbers are rejected without touching the open sequence.
    pub fn on_tap(
        &mut self,
        number: u8,
        already_called: bool,
        timers: &mut impl TimerHost,
    ) -> TapOutcome {
        if already_called || !in_range(number) {
            log::debug!("tap on {number} rejected");
            return TapOutcome::Rejected;
        }

        if self.selection.selected == Some(number) {
            self.selection.tap_count += 1;
        } else {
            self.selection = SelectionState {
                selected: Some(number),
                tap_count: 1,
            };
        }

        if let Some(handle) = self.armed.take() {
            timers.cancel(handle);
        }

        let taps = self.selection.tap_count;
        if taps >= self.trigger {
            self.selection = SelectionState::default();
            log::debug!("tap sequence on {number} committed");
            return TapOutcome::Commit(number);
        }

        self.armed = Some(timers.schedule(self.window_ms));
        log::debug!("tap {taps}/{} on {number}", self.trigger);
        TapOutcome::Counting { number, taps }
    }

    /// Timer expiry. Returns true if it closed the open sequence; handles
    /// that are no longer armed are ignored.
    pub fn on_timeout(&mut self, handle: TimerHandle) -> bool {
        if self.armed != Some(handle) {
            return false;
        }
        self.armed = None;
        if let Some(number) = self.selection.selected {
            log::debug!(
                "tap sequence on {number} timed out after {} taps",
                self.selection.tap_count
            );
        }
        self.selection = SelectionState::default();
        true
    }

    /// Drop any open sequence and cancel its timer
    pub fn clear(&mut self, timers: &mut impl TimerHost) {
        if let Some(handle) = self.armed.take() {
            timers.cancel(handle);
        }
        self.selection = SelectionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records schedule/cancel calls without any notion of time
    #[derive(Default)]
    struct FakeTimers {
        next: u64,
        live: Vec<TimerHandle>,
    }

    impl TimerHost for FakeTimers {
        fn schedule(&mut self, _delay_ms: u64) -> TimerHandle {
            self.next += 1;
            let handle = TimerHandle(self.next);
            self.live.push(handle);
            handle
        }

        fn cancel(&mut self, handle: TimerHandle) {
            self.live.retain(|&h| h != handle);
        }
    }

    #[test]
    fn test_three_taps_commit() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();

        assert_eq!(
            deb.on_tap(7, false, &mut timers),
            TapOutcome::Counting { number: 7, taps: 1 }
        );
        assert_eq!(
            deb.on_tap(7, false, &mut timers),
            TapOutcome::Counting { number: 7, taps: 2 }
        );
        assert_eq!(deb.on_tap(7, false, &mut timers), TapOutcome::Commit(7));
        assert_eq!(deb.selection(), SelectionState::default());
        assert!(timers.live.is_empty(), "commit must cancel the timer");
    }

    #[test]
    fn test_only_one_timer_live() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();
        deb.on_tap(7, false, &mut timers);
        deb.on_tap(7, false, &mut timers);
        assert_eq!(timers.live.len(), 1);
        assert_eq!(deb.armed(), timers.live.first().copied());
    }

    #[test]
    fn test_switching_number_restarts_count() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();
        deb.on_tap(7, false, &mut timers);
        deb.on_tap(7, false, &mut timers);
        assert_eq!(
            deb.on_tap(8, false, &mut timers),
            TapOutcome::Counting { number: 8, taps: 1 }
        );
        assert_eq!(
            deb.on_tap(7, false, &mut timers),
            TapOutcome::Counting { number: 7, taps: 1 }
        );
    }

    #[test]
    fn test_timeout_resets_selection() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();
        deb.on_tap(7, false, &mut timers);
        deb.on_tap(7, false, &mut timers);

        let handle = deb.armed().unwrap();
        assert!(deb.on_timeout(handle));
        assert_eq!(deb.selection(), SelectionState::default());
        assert_eq!(
            deb.on_tap(7, false, &mut timers),
            TapOutcome::Counting { number: 7, taps: 1 }
        );
    }

    #[test]
    fn test_stale_timeout_ignored() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();
        deb.on_tap(7, false, &mut timers);
        let old = deb.armed().unwrap();
        deb.on_tap(7, false, &mut timers);

        assert!(!deb.on_timeout(old));
        assert_eq!(deb.selection().tap_count, 2);
    }

    #[test]
    fn test_called_number_rejected_without_breaking_sequence() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();
        deb.on_tap(7, false, &mut timers);
        deb.on_tap(7, false, &mut timers);

        assert_eq!(deb.on_tap(9, true, &mut timers), TapOutcome::Rejected);
        assert_eq!(deb.on_tap(0, false, &mut timers), TapOutcome::Rejected);
        assert_eq!(deb.on_tap(7, false, &mut timers), TapOutcome::Commit(7));
    }

    #[test]
    fn test_clear_cancels_timer() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::default();
        deb.on_tap(7, false, &mut timers);
        deb.clear(&mut timers);
        assert!(timers.live.is_empty());
        assert_eq!(deb.armed(), None);
        assert_eq!(deb.selection(), SelectionState::default());
    }

    #[test]
    fn test_single_tap_trigger() {
        let mut timers = FakeTimers::default();
        let mut deb = TapDebouncer::new(500, 1);
        assert_eq!(deb.on_tap(4, false, &mut timers), TapOutcome::Commit(4));
    }
}
