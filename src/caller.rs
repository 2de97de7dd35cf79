//! Caller facade
//!
//! Owns the game, the tap debouncer and the timer queue, and exposes the
//! intents a front-end can issue: tap a cell, draw, reset. All mutation
//! happens synchronously inside one of these calls.

use crate::error::CallerError;
use crate::platform::TimerQueue;
use crate::settings::{Settings, TapMode};
use crate::sim::{
    ConfirmDialog, DrawOutcome, Enqueue, GameState, ResetOutcome, SelectionState, Snapshot,
    TapDebouncer, TapOutcome, TimerHandle, call_number, draw, request_reset,
};

/// Effect of a single tap on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapEffect {
    /// Called or off-board cell; nothing happened
    Rejected,
    /// Sequence in progress
    Counting { number: u8, taps: u8 },
    /// Sequence completed in queue mode
    Enqueued { number: u8, outcome: Enqueue },
    /// Sequence completed in call mode
    Called(u8),
}

pub struct Caller {
    state: GameState,
    debouncer: TapDebouncer,
    timers: TimerQueue,
    tap_mode: TapMode,
}

impl Caller {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::debug!("caller seeded with {seed}");
        Self {
            state: GameState::new(seed),
            debouncer: TapDebouncer::new(settings.tap_window_ms, settings.taps_to_queue),
            timers: TimerQueue::new(),
            tap_mode: settings.tap_mode,
        }
    }

    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> SelectionState {
        self.debouncer.selection()
    }

    pub fn tap_mode(&self) -> TapMode {
        self.tap_mode
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Advance the clock by `delta_ms`, firing due timers
    pub fn advance_clock(&mut self, delta_ms: u64) -> usize {
        let fired = self.timers.advance(delta_ms);
        self.dispatch(fired)
    }

    /// Advance the clock to `now_ms`, firing due timers. Returns the number
    /// of tap sequences that timed out.
    pub fn advance_clock_to(&mut self, now_ms: u64) -> usize {
        let fired = self.timers.advance_to(now_ms);
        self.dispatch(fired)
    }

    fn dispatch(&mut self, fired: Vec<TimerHandle>) -> usize {
        fired
            .into_iter()
            .filter(|&handle| self.debouncer.on_timeout(handle))
            .count()
    }

    /// User tapped board cell `number`
    pub fn tap_number(&mut self, number: u8) -> TapEffect {
        let called = self.state.is_called(number);
        match self.debouncer.on_tap(number, called, &mut self.timers) {
            TapOutcome::Rejected => TapEffect::Rejected,
            TapOutcome::Counting { number, taps } => TapEffect::Counting { number, taps },
            TapOutcome::Commit(number) => self.commit(number),
        }
    }

    fn commit(&mut self, number: u8) -> TapEffect {
        match self.tap_mode {
            TapMode::Queue => TapEffect::Enqueued {
                number,
                outcome: self.state.enqueue(number),
            },
            TapMode::Call => match call_number(&mut self.state, number) {
                Ok(n) => TapEffect::Called(n),
                Err(e) => {
                    log::warn!("tap call of {number} failed: {e}");
                    TapEffect::Rejected
                }
            },
        }
    }

    /// User pressed the draw button
    pub fn request_draw(&mut self) -> Result<DrawOutcome, CallerError> {
        draw(&mut self.state)
    }

    /// User pressed restart. Nothing changes unless the dialog confirms.
    pub fn request_reset(&mut self, dialog: &mut impl ConfirmDialog) -> ResetOutcome {
        let outcome = request_reset(&mut self.state, dialog);
        if outcome == ResetOutcome::Reset {
            self.debouncer.clear(&mut self.timers);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Confirmation, DrawSource, GamePhase};

    fn uncalled(caller: &Caller) -> u8 {
        (1..=90)
            .find(|&n| !caller.state().is_called(n))
            .unwrap()
    }

    #[test]
    fn test_triple_tap_queues_for_next_draw() {
        let mut caller = Caller::with_seed(11);
        caller.request_draw().unwrap();
        let n = uncalled(&caller);

        caller.tap_number(n);
        caller.advance_clock(100);
        caller.tap_number(n);
        caller.advance_clock(100);
        assert_eq!(
            caller.tap_number(n),
            TapEffect::Enqueued {
                number: n,
                outcome: Enqueue::Queued { position: 0 }
            }
        );

        let outcome = caller.request_draw().unwrap();
        assert_eq!(outcome.number, n);
        assert_eq!(outcome.source, DrawSource::Queued);
    }

    #[test]
    fn test_slow_taps_never_queue() {
        let mut caller = Caller::with_seed(11);
        for _ in 0..6 {
            assert!(matches!(
                caller.tap_number(33),
                TapEffect::Counting { taps: 1, .. }
            ));
            assert_eq!(caller.advance_clock(501), 1);
        }
        assert!(caller.state().queue().is_empty());
    }

    #[test]
    fn test_repeat_commit_is_idempotent() {
        let mut caller = Caller::with_seed(11);
        for _ in 0..3 {
            caller.tap_number(20);
        }
        caller.tap_number(20);
        caller.tap_number(20);
        let last = caller.tap_number(20);
        assert_eq!(
            last,
            TapEffect::Enqueued {
                number: 20,
                outcome: Enqueue::Duplicate
            }
        );
        assert_eq!(caller.state().queue().len(), 1);
        assert_eq!(caller.selection(), SelectionState::default());
    }

    #[test]
    fn test_tap_on_called_cell_rejected() {
        let mut caller = Caller::with_seed(11);
        let drawn = caller.request_draw().unwrap().number;
        assert_eq!(caller.tap_number(drawn), TapEffect::Rejected);
        assert_eq!(caller.selection(), SelectionState::default());
    }

    #[test]
    fn test_call_mode_calls_immediately() {
        let mut caller = Caller::new(&Settings {
            seed: Some(5),
            tap_mode: TapMode::Call,
            ..Settings::default()
        });
        caller.tap_number(64);
        caller.tap_number(64);
        assert_eq!(caller.tap_number(64), TapEffect::Called(64));
        assert_eq!(caller.state().current(), Some(64));
        assert_eq!(caller.state().phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_reset_clears_open_tap_sequence() {
        let mut caller = Caller::with_seed(11);
        caller.request_draw().unwrap();
        let n = uncalled(&caller);
        caller.tap_number(n);
        caller.tap_number(n);

        let outcome = caller.request_reset(&mut |_: &str| Confirmation::Confirmed);
        assert_eq!(outcome, ResetOutcome::Reset);
        assert_eq!(caller.selection(), SelectionState::default());
        assert_eq!(caller.state().phase(), GamePhase::NotStarted);
        // The third tap starts a fresh sequence
        assert!(matches!(
            caller.tap_number(n),
            TapEffect::Counting { taps: 1, .. }
        ));
    }

    #[test]
    fn test_cancelled_reset_keeps_tap_sequence() {
        let mut caller = Caller::with_seed(11);
        caller.tap_number(50);
        caller.tap_number(50);
        caller.request_reset(&mut |_: &str| Confirmation::Cancelled);
        assert_eq!(caller.selection().tap_count, 2);
    }
}
