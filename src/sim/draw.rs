//! Drawing and calling numbers
//!
//! The manual queue always wins over randomness. A queued number that was
//! called some other way since it was queued is dropped and selection
//! moves on.

use super::state::{GamePhase, GameState};
use crate::error::CallerError;
use crate::in_range;

/// Where a drawn number came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// Head of the manual queue
    Queued,
    /// Uniform pick from the uncalled numbers
    Random,
}

/// Result of a successful draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub number: u8,
    pub source: DrawSource,
    /// Current number before this draw
    pub previous: Option<u8>,
    /// Queued numbers discarded because they were already called
    pub stale: Vec<u8>,
}

/// Call the next number: queue head first, otherwise random.
///
/// Fails with `ExhaustedRange` once all numbers are called, leaving the
/// state untouched.
pub fn draw(state: &mut GameState) -> Result<DrawOutcome, CallerError> {
    if state.phase() == GamePhase::Complete {
        log::debug!("draw rejected: range exhausted");
        return Err(CallerError::ExhaustedRange);
    }

    let mut stale = Vec::new();
    let (number, source) = loop {
        match state.queue.dequeue_next() {
            Some(n) if state.pouch.take(n) => break (n, DrawSource::Queued),
            Some(n) => {
                log::debug!("discarding stale queued number {n}");
                stale.push(n);
            }
            None => match state.pouch.take_random(&mut state.rng) {
                Some(n) => break (n, DrawSource::Random),
                None => return Err(CallerError::ExhaustedRange),
            },
        }
    };

    state.record_call(number);
    log::debug!(
        "drew {number} ({source:?}), {} remaining",
        state.pouch.len()
    );

    Ok(DrawOutcome {
        number,
        source,
        previous: state.previous,
        stale,
    })
}

/// Call a specific number right away, bypassing the queue
pub fn call_number(state: &mut GameState, number: u8) -> Result<u8, CallerError> {
    if !in_range(number) {
        return Err(CallerError::OutOfRange(number));
    }
    if state.phase() == GamePhase::Complete {
        return Err(CallerError::ExhaustedRange);
    }
    if !state.pouch.take(number) {
        return Err(CallerError::AlreadyCalled(number));
    }

    state.record_call(number);
    log::debug!("called {number} directly");
    Ok(number)
}
