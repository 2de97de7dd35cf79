//! Manual queue of user-chosen numbers
//!
//! FIFO, duplicate-free. Entries are checked against the called set when
//! inserted; the draw engine re-checks them when they come out.

use std::collections::VecDeque;

use crate::in_range;

/// Result of an enqueue attempt. Rejections are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueue {
    /// Appended at this 0-based position
    Queued { position: usize },
    /// Already waiting in the queue
    Duplicate,
    /// Already called this game
    AlreadyCalled,
    /// Not on the board
    OutOfRange,
}

impl Enqueue {
    pub fn is_queued(&self) -> bool {
        matches!(self, Enqueue::Queued { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualQueue {
    items: VecDeque<u8>,
}

impl ManualQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `number` unless it is queued, called or off the board
    pub fn enqueue(&mut self, number: u8, already_called: bool) -> Enqueue {
        let outcome = if !in_range(number) {
            Enqueue::OutOfRange
        } else if already_called {
            Enqueue::AlreadyCalled
        } else if self.contains(number) {
            Enqueue::Duplicate
        } else {
            self.items.push_back(number);
            Enqueue::Queued {
                position: self.items.len() - 1,
            }
        };
        log::debug!("enqueue {number}: {outcome:?}");
        outcome
    }

    /// Pop the head, or None when nothing is queued
    pub fn dequeue_next(&mut self) -> Option<u8> {
        self.items.pop_front()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.items.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Queued numbers, head first
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.items.iter().copied()
    }
}
