//! Game state and core engine types
//!
//! Everything that lives for the duration of one game is owned here and
//! cleared together on reset.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pouch::Pouch;
use super::queue::{Enqueue, ManualQueue};
use crate::consts::NUMBER_COUNT;
use crate::in_range;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing called yet
    NotStarted,
    /// Some, but not all, numbers called
    InProgress,
    /// Every number called
    Complete,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Uncalled numbers
    pub(crate) pouch: Pouch,
    /// Called numbers in call order
    pub(crate) history: Vec<u8>,
    pub(crate) current: Option<u8>,
    pub(crate) previous: Option<u8>,
    pub(crate) queue: ManualQueue,
}

impl GameState {
    /// Create an empty game with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(seed: u64, rng: Pcg32) -> Self {
        Self {
            seed,
            rng,
            pouch: Pouch::full(),
            history: Vec::with_capacity(NUMBER_COUNT),
            current: None,
            previous: None,
            queue: ManualQueue::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self.history.len() {
            0 => GamePhase::NotStarted,
            NUMBER_COUNT => GamePhase::Complete,
            _ => GamePhase::InProgress,
        }
    }

    pub fn is_called(&self, number: u8) -> bool {
        in_range(number) && !self.pouch.contains(number)
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn previous(&self) -> Option<u8> {
        self.previous
    }

    /// Called numbers, oldest first
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn called_count(&self) -> usize {
        self.history.len()
    }

    pub fn remaining(&self) -> usize {
        self.pouch.len()
    }

    pub fn queue(&self) -> &ManualQueue {
        &self.queue
    }

    /// Queue `number` to be drawn ahead of random picks
    pub fn enqueue(&mut self, number: u8) -> Enqueue {
        let called = self.is_called(number);
        self.queue.enqueue(number, called)
    }

    /// Clear everything back to `NotStarted`.
    ///
    /// The replacement state is built first and swapped in with a single
    /// assignment. The RNG stream carries on, so the next game differs.
    pub fn reset(&mut self) {
        let fresh = Self::with_rng(self.seed, self.rng.clone());
        *self = fresh;
    }

    /// Record a number already taken from the pouch
    pub(crate) fn record_call(&mut self, number: u8) {
        self.previous = self.current;
        self.current = Some(number);
        self.history.push(number);

        match self.phase() {
            GamePhase::Complete => log::info!("All {NUMBER_COUNT} numbers called"),
            _ if self.history.len() == 1 => log::info!("Game started (seed {})", self.seed),
            _ => {}
        }
    }

    /// Read-only view for the front-end
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            current: self.current,
            previous: self.previous,
            history: self.history.clone(),
            queued: self.queue.iter().collect(),
        }
    }
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub current: Option<u8>,
    pub previous: Option<u8>,
    /// Called numbers in call order
    pub history: Vec<u8>,
    /// Manual queue, head first
    pub queued: Vec<u8>,
}

impl Snapshot {
    pub fn is_called(&self, number: u8) -> bool {
        self.history.contains(&number)
    }

    pub fn is_queued(&self, number: u8) -> bool {
        self.queued.contains(&number)
    }

    pub fn called_count(&self) -> usize {
        self.history.len()
    }
}
