//! Numbers still waiting to be called
//!
//! A compact pool sampled by index, so a random draw always terminates in
//! O(1) no matter how few numbers are left. A slot table maps each number to
//! its position in the pool, which keeps removal of a specific number O(1)
//! as well.

use rand::Rng;

use crate::consts::{NUMBER_COUNT, NUMBER_MAX, NUMBER_MIN};
use crate::in_range;

/// Uncalled numbers of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pouch {
    numbers: Vec<u8>,
    /// Position of each number in `numbers` (index 0 unused)
    slots: [Option<u8>; NUMBER_COUNT + 1],
}

impl Default for Pouch {
    fn default() -> Self {
        Self::full()
    }
}

impl Pouch {
    /// A pouch holding every number in the range
    pub fn full() -> Self {
        let numbers: Vec<u8> = (NUMBER_MIN..=NUMBER_MAX).collect();
        let mut slots = [None; NUMBER_COUNT + 1];
        for (idx, &n) in numbers.iter().enumerate() {
            slots[n as usize] = Some(idx as u8);
        }
        Self { numbers, slots }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// True if `number` has not been taken yet
    pub fn contains(&self, number: u8) -> bool {
        self.slot(number).is_some()
    }

    /// Remove a specific number. Returns false if it was not in the pouch.
    pub fn take(&mut self, number: u8) -> bool {
        let Some(idx) = self.slot(number) else {
            return false;
        };
        let idx = idx as usize;
        self.numbers.swap_remove(idx);
        self.slots[number as usize] = None;
        // The former last element now lives at `idx`
        if let Some(&moved) = self.numbers.get(idx) {
            self.slots[moved as usize] = Some(idx as u8);
        }
        true
    }

    /// Remove and return a uniformly random number, or None when empty
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u8> {
        if self.numbers.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.numbers.len());
        let number = self.numbers[idx];
        self.take(number);
        Some(number)
    }

    fn slot(&self, number: u8) -> Option<u8> {
        if in_range(number) {
            self.slots[number as usize]
        } else {
            None
        }
    }
}
