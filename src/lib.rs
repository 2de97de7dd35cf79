//! Tambola Caller - a single-screen number caller
//!
//! Core modules:
//! - `sim`: Draw-state engine (called set, manual queue, tap debouncer, reset)
//! - `platform`: Timer and confirmation-dialog collaborators
//! - `caller`: Facade wiring user intents into the engine
//! - `ui`: Plain-text board rendering for the terminal front-end
//! - `settings`: JSON-backed tunables

pub mod caller;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use caller::Caller;
pub use error::{CallerError, SettingsError};
pub use settings::{Settings, TapMode};

/// Game configuration constants
pub mod consts {
    /// Lowest callable number
    pub const NUMBER_MIN: u8 = 1;
    /// Highest callable number
    pub const NUMBER_MAX: u8 = 90;
    /// Size of the number range
    pub const NUMBER_COUNT: usize = NUMBER_MAX as usize;

    /// Taps on the same cell needed to queue it
    pub const TAPS_TO_QUEUE: u8 = 3;
    /// Window (ms) after each tap before the sequence is forgotten
    pub const TAP_WINDOW_MS: u64 = 500;

    /// Board cells per row
    pub const BOARD_COLUMNS: usize = 10;
}

/// Returns true if `number` lies in the callable range
#[inline]
pub fn in_range(number: u8) -> bool {
    (consts::NUMBER_MIN..=consts::NUMBER_MAX).contains(&number)
}
