//! Draw-state engine
//!
//! All game rules live here. This module is synchronous and deterministic:
//! - Seeded RNG only
//! - Time enters only through timer handles handed to the debouncer
//! - No rendering or platform dependencies

pub mod debounce;
pub mod draw;
pub mod pouch;
pub mod queue;
pub mod reset;
pub mod state;

pub use debounce::{SelectionState, TapDebouncer, TapOutcome, TimerHandle, TimerHost};
pub use draw::{DrawOutcome, DrawSource, call_number, draw};
pub use pouch::Pouch;
pub use queue::{Enqueue, ManualQueue};
pub use reset::{ConfirmDialog, Confirmation, RESET_PROMPT, ResetOutcome, request_reset};
pub use state::{GamePhase, GameState, Snapshot};
