//! Platform abstraction layer
//!
//! Collaborators the engine talks to but does not own:
//! - Time (virtual-clock timer queue)
//! - Confirmation prompts

pub mod dialog;
pub mod timer;

pub use dialog::LineDialog;
pub use timer::TimerQueue;
