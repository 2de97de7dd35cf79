//! Confirmed game reset

use super::state::GameState;

/// Prompt shown before wiping the game
pub const RESET_PROMPT: &str = "Restart the game? All called numbers will be cleared.";

/// Answer from the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Asks the user a yes/no question. Must resolve before returning.
pub trait ConfirmDialog {
    fn confirm(&mut self, prompt: &str) -> Confirmation;
}

impl<F> ConfirmDialog for F
where
    F: FnMut(&str) -> Confirmation,
{
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Reset,
    Cancelled,
}

/// Ask for confirmation, then clear the whole game in one step
pub fn request_reset(state: &mut GameState, dialog: &mut impl ConfirmDialog) -> ResetOutcome {
    match dialog.confirm(RESET_PROMPT) {
        Confirmation::Confirmed => {
            log::info!("Game reset after {} calls", state.called_count());
            state.reset();
            ResetOutcome::Reset
        }
        Confirmation::Cancelled => {
            log::debug!("reset cancelled");
            ResetOutcome::Cancelled
        }
    }
}
