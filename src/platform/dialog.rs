//! Line-based confirmation dialog

use std::io::{BufRead, Write};

use crate::sim::{ConfirmDialog, Confirmation};

/// Prints the prompt and reads one `y`/`N` line. Anything other than an
/// explicit yes cancels, including EOF and read errors.
pub struct LineDialog<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmDialog for LineDialog<R, W> {
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        if write!(self.output, "{prompt} [y/N] ")
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return Confirmation::Cancelled;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(n) if n > 0 => match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => Confirmation::Confirmed,
                _ => Confirmation::Cancelled,
            },
            Ok(_) => Confirmation::Cancelled,
            Err(e) => {
                log::warn!("confirmation read failed: {e}");
                Confirmation::Cancelled
            }
        }
    }
}
