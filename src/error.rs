//! Error types
//!
//! Every engine error is recoverable: the game stays in a valid state and the
//! front-end decides how to surface the message.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the draw engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallerError {
    /// Every number in the range has already been called
    #[error("All numbers have been called!")]
    ExhaustedRange,

    /// Number outside the board
    #[error("{0} is not on the board (1-90)")]
    OutOfRange(u8),

    /// Number was called earlier in this game
    #[error("{0} has already been called")]
    AlreadyCalled(u8),
}

/// Errors loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
