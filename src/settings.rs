//! Caller settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{TAPS_TO_QUEUE, TAP_WINDOW_MS};
use crate::error::SettingsError;

/// What a completed tap sequence does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TapMode {
    /// Queue the number for the next draw
    #[default]
    Queue,
    /// Call the number immediately
    Call,
}

impl TapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TapMode::Queue => "queue",
            TapMode::Call => "call",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "queue" | "q" => Some(TapMode::Queue),
            "call" | "c" => Some(TapMode::Call),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Time allowed between taps of one sequence
    pub tap_window_ms: u64,
    /// Taps needed to complete a sequence
    pub taps_to_queue: u8,
    pub tap_mode: TapMode,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tap_window_ms: TAP_WINDOW_MS,
            taps_to_queue: TAPS_TO_QUEUE,
            tap_mode: TapMode::Queue,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "TAMBOLA_SETTINGS";

    /// Read and validate a JSON settings file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.taps_to_queue == 0 {
            return Err(SettingsError::Invalid {
                field: "taps_to_queue",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.tap_window_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "tap_window_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
