//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side the human plays. The engine takes the other one.
    #[serde(default = "default_human")]
    human: Player,

    /// Show the value of every legal move before the human chooses.
    #[serde(default)]
    show_hints: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            show_hints: false,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human, show_hints = config.show_hints, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn apply_overrides(mut self, human: Option<Player>, show_hints: bool) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.show_hints |= show_hints;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PlayConfig::from_toml("").unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_overrides_replace_side_and_enable_hints() {
        let config = PlayConfig::default().apply_overrides(Some(Player::O), true);
        assert_eq!(*config.human(), Player::O);
        assert!(*config.show_hints());
    }

    #[test]
    fn test_overrides_keep_file_values() {
        let config = PlayConfig::from_toml("human = \"O\"\nshow_hints = true").unwrap();
        let config = config.apply_overrides(None, false);
        assert_eq!(*config.human(), Player::O);
        assert!(*config.show_hints());
    }

    #[test]
    fn test_bad_side_is_error() {
        let err = PlayConfig::from_toml("human = \"Z\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
