//! Application configuration.
//!
//! Values come from three layers, highest first: command-line flags, an
//! optional TOML file, built-in defaults.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_REPLY_DELAY_MS, GameMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Resolved settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Mode selected at startup.
    mode: GameMode,

    /// Pause before the computer answers, in milliseconds.
    computer_delay_ms: u64,

    /// Seed for the computer's random moves. OS entropy when absent.
    seed: Option<u64>,

    /// Where tracing output goes.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_delay_ms: DEFAULT_REPLY_DELAY_MS,
            seed: None,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides file values with any flags given on the command line.
    #[instrument(skip(self, cli))]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(delay) = cli.delay_ms {
            self.computer_delay_ms = delay;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }

    /// Loads the file named by `cli` and applies its flags on top.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self::load(&cli.config)?.with_cli(cli))
    }

    /// The computer's reply delay.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
