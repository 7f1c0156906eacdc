//! Engine configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::VotingError;

/// Configuration for the voting engine.
///
/// Can be loaded from a TOML file via [`VotingConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file is a valid config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Deadline applied to elections whose caller has no better estimate of
    /// round length, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,

    /// Capacity of the outbound broadcast queue the host drains.
    #[serde(default = "default_outbound_capacity")]
    pub outbound_capacity: usize,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_timeout_ms() -> u64 {
    2_000
}

fn default_outbound_capacity() -> usize {
    64
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: default_timeout_ms(),
            outbound_capacity: default_outbound_capacity(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

impl VotingConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, VotingError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The default election deadline as a [`Duration`].
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}
