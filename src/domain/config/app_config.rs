//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, IntervalParseError, InvalidBackendError};
use crate::domain::history::DEFAULT_MAX_HISTORY;
use crate::domain::monitor::PollInterval;

use super::backend::ClipboardBackend;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub max_history: Option<usize>,
    pub interval: Option<String>,
    pub backend: Option<String>,
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            max_history: Some(DEFAULT_MAX_HISTORY),
            interval: Some(PollInterval::default().to_string()),
            backend: Some(ClipboardBackend::default().to_string()),
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            max_history: other.max_history.or(self.max_history),
            interval: other.interval.or(self.interval),
            backend: other.backend.or(self.backend),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get max_history, or the default if not set.
    /// Zero is rejected since a history must hold at least one entry.
    pub fn max_history(&self) -> Result<usize, ConfigError> {
        match self.max_history {
            Some(0) => Err(ConfigError::ValidationError {
                key: "max_history".to_string(),
                message: "must be at least 1".to_string(),
            }),
            Some(n) => Ok(n),
            None => Ok(DEFAULT_MAX_HISTORY),
        }
    }

    /// Parse interval, or the default if not set
    pub fn interval(&self) -> Result<PollInterval, IntervalParseError> {
        match self.interval.as_deref() {
            Some(s) => s.parse(),
            None => Ok(PollInterval::default()),
        }
    }

    /// Parse backend, or the default if not set
    pub fn backend(&self) -> Result<ClipboardBackend, InvalidBackendError> {
        match self.backend.as_deref() {
            Some(s) => s.parse(),
            None => Ok(ClipboardBackend::default()),
        }
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}
