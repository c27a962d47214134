//! Domain error types

use thiserror::Error;

/// Error when parsing a polling interval string
#[derive(Debug, Clone, Error)]
#[error("Invalid interval: \"{input}\". Expected format: <number>ms, <number>s, <number>m or a combination (e.g., 500ms, 1s, 1s500ms), at least 10ms")]
pub struct IntervalParseError {
    pub input: String,
}

/// Error when an unknown clipboard backend is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: arboard, wayland, memory")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Errors raised by history mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("index out of range: {index} (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
