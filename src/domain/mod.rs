//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;
pub mod monitor;

// Re-export common types
pub use config::{AppConfig, ClipboardBackend};
pub use error::*;
pub use history::{ClipboardEntry, ClipboardHistory, HistoryStore, InsertOutcome};
pub use monitor::{MonitorSession, MonitorState, PollInterval};
