//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard monitor use case, the change listener slot and
//! the trait definitions for external system interactions.

pub mod monitor;
pub mod notifier;
pub mod ports;

// Re-export use cases
pub use monitor::{ClipboardMonitor, MonitorConfig, MonitorError};
pub use notifier::{ChangeListener, ChangeNotifier};
