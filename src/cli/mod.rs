//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! the foreground monitor runner and the IPC client commands.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod history_cmd;
pub mod ipc;
pub mod monitor_app;
pub mod pid_file;
pub mod presenter;
pub mod runtime;
pub mod signals;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, HistoryAction, MonitorOptions};
pub use monitor_app::run_monitor;
pub use presenter::Presenter;
