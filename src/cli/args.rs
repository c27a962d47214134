//! CLI argument definitions using Clap

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use crate::domain::config::ClipboardBackend;
use crate::domain::monitor::PollInterval;

/// clipmon - clipboard history monitor
#[derive(Parser, Debug)]
#[command(name = "clipmon")]
#[command(version)]
#[command(about = "Watch the clipboard and keep a bounded, deduplicated history")]
#[command(long_about = None)]
pub struct Cli {
    /// Number of entries to keep (at least 1)
    #[arg(short = 'm', long, value_name = "N", value_parser = parse_max_history)]
    pub max_history: Option<usize>,

    /// Polling interval (e.g., 500ms, 1s, 1s500ms)
    #[arg(short = 'i', long, value_name = "TIME")]
    pub interval: Option<String>,

    /// Clipboard backend
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Show a desktop notification for each new entry
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Disable desktop notifications, even if the config file enables them
    #[arg(long, conflicts_with = "notify")]
    pub no_notify: bool,

    /// Do not print new entries while monitoring
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Log monitor activity to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Notification setting given on the command line, if any
    pub fn notify_flag(&self) -> Option<bool> {
        match (self.notify, self.no_notify) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Long names of the monitor-only flags that were given
    fn monitor_flags(&self) -> Vec<&'static str> {
        let given = [
            ("--max-history", self.max_history.is_some()),
            ("--interval", self.interval.is_some()),
            ("--backend", self.backend.is_some()),
            ("--notify", self.notify),
            ("--no-notify", self.no_notify),
            ("--quiet", self.quiet),
        ];
        given
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    /// Reject monitor-only flags combined with a client subcommand
    pub fn check_subcommand_flags(&self) -> Result<(), clap::Error> {
        let flags = self.monitor_flags();
        if self.command.is_none() || flags.is_empty() {
            return Ok(());
        }
        Err(Self::command().error(
            ErrorKind::ArgumentConflict,
            format!(
                "{} only apply when starting the monitor, not with a subcommand",
                flags.join(", ")
            ),
        ))
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query or edit the history of the running monitor
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Put text on the clipboard through the running monitor
    Copy {
        /// Text to copy
        text: String,
    },
    /// Show monitor status
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// History subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// List entries, newest first
    List {
        /// Show at most N entries
        #[arg(short = 'l', long, value_name = "N")]
        limit: Option<usize>,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove every entry
    Clear,
    /// Remove the entry at INDEX (0 is the newest)
    Delete {
        /// Zero-based position
        index: usize,
    },
    /// Copy the entry at INDEX back to the clipboard
    Copy {
        /// Zero-based position
        index: usize,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Arboard,
    Wayland,
    Memory,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Arboard => ClipboardBackend::Arboard,
            BackendArg::Wayland => ClipboardBackend::Wayland,
            BackendArg::Memory => ClipboardBackend::Memory,
        }
    }
}

/// Resolved options for the foreground monitor
#[derive(Debug, Clone)]
pub struct MonitorOptions {
    pub max_history: usize,
    pub interval: PollInterval,
    pub backend: ClipboardBackend,
    pub notify: bool,
    pub quiet: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["max_history", "interval", "backend", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

fn parse_max_history(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
