//! CLI presenter for output formatting

use chrono::{DateTime, Local, Utc};
use colored::*;

use crate::domain::history::ClipboardEntry;

/// Characters of content shown in one history line
const PREVIEW_CHARS: usize = 50;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print monitor status
    pub fn monitor_status(&self, state: &str) {
        eprintln!("{} Monitor: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list and status)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a newly observed entry while monitoring
    pub fn new_entry(&self, entry: &ClipboardEntry) {
        println!(
            "{} {} {}",
            "+".green(),
            format_time(entry.observed_at()).dimmed(),
            preview(entry.content())
        );
    }

    /// Print one history line: index, local time and a single-line preview
    pub fn history_entry(&self, index: usize, entry: &ClipboardEntry) {
        println!(
            "{} {} {}",
            format!("{:>3}", index).cyan(),
            format_time(entry.observed_at()).dimmed(),
            preview(entry.content())
        );
    }
}

/// Observation time in the local zone
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Single-line preview of `content`, truncated to [`PREVIEW_CHARS`]
pub fn preview(content: &str) -> String {
    let flat: String = content
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let flat = flat.trim();

    if flat.chars().count() <= PREVIEW_CHARS {
        flat.to_string()
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}
