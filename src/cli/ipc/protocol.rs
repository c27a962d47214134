//! Wire format for monitor control
//!
//! Each connection carries one JSON request line and one JSON response line.

use serde::{Deserialize, Serialize};

use crate::domain::history::ClipboardEntry;
use crate::domain::monitor::MonitorState;

/// Request sent by a client command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum IpcRequest {
    /// Snapshot of the history, newest first
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },
    Clear,
    Delete { index: usize },
    /// Copy a history entry back to the clipboard
    Copy { index: usize },
    /// Copy arbitrary text to the clipboard
    CopyText { text: String },
    Status,
}

/// Response returned by the monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IpcResponse {
    Ok,
    Entries {
        entries: Vec<ClipboardEntry>,
    },
    State {
        state: MonitorState,
        entries: usize,
        capacity: usize,
        interval: String,
    },
    Error {
        message: String,
    },
}

impl IpcResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Encode a message as one line, newline included
pub fn encode_line<T: Serialize>(message: &T) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

/// Decode one line, ignoring surrounding whitespace
pub fn decode_line<'a, T: Deserialize<'a>>(line: &'a str) -> serde_json::Result<T> {
    serde_json::from_str(line.trim())
}
