//! Wayland clipboard adapter using wl-paste / wl-copy

use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

const WL_PASTE: &str = "wl-paste";
const WL_COPY: &str = "wl-copy";

/// Upper bound for one wl-paste call; a frozen selection owner never answers
const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Wayland clipboard adapter using the wl-clipboard tools
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_error(
    tool: &'static str,
    e: io::Error,
    wrap: fn(String) -> ClipboardError,
) -> ClipboardError {
    if e.kind() == io::ErrorKind::NotFound {
        ClipboardError::ToolNotFound(tool)
    } else {
        wrap(e.to_string())
    }
}

/// Run `command` to completion, killing it once `limit` has passed
async fn output_within(
    tool: &'static str,
    mut command: Command,
    limit: Duration,
) -> Result<Output, ClipboardError> {
    command.stdin(Stdio::null()).kill_on_drop(true);
    match timeout(limit, command.output()).await {
        Ok(output) => output.map_err(|e| spawn_error(tool, e, ClipboardError::ReadFailed)),
        Err(_) => Err(ClipboardError::ReadFailed(format!(
            "{} did not answer within {:?}",
            tool, limit
        ))),
    }
}

/// wl-paste exits non-zero with this message when nothing is copied
fn is_empty_selection(stderr: &[u8]) -> bool {
    let stderr = String::from_utf8_lossy(stderr).to_lowercase();
    stderr.contains("nothing is copied") || stderr.contains("no selection")
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let mut command = Command::new(WL_PASTE);
        command.args(["--no-newline", "--type", "text"]);
        let output = output_within(WL_PASTE, command, READ_TIMEOUT).await?;

        if !output.status.success() {
            if is_empty_selection(&output.stderr) {
                debug!("wl-paste reports an empty selection");
                return Ok(String::new());
            }
            return Err(ClipboardError::ReadFailed(format!(
                "wl-paste exited with status: {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(WL_COPY)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn_error(WL_COPY, e, ClipboardError::CopyFailed))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_detected() {
        assert!(is_empty_selection(b"Nothing is copied\n"));
        assert!(is_empty_selection(b"No selection"));
        assert!(!is_empty_selection(b"Failed to connect to a Wayland server"));
    }

    #[test]
    fn missing_tool_maps_to_tool_not_found() {
        let err = spawn_error(
            WL_PASTE,
            io::Error::from(io::ErrorKind::NotFound),
            ClipboardError::ReadFailed,
        );
        assert!(matches!(err, ClipboardError::ToolNotFound("wl-paste")));
    }

    #[tokio::test]
    async fn stalled_tool_times_out() {
        let mut command = Command::new("sleep");
        command.arg("10");

        let started = std::time::Instant::now();
        let err = output_within(WL_PASTE, command, Duration::from_millis(50))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClipboardError::ReadFailed(message) if message.contains("wl-paste")
        ));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn finished_tool_returns_output() {
        let mut command = Command::new("echo");
        command.arg("-n").arg("copied");

        let output = output_within(WL_PASTE, command, Duration::from_secs(5))
            .await
            .unwrap();

        assert!(output.status.success());
        assert_eq!(output.stdout, b"copied");
    }

    #[test]
    fn other_spawn_errors_are_wrapped() {
        let err = spawn_error(
            WL_COPY,
            io::Error::from(io::ErrorKind::PermissionDenied),
            ClipboardError::CopyFailed,
        );
        assert!(matches!(err, ClipboardError::CopyFailed(_)));
    }
}
