//! PID file management for the monitor process

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use nix::sys::signal::kill;
use nix::unistd::Pid;
use tracing::debug;

use super::runtime::{create_private_dir, runtime_path};

const PID_FILE_NAME: &str = "clipmon.pid";

/// PID file guarding against a second monitor
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// PID file in the runtime directory
    pub fn new() -> Self {
        Self {
            path: runtime_path(PID_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PID of a live monitor owning the file, if any.
    ///
    /// A file naming a dead process is removed.
    pub fn is_running(&self) -> Option<u32> {
        let mut file = File::open(&self.path).ok()?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).ok()?;

        let pid: u32 = contents.trim().parse().ok()?;
        let raw = i32::try_from(pid).ok()?;

        // Signal `None` only checks that the process exists
        match kill(Pid::from_raw(raw), None) {
            Ok(()) => Some(pid),
            Err(nix::errno::Errno::ESRCH) => {
                debug!(pid, path = %self.path.display(), "removing stale PID file");
                let _ = fs::remove_file(&self.path);
                None
            }
            // EPERM: alive but owned by someone else
            Err(nix::errno::Errno::EPERM) => Some(pid),
            Err(_) => None,
        }
    }

    /// Acquire the PID file (fails if another monitor is running)
    pub fn acquire(&self) -> Result<(), PidFileError> {
        if let Some(pid) = self.is_running() {
            return Err(PidFileError::AlreadyRunning(pid));
        }

        if let Some(parent) = self.path.parent() {
            create_private_dir(parent).map_err(|e| {
                PidFileError::WriteFailed(format!("Failed to create runtime dir: {}", e))
            })?;
        }

        let mut file = File::create(&self.path).map_err(|e| {
            PidFileError::WriteFailed(format!("Failed to create PID file: {}", e))
        })?;

        write!(file, "{}", process::id())
            .map_err(|e| PidFileError::WriteFailed(format!("Failed to write PID: {}", e)))?;

        Ok(())
    }

    /// Release the PID file
    pub fn release(&self) -> Result<(), PidFileError> {
        if self.owned_by_us() {
            fs::remove_file(&self.path).map_err(|e| {
                PidFileError::RemoveFailed(format!("Failed to remove PID file: {}", e))
            })?;
        }
        Ok(())
    }

    fn owned_by_us(&self) -> bool {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok())
            == Some(process::id())
    }
}

impl Default for PidFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

/// PID file errors
#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    #[error("Another monitor is already running (PID: {0})")]
    AlreadyRunning(u32),

    #[error("Failed to write PID file: {0}")]
    WriteFailed(String),

    #[error("Failed to remove PID file: {0}")]
    RemoveFailed(String),
}
