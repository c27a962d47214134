//! Runtime directory for the socket and PID file

use std::fs::DirBuilder;
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

use nix::unistd::getuid;

/// `$XDG_RUNTIME_DIR`, or a per-user directory under the temp dir when unset
/// or empty
pub fn runtime_dir() -> PathBuf {
    std::env::var_os("XDG_RUNTIME_DIR")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(fallback_dir)
}

/// `clipmon-<uid>` in the temp dir
fn fallback_dir() -> PathBuf {
    std::env::temp_dir().join(format!("clipmon-{}", getuid().as_raw()))
}

/// `file_name` inside [`runtime_dir`]
pub fn runtime_path(file_name: &str) -> PathBuf {
    runtime_dir().join(file_name)
}

/// Create `dir` and missing parents; new directories are owner-only
pub fn create_private_dir(dir: &Path) -> io::Result<()> {
    DirBuilder::new().recursive(true).mode(0o700).create(dir)
}
