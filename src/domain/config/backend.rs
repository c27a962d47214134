//! Clipboard backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// Which clipboard adapter the monitor samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipboardBackend {
    /// Cross-platform native clipboard via arboard
    #[default]
    Arboard,
    /// wl-paste / wl-copy subprocesses
    Wayland,
    /// Process-local clipboard, for headless use
    Memory,
}

impl ClipboardBackend {
    /// All backends, in display order
    pub const ALL: [ClipboardBackend; 3] = [Self::Arboard, Self::Wayland, Self::Memory];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for ClipboardBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wayland" | "wl" => Ok(Self::Wayland),
            "memory" => Ok(Self::Memory),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
