//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary),
//! the wl-clipboard tools on Wayland, or an in-process buffer.

mod arboard;
mod memory;
mod wayland;

pub use arboard::ArboardClipboard;
pub use memory::MemoryClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::Clipboard;
use crate::domain::config::ClipboardBackend;

/// Create the clipboard adapter for `backend`
pub fn create_clipboard(backend: ClipboardBackend) -> Box<dyn Clipboard> {
    match backend {
        ClipboardBackend::Arboard => Box::new(ArboardClipboard::new()),
        ClipboardBackend::Wayland => Box::new(WaylandClipboard::new()),
        ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
    }
}
