//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

/// Cross-platform clipboard adapter using arboard.
///
/// One native handle is opened lazily and reused for every call; on X11 the
/// handle also serves the selection for text this process copied.
#[derive(Clone, Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the shared native handle, opening it on first use
    fn with_handle<T>(
        handle: &Mutex<Option<arboard::Clipboard>>,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;
            debug!("opened native clipboard handle");
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => f(clipboard),
            None => Err(ClipboardError::ClipboardUnavailable(
                "clipboard handle missing".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        let handle = Arc::clone(&self.handle);

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            Self::with_handle(&handle, |clipboard| match clipboard.get_text() {
                Ok(text) => Ok(text),
                // Empty clipboard or non-text content
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
            })
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        let handle = Arc::clone(&self.handle);

        tokio::task::spawn_blocking(move || {
            Self::with_handle(&handle, |clipboard| {
                clipboard
                    .set_text(text)
                    .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}
