//! Process-local clipboard adapter
//!
//! Holds the clipboard text in memory. Used for headless runs, where the
//! only writer is the `copy` command, and by the integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

#[derive(Debug, Default)]
struct MemoryState {
    text: Mutex<String>,
    reads: AtomicUsize,
    failing_reads: AtomicUsize,
}

/// In-memory clipboard; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Arc<MemoryState>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard already holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        let clipboard = Self::new();
        clipboard.set_text(text);
        clipboard
    }

    /// Replace the clipboard text, as another application would
    pub fn set_text(&self, text: impl Into<String>) {
        *self.state.text.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }

    /// Current clipboard text
    pub fn text(&self) -> String {
        self.state
            .text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of reads served so far, including failed ones
    pub fn read_count(&self) -> usize {
        self.state.reads.load(Ordering::SeqCst)
    }

    /// Make the next `count` reads fail
    pub fn fail_next_reads(&self, count: usize) {
        self.state.failing_reads.store(count, Ordering::SeqCst);
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.state.reads.fetch_add(1, Ordering::SeqCst);
        let fail = self
            .state
            .failing_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(ClipboardError::ReadFailed(
                "simulated read failure".to_string(),
            ));
        }
        Ok(self.text())
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.set_text(text);
        Ok(())
    }
}
