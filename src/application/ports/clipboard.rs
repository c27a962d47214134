//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install wl-clipboard.")]
    ToolNotFound(&'static str),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}

/// Port for clipboard access.
///
/// Both calls must be cheap enough to issue on every polling tick.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Returns
    /// The text (empty when the clipboard holds no text), or an error
    async fn read(&self) -> Result<String, ClipboardError>;

    /// Copy text to the system clipboard.
    ///
    /// # Arguments
    /// * `text` - The text to copy
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.as_ref().read().await
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().copy(text).await
    }
}
