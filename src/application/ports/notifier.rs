//! Desktop notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait DesktopNotifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl DesktopNotifier for Box<dyn DesktopNotifier> {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
        self.as_ref().notify(title, message).await
    }
}
