//! Notification infrastructure module
//!
//! Desktop notifications through notify-rust.

mod notify_rust;

pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::DesktopNotifier;

/// Create the desktop notifier for the current platform
pub fn create_notifier() -> Box<dyn DesktopNotifier> {
    Box::new(NotifyRustNotifier::new())
}
