//! Change listener slot

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::history::ClipboardEntry;

/// Callback invoked once per accepted clipboard change
pub type ChangeListener = Arc<dyn Fn(&ClipboardEntry) + Send + Sync>;

/// Holds at most one change listener.
///
/// Registering replaces the previous listener. The slot lock is released
/// before the listener runs, so a listener may re-register or query the
/// history freely.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: RwLock<Option<ChangeListener>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`, replacing any previous one
    pub fn set<F>(&self, listener: F)
    where
        F: Fn(&ClipboardEntry) + Send + Sync + 'static,
    {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(listener));
    }

    /// Remove the registered listener, if any
    pub fn clear(&self) {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Deliver `entry` to the current listener.
    ///
    /// Returns false when no listener is registered; the event is dropped.
    pub fn notify(&self, entry: &ClipboardEntry) -> bool {
        let listener = self
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match listener {
            Some(listener) => {
                listener(entry);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn notify_without_listener_is_dropped() {
        let notifier = ChangeNotifier::new();
        assert!(!notifier.notify(&ClipboardEntry::observed_now("x")));
    }

    #[test]
    fn listener_receives_entry() {
        let notifier = ChangeNotifier::new();
        let received = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&received);
        notifier.set(move |entry: &ClipboardEntry| {
            *sink.lock().unwrap() = Some(entry.content().to_string());
        });

        assert!(notifier.notify(&ClipboardEntry::observed_now("test callback")));
        assert_eq!(received.lock().unwrap().as_deref(), Some("test callback"));
    }

    #[test]
    fn last_registration_wins() {
        let notifier = ChangeNotifier::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        notifier.set(move |_: &ClipboardEntry| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        notifier.set(move |_: &ClipboardEntry| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify(&ClipboardEntry::observed_now("x"));

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_removes_listener() {
        let notifier = ChangeNotifier::new();
        notifier.set(|_: &ClipboardEntry| {});
        assert!(notifier.has_listener());
        notifier.clear();
        assert!(!notifier.has_listener());
    }

    #[test]
    fn listener_may_reregister_without_deadlock() {
        let notifier = Arc::new(ChangeNotifier::new());
        let inner = Arc::clone(&notifier);
        notifier.set(move |_: &ClipboardEntry| {
            inner.clear();
        });

        assert!(notifier.notify(&ClipboardEntry::observed_now("x")));
        assert!(!notifier.has_listener());
    }
}
