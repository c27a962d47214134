//! Clipboard monitor use case
//!
//! Polls a [`Clipboard`] on a fixed interval, records every genuine change in
//! a [`HistoryStore`] and forwards it to the registered change listener.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::error::HistoryError;
use crate::domain::history::{ClipboardEntry, HistoryStore, InsertOutcome, DEFAULT_MAX_HISTORY};
use crate::domain::monitor::{InvalidStateTransition, MonitorSession, MonitorState, PollInterval};

use super::notifier::ChangeNotifier;
use super::ports::{Clipboard, ClipboardError};

/// Consecutive read failures between escalated log lines
const READ_FAILURE_LOG_EVERY: u32 = 10;

/// Errors from the monitor use case
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Polling stopped because the cancellation token fired
    #[error("Monitoring cancelled")]
    Cancelled,

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

impl MonitorError {
    /// True for the normal shutdown outcome
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Configuration for the monitor
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Maximum number of history entries
    pub max_history: usize,
    /// Sampling period
    pub interval: PollInterval,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            interval: PollInterval::default(),
        }
    }
}

/// Clipboard monitor use case
pub struct ClipboardMonitor<C>
where
    C: Clipboard,
{
    clipboard: C,
    history: HistoryStore,
    notifier: ChangeNotifier,
    session: Mutex<MonitorSession>,
    interval: PollInterval,
}

impl<C> ClipboardMonitor<C>
where
    C: Clipboard,
{
    /// Create an idle monitor with an empty history
    pub fn new(clipboard: C, config: MonitorConfig) -> Self {
        Self {
            clipboard,
            history: HistoryStore::new(config.max_history),
            notifier: ChangeNotifier::new(),
            session: Mutex::new(MonitorSession::new()),
            interval: config.interval,
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, MonitorSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get current monitor state
    pub fn state(&self) -> MonitorState {
        self.lock_session().state()
    }

    pub fn interval(&self) -> PollInterval {
        self.interval
    }

    /// Shared handle to the history
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Register the change listener, replacing any previous one
    pub fn set_change_listener<F>(&self, listener: F)
    where
        F: Fn(&ClipboardEntry) + Send + Sync + 'static,
    {
        self.notifier.set(listener);
    }

    pub fn clear_change_listener(&self) {
        self.notifier.clear();
    }

    /// Snapshot of the history, newest first
    pub fn list_history(&self) -> Vec<ClipboardEntry> {
        self.history.list()
    }

    pub fn clear_history(&self) {
        self.history.clear();
        debug!("history cleared");
    }

    /// Remove the entry at `index`
    pub fn delete_history_entry(&self, index: usize) -> Result<ClipboardEntry, HistoryError> {
        let removed = self.history.delete_at(index)?;
        debug!(index, "history entry deleted");
        Ok(removed)
    }

    /// Write `text` to the clipboard
    pub async fn copy_to_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.copy(text).await
    }

    /// Write the content of the entry at `index` back to the clipboard
    pub async fn copy_history_entry(&self, index: usize) -> Result<ClipboardEntry, MonitorError> {
        let entry = self.history.get(index).ok_or(HistoryError::OutOfRange {
            index,
            len: self.history.len(),
        })?;
        self.clipboard.copy(entry.content()).await?;
        Ok(entry)
    }

    /// Poll the clipboard until `cancel` fires.
    ///
    /// Seeds the history with the current clipboard content, then samples
    /// once per interval. Read failures skip the tick. Returns
    /// `Err(MonitorError::Cancelled)` on shutdown; a monitor can only be
    /// started once.
    pub async fn start(&self, cancel: CancellationToken) -> Result<(), MonitorError> {
        self.lock_session().start()?;
        info!(
            interval = %self.interval,
            capacity = self.history.capacity(),
            "clipboard monitor started"
        );

        let result = self.poll(&cancel).await;

        if let Err(e) = self.lock_session().stop() {
            warn!(error = %e, "monitor session already stopped");
        }
        info!("clipboard monitor stopped");
        result
    }

    async fn poll(&self, cancel: &CancellationToken) -> Result<(), MonitorError> {
        if cancel.is_cancelled() {
            return Err(MonitorError::Cancelled);
        }

        // Only this loop reads or writes the cursor.
        let mut last_content: Option<String> = None;
        let mut failures: u32 = 0;

        match self.sample(cancel).await? {
            Ok(content) if !content.is_empty() => {
                self.history.insert(ClipboardEntry::observed_now(content.as_str()));
                debug!(bytes = content.len(), "seeded history from current clipboard");
                last_content = Some(content);
            }
            Ok(_) => {}
            Err(e) => {
                failures += 1;
                log_read_failure(failures, &e);
            }
        }

        let period = self.interval.as_std();
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(MonitorError::Cancelled),
                _ = ticker.tick() => {}
            }

            match self.sample(cancel).await? {
                Ok(content) => {
                    failures = 0;
                    if let Some(entry) = self.accept(&mut last_content, content) {
                        // The store lock is already released here.
                        self.notifier.notify(&entry);
                    }
                }
                Err(e) => {
                    failures = failures.saturating_add(1);
                    log_read_failure(failures, &e);
                }
            }
        }
    }

    /// Read the clipboard, giving up as soon as `cancel` fires
    async fn sample(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Result<String, ClipboardError>, MonitorError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(MonitorError::Cancelled),
            read = self.clipboard.read() => Ok(read),
        }
    }

    /// Record `content` if it is a change; returns the accepted entry
    fn accept(&self, last_content: &mut Option<String>, content: String) -> Option<ClipboardEntry> {
        if content.is_empty() || last_content.as_deref() == Some(content.as_str()) {
            return None;
        }

        let entry = ClipboardEntry::observed_now(content.as_str());
        *last_content = Some(content);

        match self.history.insert(entry.clone()) {
            InsertOutcome::Added { evicted } => {
                debug!(evicted = evicted.len(), "new clipboard entry");
            }
            InsertOutcome::Refreshed { previous_index } => {
                debug!(previous_index, "clipboard entry moved to front");
            }
        }
        Some(entry)
    }
}

fn log_read_failure(failures: u32, error: &ClipboardError) {
    if failures == 1 || failures % READ_FAILURE_LOG_EVERY == 0 {
        warn!(failures, error = %error, "failed to read clipboard");
    } else {
        debug!(failures, error = %error, "failed to read clipboard");
    }
}
