//! Clipboard entry value object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed clipboard value and the time it was last observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    content: String,
    observed_at: DateTime<Utc>,
}

impl ClipboardEntry {
    /// Create an entry observed at the given instant
    pub fn new(content: impl Into<String>, observed_at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            observed_at,
        }
    }

    /// Create an entry observed now
    pub fn observed_now(content: impl Into<String>) -> Self {
        Self::new(content, Utc::now())
    }

    /// The clipboard text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When this content was last observed
    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    /// Consume the entry, returning its content
    pub fn into_content(self) -> String {
        self.content
    }

    pub(crate) fn refresh(&mut self, observed_at: DateTime<Utc>) {
        self.observed_at = observed_at;
    }
}
