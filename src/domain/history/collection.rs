//! Bounded most-recently-used clipboard history

use std::collections::VecDeque;

use crate::domain::error::HistoryError;

use super::entry::ClipboardEntry;

/// Default number of entries kept
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// What an insert did to the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New content was prepended; entries pushed past capacity were dropped
    Added { evicted: Vec<ClipboardEntry> },
    /// Existing content was refreshed and moved to the front
    Refreshed { previous_index: usize },
}

/// Ordered, deduplicated, capacity-bounded history.
///
/// Index 0 is always the most recently observed content. Content is unique
/// across entries; re-observing content moves it to the front instead of
/// adding a duplicate. Not synchronized, see [`super::HistoryStore`].
#[derive(Debug, Clone)]
pub struct ClipboardHistory {
    entries: VecDeque<ClipboardEntry>,
    capacity: usize,
}

impl ClipboardHistory {
    /// Create an empty history holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_MAX_HISTORY)),
            capacity,
        }
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, newest first
    pub fn get(&self, index: usize) -> Option<&ClipboardEntry> {
        self.entries.get(index)
    }

    /// Iterate entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &ClipboardEntry> {
        self.entries.iter()
    }

    /// Record an observation.
    ///
    /// Known content gets its timestamp refreshed and moves to the front.
    /// New content is prepended, then the tail is trimmed back to capacity.
    pub fn insert(&mut self, entry: ClipboardEntry) -> InsertOutcome {
        if let Some(index) = self
            .entries
            .iter()
            .position(|existing| existing.content() == entry.content())
        {
            if let Some(mut existing) = self.entries.remove(index) {
                existing.refresh(entry.observed_at());
                self.entries.push_front(existing);
            }
            return InsertOutcome::Refreshed {
                previous_index: index,
            };
        }

        self.entries.push_front(entry);
        let evicted = if self.entries.len() > self.capacity {
            self.entries.split_off(self.capacity).into_iter().collect()
        } else {
            Vec::new()
        };
        InsertOutcome::Added { evicted }
    }

    /// Remove the entry at `index`, shifting later entries forward
    pub fn delete_at(&mut self, index: usize) -> Result<ClipboardEntry, HistoryError> {
        let len = self.entries.len();
        self.entries
            .remove(index)
            .ok_or(HistoryError::OutOfRange { index, len })
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copy of all entries, newest first
    pub fn to_vec(&self) -> Vec<ClipboardEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for ClipboardHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
