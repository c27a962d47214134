//! Thread-safe history store

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::error::HistoryError;

use super::collection::{ClipboardHistory, InsertOutcome};
use super::entry::ClipboardEntry;

/// Shared handle to a [`ClipboardHistory`].
///
/// Clones share the same collection. Writers are exclusive; readers run
/// concurrently and always see a fully applied state. Locks are held only for
/// the duration of a single call, never across an await point or a callback.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    inner: Arc<RwLock<ClipboardHistory>>,
}

impl HistoryStore {
    /// Create an empty store holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ClipboardHistory::new(capacity))),
        }
    }

    // Every mutation is a single VecDeque call, so a poisoned lock still
    // guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, ClipboardHistory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClipboardHistory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Record an observation (refresh-and-move-to-front or prepend-and-evict)
    pub fn insert(&self, entry: ClipboardEntry) -> InsertOutcome {
        self.write().insert(entry)
    }

    /// Point-in-time snapshot, newest first
    pub fn list(&self) -> Vec<ClipboardEntry> {
        self.read().to_vec()
    }

    /// Copy of the entry at `index`
    pub fn get(&self, index: usize) -> Option<ClipboardEntry> {
        self.read().get(index).cloned()
    }

    /// Empty the store
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Remove the entry at `index`; the store is untouched on error
    pub fn delete_at(&self, index: usize) -> Result<ClipboardEntry, HistoryError> {
        self.write().delete_at(index)
    }
}
