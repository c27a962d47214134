//! Clipboard history domain

mod collection;
mod entry;
mod store;

pub use collection::{ClipboardHistory, InsertOutcome, DEFAULT_MAX_HISTORY};
pub use entry::ClipboardEntry;
pub use store::HistoryStore;
