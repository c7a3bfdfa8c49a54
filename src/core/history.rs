//! Conversion history
//!
//! A newest-first sequence of snapshots, capped at [`MAX_HISTORY_SIZE`].
//! Entries are only ever prepended or cleared, never reordered.

pub mod storage;

use crate::shared::types::{ConversionValues, HistoryEntry};

pub use storage::{open_or_in_memory, InMemoryStorage, RedbStorage, Storage};

/// Maximum number of history entries kept
pub const MAX_HISTORY_SIZE: usize = 50;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries (newest first), dropping any overflow
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_SIZE);
        Self { entries }
    }

    /// Prepend a snapshot, evicting the oldest entries beyond capacity
    pub fn append(&mut self, values: ConversionValues) -> &HistoryEntry {
        self.entries.insert(0, HistoryEntry::new(values));
        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.truncate(MAX_HISTORY_SIZE);
        }
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(biswa: f64) -> ConversionValues {
        ConversionValues {
            biswa,
            ..ConversionValues::default()
        }
    }

    #[test]
    fn test_append_is_newest_first() {
        let mut history = HistoryStore::new();
        history.append(values(1.0));
        history.append(values(2.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].values.biswa, 2.0);
        assert_eq!(history.entries()[1].values.biswa, 1.0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = HistoryStore::new();
        for i in 0..60 {
            history.append(values(i as f64));
        }

        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        let kept: Vec<f64> = history.entries().iter().map(|e| e.values.biswa).collect();
        let expected: Vec<f64> = (10..60).rev().map(|i| i as f64).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStore::new();
        history.append(values(1.0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_append_returns_new_entry() {
        let mut history = HistoryStore::new();
        let id = history.append(values(3.0)).id.clone();
        assert_eq!(history.entries()[0].id, id);
        history.append(values(4.0));
        assert_eq!(history.entries()[1].id, id);
    }

    #[test]
    fn test_from_entries_truncates_overflow() {
        let entries = (0..70).map(|i| HistoryEntry::new(values(i as f64))).collect();
        let history = HistoryStore::from_entries(entries);
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        assert_eq!(history.entries()[0].values.biswa, 0.0);
    }
}
