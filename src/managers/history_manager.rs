//! History Manager for GifSearch.
//!
//! Implements `HistoryManagerTrait` — a bounded, deduplicated,
//! most-recent-first list of past search queries. Session-local only;
//! nothing is persisted.

/// Maximum number of entries the history keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// Trait defining history operations.
pub trait HistoryManagerTrait {
    fn record_search(&mut self, query: &str);
    fn entries(&self) -> &[String];
    fn clear_all(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory search history.
pub struct HistoryManager {
    entries: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Records a query at the front of the history. An already-present
    /// query (case-sensitive exact match) moves to the front instead of
    /// duplicating; once the capacity is reached the oldest entry is
    /// evicted.
    fn record_search(&mut self, query: &str) {
        self.entries.retain(|item| item != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries in most-recent-first order.
    fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Removes all entries.
    fn clear_all(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
