use serde::{Deserialize, Serialize};

use crate::types::gif::Gif;

/// Snapshot of the current search session, rendered as-is by the
/// presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchState {
    /// The query of the most recently dispatched fetch.
    pub query: String,
    /// Current page, 1-based.
    pub page: u32,
    /// Results of the last applied fetch.
    pub results: Vec<Gif>,
    /// Total matches reported by the API for `query`.
    pub total_results: u64,
    /// True while a fetch is outstanding.
    pub loading: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            total_results: 0,
            loading: false,
        }
    }

    /// Number of pages the pagination control should offer:
    /// `ceil(total_results / items_per_page)`.
    pub fn page_count(&self, items_per_page: u32) -> u64 {
        let per_page = u64::from(items_per_page.max(1));
        self.total_results.div_ceil(per_page)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// User-originated commands consumed by the session controller.
/// Each maps 1:1 to a controller transition; the presentation layer
/// produces these and knows nothing else about the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitQuery(String),
    SelectHistoryItem(String),
    ChangePage(u32),
    ClearHistory,
}

/// Tag attached to a dispatched fetch. `seq` is monotonically increasing;
/// a settlement is applied only if its tag is still the latest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
    pub limit: u32,
    /// `(page - 1) * limit`, widened so no valid page can overflow it.
    pub offset: u64,
}
