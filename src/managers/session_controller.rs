//! Search Session Controller for GifSearch.
//!
//! The one real state machine in the application: it owns the session
//! state (query, page, results, loading flag) and the query history,
//! translates user intents into tagged fetch requests, and applies
//! settled fetches back onto the state.
//!
//! The remote search client is injected via `GifSearchClient`, so the
//! controller can be driven in tests with a mock. Intents mutate state
//! synchronously through `apply_intent`; `dispatch` is the async driver
//! that also performs the network call.

use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::gif_client::GifSearchClient;
use crate::types::errors::SearchError;
use crate::types::gif::SearchPage;
use crate::types::search::{FetchRequest, Intent, SearchState};

/// Trait defining the synchronous controller surface.
pub trait SearchSessionTrait {
    /// Applies an intent to the session state. Returns the fetch request
    /// the caller must settle via `complete_fetch`, or `None` when the
    /// intent needs no fetch (blank query, page 0, clear-history).
    fn apply_intent(&mut self, intent: Intent) -> Option<FetchRequest>;
    /// Applies a settled fetch. Stale requests (a newer one was dispatched
    /// since) are ignored entirely; failures collapse to an empty page.
    fn complete_fetch(&mut self, request: &FetchRequest, outcome: Result<SearchPage, SearchError>);
    fn state(&self) -> &SearchState;
    fn history(&self) -> &[String];
}

/// Session controller generic over the injected search client.
pub struct SearchSessionController<C: GifSearchClient> {
    client: C,
    items_per_page: u32,
    state: SearchState,
    history: HistoryManager,
    // Sequence number of the most recently dispatched fetch.
    fetch_seq: u64,
}

impl<C: GifSearchClient> SearchSessionController<C> {
    pub fn new(client: C, items_per_page: u32) -> Self {
        Self {
            client,
            items_per_page,
            state: SearchState::new(),
            history: HistoryManager::new(),
            fetch_seq: 0,
        }
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Applies an intent and, if it produced a fetch request, performs the
    /// network call and settles it. Exactly one outbound call per request.
    pub async fn dispatch(&mut self, intent: Intent) {
        if let Some(request) = self.apply_intent(intent) {
            let outcome = self
                .client
                .search(&request.query, request.limit, request.offset)
                .await;
            self.complete_fetch(&request, outcome);
        }
    }

    /// Tags a fetch for the current `(query, page)` and marks the session
    /// as loading.
    fn begin_fetch(&mut self) -> FetchRequest {
        self.fetch_seq += 1;
        self.state.loading = true;
        FetchRequest {
            seq: self.fetch_seq,
            query: self.state.query.clone(),
            page: self.state.page,
            limit: self.items_per_page,
            // Widened before multiplying: ChangePage accepts any positive
            // page, and (page - 1) * limit can exceed u32.
            offset: u64::from(self.state.page - 1) * u64::from(self.items_per_page),
        }
    }

    /// Shared transition for submitting a query, whether typed or picked
    /// from the history. Re-picking an existing query simply moves it to
    /// the front of the history.
    fn submit(&mut self, query: String) -> Option<FetchRequest> {
        if query.trim().is_empty() {
            return None;
        }
        self.state.query = query;
        self.state.page = 1;
        self.history.record_search(&self.state.query);
        Some(self.begin_fetch())
    }
}

impl<C: GifSearchClient> SearchSessionTrait for SearchSessionController<C> {
    fn apply_intent(&mut self, intent: Intent) -> Option<FetchRequest> {
        match intent {
            Intent::SubmitQuery(query) => self.submit(query),
            Intent::SelectHistoryItem(query) => self.submit(query),
            Intent::ChangePage(page) => {
                if page == 0 {
                    return None;
                }
                // No upper-bound check against total_results: a page past
                // the end comes back empty from the API and is shown as-is.
                self.state.page = page;
                Some(self.begin_fetch())
            }
            Intent::ClearHistory => {
                self.history.clear_all();
                None
            }
        }
    }

    fn complete_fetch(&mut self, request: &FetchRequest, outcome: Result<SearchPage, SearchError>) {
        if request.seq != self.fetch_seq {
            // A newer fetch was dispatched while this one was in flight;
            // its settlement owns the state now.
            return;
        }
        match outcome {
            Ok(mut page) => {
                page.gifs.truncate(request.limit as usize);
                self.state.results = page.gifs;
                self.state.total_results = page.total_count;
            }
            Err(err) => {
                // Collapse every failure to an empty result page; the
                // presentation layer never sees an error state.
                eprintln!("Error loading GIFs: {}", err);
                self.state.results = Vec::new();
                self.state.total_results = 0;
            }
        }
        self.state.loading = false;
    }

    fn state(&self) -> &SearchState {
        &self.state
    }

    fn history(&self) -> &[String] {
        self.history.entries()
    }
}
