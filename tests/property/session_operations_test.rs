//! Property-based tests for the session controller's paging arithmetic
//! and query transitions.

use gifsearch::managers::session_controller::{SearchSessionController, SearchSessionTrait};
use gifsearch::services::gif_client::GifSearchClient;
use gifsearch::types::errors::SearchError;
use gifsearch::types::gif::{Gif, MediaHeight, SearchPage};
use gifsearch::types::search::{Intent, SearchState};
use proptest::prelude::*;

/// Client that must never be reached: these properties drive the state
/// machine through `apply_intent`/`complete_fetch` only.
struct NullClient;

impl GifSearchClient for NullClient {
    async fn search(
        &self,
        _query: &str,
        _limit: u32,
        _offset: u64,
    ) -> Result<SearchPage, SearchError> {
        panic!("property tests must not perform network calls");
    }
}

fn result_page(items: usize, total_count: u64) -> SearchPage {
    SearchPage {
        gifs: (0..items)
            .map(|i| Gif {
                id: format!("g{}", i),
                title: String::new(),
                height: MediaHeight::Pixels(100),
                url: format!("https://m/{}.gif", i),
            })
            .collect(),
        total_count,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Submitting any non-blank query lands on page 1 of that query, with
    // the fetch starting at offset 0.
    #[test]
    fn submit_resets_to_first_page(query in "[a-zA-Z0-9 ]{1,20}") {
        prop_assume!(!query.trim().is_empty());

        let mut ctl = SearchSessionController::new(NullClient, 50);
        ctl.apply_intent(Intent::ChangePage(7));

        let request = ctl.apply_intent(Intent::SubmitQuery(query.clone()));
        let request = request.expect("non-blank query must fetch");
        prop_assert_eq!(&ctl.state().query, &query);
        prop_assert_eq!(ctl.state().page, 1);
        prop_assert_eq!(request.offset, 0);
        prop_assert_eq!(ctl.history().first().unwrap(), &query);
    }

    // offset == (page - 1) * limit for every page change, across the
    // whole page range including values whose product exceeds u32.
    #[test]
    fn page_change_offset_relation(page in 1u32..=u32::MAX, limit in 1u32..=100) {
        let mut ctl = SearchSessionController::new(NullClient, limit);
        ctl.apply_intent(Intent::SubmitQuery("cats".to_string()));

        let request = ctl.apply_intent(Intent::ChangePage(page)).unwrap();
        prop_assert_eq!(request.offset, u64::from(page - 1) * u64::from(limit));
        prop_assert_eq!(request.limit, limit);
        prop_assert_eq!(ctl.state().page, page);
    }

    // page_count is the exact ceiling division of the total.
    #[test]
    fn page_count_is_ceiling(total in 0u64..=100_000, limit in 1u32..=100) {
        let state = SearchState {
            total_results: total,
            ..SearchState::new()
        };
        let count = state.page_count(limit);
        let limit = u64::from(limit);

        if total == 0 {
            prop_assert_eq!(count, 0);
        } else {
            prop_assert!(count * limit >= total);
            prop_assert!((count - 1) * limit < total);
        }
    }

    // Whatever the settled page contains, the state never holds more
    // than `limit` results.
    #[test]
    fn results_never_exceed_limit(items in 0usize..=120, total in 0u64..=10_000, limit in 1u32..=60) {
        let mut ctl = SearchSessionController::new(NullClient, limit);
        let request = ctl.apply_intent(Intent::SubmitQuery("cats".to_string())).unwrap();
        ctl.complete_fetch(&request, Ok(result_page(items, total)));

        prop_assert!(ctl.state().results.len() <= limit as usize);
        prop_assert_eq!(ctl.state().total_results, total);
        prop_assert!(!ctl.state().loading);
    }
}
