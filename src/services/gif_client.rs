//! Remote GIF search client for GifSearch.
//!
//! `GifSearchClient` is the seam between the session controller and the
//! network: the controller only ever sees `(query, limit, offset) ->
//! SearchPage`. `HttpGifClient` is the real implementation against the
//! Giphy-style HTTP API; tests inject mocks instead.

use serde::Deserialize;
use serde_json::Value;

use crate::services::config::SearchConfig;
use crate::types::errors::SearchError;
use crate::types::gif::{Gif, MediaHeight, SearchPage};

/// Trait defining the remote search call.
#[allow(async_fn_in_trait)]
pub trait GifSearchClient {
    /// Fetches one page of results for `query`.
    async fn search(&self, query: &str, limit: u32, offset: u64)
        -> Result<SearchPage, SearchError>;
}

// Wire shapes of the search endpoint. Unknown extra fields are ignored;
// anything missing or mistyped fails deserialization and is reported as
// a malformed response.

#[derive(Deserialize)]
struct SearchResponseWire {
    data: Vec<GifWire>,
    pagination: PaginationWire,
}

#[derive(Deserialize)]
struct PaginationWire {
    total_count: u64,
}

#[derive(Deserialize)]
struct GifWire {
    id: String,
    #[serde(default)]
    title: String,
    images: ImagesWire,
}

#[derive(Deserialize)]
struct ImagesWire {
    fixed_height: RenditionWire,
}

#[derive(Deserialize)]
struct RenditionWire {
    height: MediaHeight,
    url: String,
}

/// Validates a raw response body against the documented shape
/// `{ data: [...], pagination: { total_count } }` and converts it to a
/// `SearchPage`. Any deviation is a `MalformedResponse`.
pub fn parse_search_response(body: Value) -> Result<SearchPage, SearchError> {
    let wire: SearchResponseWire = serde_json::from_value(body)
        .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

    let gifs = wire
        .data
        .into_iter()
        .map(|g| Gif {
            id: g.id,
            title: g.title,
            height: g.images.fixed_height.height,
            url: g.images.fixed_height.url,
        })
        .collect();

    Ok(SearchPage {
        gifs,
        total_count: wire.pagination.total_count,
    })
}

/// HTTP implementation of `GifSearchClient`.
pub struct HttpGifClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpGifClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl GifSearchClient for HttpGifClient {
    /// `GET {base}/search?api_key=...&q=...&limit=...&offset=...`
    async fn search(
        &self,
        query: &str,
        limit: u32,
        offset: u64,
    ) -> Result<SearchPage, SearchError> {
        let params = [
            ("api_key", self.api_key.clone()),
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];

        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Transport(format!(
                "unexpected status: {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        parse_search_response(body)
    }
}
