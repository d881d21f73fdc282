use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel height of a GIF rendition. The API serves it as a string,
/// but a bare number is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaHeight {
    Text(String),
    Pixels(u64),
}

impl fmt::Display for MediaHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaHeight::Text(s) => write!(f, "{}", s),
            MediaHeight::Pixels(n) => write!(f, "{}", n),
        }
    }
}

/// A single GIF search result. Immutable once received; the whole set is
/// replaced by the next settled fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gif {
    /// Opaque ID, unique within one response.
    pub id: String,
    /// Display label; may be empty.
    pub title: String,
    pub height: MediaHeight,
    pub url: String,
}

/// One page of results as returned by the remote search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub gifs: Vec<Gif>,
    pub total_count: u64,
}
