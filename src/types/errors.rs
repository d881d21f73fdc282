use std::fmt;

// === ConfigError ===

/// Errors raised while reading the startup configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The search API base URL is missing or empty.
    MissingBaseUrl,
    /// The search API access key is missing or empty.
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingBaseUrl => {
                write!(f, "Missing configuration: GIPHY_URL is not set")
            }
            ConfigError::MissingApiKey => {
                write!(f, "Missing configuration: GIPHY_API_KEY is not set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// === SearchError ===

/// Errors raised by a single fetch against the remote search API.
#[derive(Debug, Clone)]
pub enum SearchError {
    /// Network failure, timeout, or a non-2xx response status.
    Transport(String),
    /// The response body does not match the documented shape.
    MalformedResponse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(msg) => write!(f, "Search transport error: {}", msg),
            SearchError::MalformedResponse(msg) => {
                write!(f, "Malformed search response: {}", msg)
            }
        }
    }
}

impl std::error::Error for SearchError {}
