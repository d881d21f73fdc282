// GifSearch startup configuration.
// The search API base URL and access key come from the environment;
// the application refuses to start when either is missing.

use std::env;

use crate::types::errors::ConfigError;

/// Environment variable holding the search API base URL.
pub const ENV_BASE_URL: &str = "GIPHY_URL";
/// Environment variable holding the search API access key.
pub const ENV_API_KEY: &str = "GIPHY_API_KEY";
/// Fixed number of results requested per fetch.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 50;

/// Validated configuration for the search session.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    pub api_key: String,
    pub items_per_page: u32,
}

impl SearchConfig {
    /// Creates a config from explicit values, rejecting blank ones.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        if base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        })
    }

    /// Reads `GIPHY_URL` and `GIPHY_API_KEY` from the environment.
    /// An unset or empty variable is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_default();
        let api_key = env::var(ENV_API_KEY).unwrap_or_default();
        Self::new(&base_url, &api_key)
    }
}
