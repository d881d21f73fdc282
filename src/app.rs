//! App Core for GifSearch.
//!
//! Holds the validated configuration and the session controller wired to
//! the HTTP client. Construction fails when the configuration is
//! incomplete; the application must not run partially configured.

use crate::managers::session_controller::SearchSessionController;
use crate::services::config::SearchConfig;
use crate::services::gif_client::HttpGifClient;
use crate::types::errors::ConfigError;

/// Central application struct: configuration plus the one controller
/// instance that owns all session state.
pub struct App {
    pub config: SearchConfig,
    pub controller: SearchSessionController<HttpGifClient>,
}

impl App {
    /// Creates an App from an explicit configuration.
    pub fn new(config: SearchConfig) -> Self {
        let client = HttpGifClient::new(&config);
        let controller = SearchSessionController::new(client, config.items_per_page);
        Self { config, controller }
    }

    /// Creates an App from `GIPHY_URL` / `GIPHY_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(SearchConfig::from_env()?))
    }
}
