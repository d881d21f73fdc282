use gifsearch::services::config::{
    SearchConfig, DEFAULT_ITEMS_PER_PAGE, ENV_API_KEY, ENV_BASE_URL,
};
use gifsearch::types::errors::ConfigError;

#[test]
fn test_new_with_valid_values() {
    let config = SearchConfig::new("https://api.giphy.com/v1/gifs", "test-key").unwrap();
    assert_eq!(config.base_url, "https://api.giphy.com/v1/gifs");
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
    assert_eq!(DEFAULT_ITEMS_PER_PAGE, 50);
}

#[test]
fn test_new_trims_trailing_slash() {
    let config = SearchConfig::new("https://api.giphy.com/v1/gifs/", "k").unwrap();
    assert_eq!(config.base_url, "https://api.giphy.com/v1/gifs");
}

#[test]
fn test_missing_base_url_is_fatal() {
    match SearchConfig::new("", "test-key") {
        Err(ConfigError::MissingBaseUrl) => {}
        other => panic!("expected MissingBaseUrl, got {:?}", other),
    }
    assert!(matches!(
        SearchConfig::new("   ", "test-key"),
        Err(ConfigError::MissingBaseUrl)
    ));
}

#[test]
fn test_missing_api_key_is_fatal() {
    match SearchConfig::new("https://api.giphy.com/v1/gifs", "") {
        Err(ConfigError::MissingApiKey) => {}
        other => panic!("expected MissingApiKey, got {:?}", other),
    }
}

// All environment manipulation lives in this single test so parallel
// test threads in this binary never race on the variables.
#[test]
fn test_from_env() {
    std::env::remove_var(ENV_BASE_URL);
    std::env::remove_var(ENV_API_KEY);
    assert!(matches!(
        SearchConfig::from_env(),
        Err(ConfigError::MissingBaseUrl)
    ));

    std::env::set_var(ENV_BASE_URL, "https://api.giphy.com/v1/gifs");
    assert!(matches!(
        SearchConfig::from_env(),
        Err(ConfigError::MissingApiKey)
    ));

    std::env::set_var(ENV_API_KEY, "test-key");
    let config = SearchConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://api.giphy.com/v1/gifs");
    assert_eq!(config.api_key, "test-key");

    std::env::remove_var(ENV_BASE_URL);
    std::env::remove_var(ENV_API_KEY);
}
