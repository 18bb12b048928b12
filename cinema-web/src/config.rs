//! Client configuration
//!
//! Where the API lives and how the session token is persisted. The API base
//! URL can be baked in at compile time through `CINEMA_API_BASE_URL`.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Settings for [`crate::api::CinemaClient`] and the token storage adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute URL every endpoint path is resolved against.
    pub base_url: String,
    /// Durable storage key holding the session token.
    pub token_storage_key: String,
    /// Per-request timeout. Only honoured on native targets; the browser
    /// applies its own limits.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("CINEMA_API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Persist the session token under `key` instead of `token`.
    #[must_use]
    pub fn with_token_storage_key(mut self, key: impl Into<String>) -> Self {
        self.token_storage_key = key.into();
        self
    }

    /// Abort native requests that take longer than `timeout`.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::new()
            .with_base_url("https://cinema.example.com/api")
            .with_token_storage_key("cinema.token")
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://cinema.example.com/api");
        assert_eq!(config.token_storage_key, "cinema.token");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}
