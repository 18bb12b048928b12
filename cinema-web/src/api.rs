//! HTTP client for the Cinema API.
//!
//! Each method is a single round trip. Non-success responses are decoded into
//! [`ErrorResponse`] and returned as [`AuthError::Api`]; requests that never
//! got a response come back as [`AuthError::Transport`].

use std::sync::{Arc, Mutex};

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::endpoints;
use shared::models::{AuthResponse, CreateUserRequest, ErrorResponse, User};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::AuthError;

/// Lightweight API client for Cinema authentication and favorites.
#[derive(Clone, Debug)]
pub struct CinemaClient {
    base_url: Url,
    client: Client,
    bearer_token: Arc<Mutex<Option<String>>>,
}

impl CinemaClient {
    /// Create a client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Url`] if the base URL is not absolute, or
    /// [`AuthError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, AuthError> {
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base)?;

        Ok(Self {
            base_url,
            client: build_http_client(config)?,
            bearer_token: Arc::new(Mutex::new(None)),
        })
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Url`] if the result is not a valid URL.
    pub fn api_url(&self, path: &str) -> Result<Url, AuthError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Replace the token sent as `Authorization: Bearer` on every request.
    /// Empty tokens are treated as `None`.
    pub fn set_bearer_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.bearer_token.lock() {
            *guard = token.filter(|value| !value.is_empty());
        }
    }

    /// The token currently attached to requests.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.bearer_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.bearer_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// Create an account: `POST auth/registration`.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub async fn register(&self, payload: &CreateUserRequest) -> Result<AuthResponse, AuthError> {
        let url = self.api_url(endpoints::REGISTRATION)?;
        debug!(%url, username = %payload.username, "registering user");
        self.send(self.client.post(url).json(payload)).await
    }

    /// Authenticate with credentials: `POST auth/login`.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub async fn login(&self, payload: &CreateUserRequest) -> Result<AuthResponse, AuthError> {
        let url = self.api_url(endpoints::LOGIN)?;
        debug!(%url, username = %payload.username, "logging in");
        self.send(self.client.post(url).json(payload)).await
    }

    /// Retrieve the account owning the current token: `GET auth/me`.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub async fn me(&self) -> Result<AuthResponse, AuthError> {
        let url = self.api_url(endpoints::ME)?;
        debug!(%url, "fetching current user");
        self.send(self.client.get(url)).await
    }

    /// Add a movie to the current user's favorites.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub async fn add_favorite(&self, movie_id: i64) -> Result<User, AuthError> {
        let url = self.api_url(&endpoints::add_favorite(movie_id))?;
        debug!(%url, movie_id, "adding favorite");
        self.send(self.client.post(url)).await
    }

    /// Remove a movie from the current user's favorites.
    ///
    /// # Errors
    ///
    /// See the module documentation.
    pub async fn remove_favorite(&self, movie_id: i64) -> Result<User, AuthError> {
        let url = self.api_url(&endpoints::remove_favorite(movie_id))?;
        debug!(%url, movie_id, "removing favorite");
        self.send(self.client.delete(url)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthError> {
        let response = self
            .apply_bearer(request)
            .send()
            .await
            .map_err(AuthError::Transport)?;
        decode(response).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> Result<Client, AuthError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(AuthError::Client)
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ClientConfig) -> Result<Client, AuthError> {
    Client::builder().build().map_err(AuthError::Client)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(AuthError::Decode);
    }

    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ErrorResponse>(&text)
        .ok()
        .filter(|body| !body.message.is_empty())
        .unwrap_or_else(|| {
            ErrorResponse::new(status.canonical_reason().unwrap_or("Request failed"))
        });
    debug!(%status, message = %body.message, "API returned an error");
    Err(AuthError::Api { status, body })
}
