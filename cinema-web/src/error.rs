//! Error types for API calls and token persistence.

use reqwest::StatusCode;
use shared::models::ErrorResponse;
use thiserror::Error;

/// Failure of a call to the Cinema API.
///
/// [`AuthError::Api`] means the server answered; every other variant means
/// there is no server message to show.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Decoded error body, or the status reason when the body was unreadable.
        body: ErrorResponse,
    },

    /// No HTTP response was received.
    #[error("request failed before a response arrived: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response carried a body that did not decode.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The configured base URL or an endpoint path is not a valid URL.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl AuthError {
    /// The server-provided error body, for structured failures only.
    #[must_use]
    pub fn api_body(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Failure of the durable token storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected the read or write.
    #[error("token storage unavailable: {0}")]
    Unavailable(String),
}
