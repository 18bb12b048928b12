use serde::{Deserialize, Serialize};

/// A registered account as returned by the Cinema API.
///
/// Fields beyond the ones below are ignored when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: i64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// Identifiers of the movies the user marked as favorite.
    #[serde(default)]
    pub favorites: Vec<i64>,
}

impl User {
    /// Whether `movie_id` is among the user's favorites.
    #[must_use]
    pub fn has_favorite(&self, movie_id: i64) -> bool {
        self.favorites.contains(&movie_id)
    }
}

/// Credentials posted to the registration and login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

impl CreateUserRequest {
    /// Build a request from its three fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
