use serde::{Deserialize, Serialize};

use super::User;

/// Body returned by registration, login and current-user lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The authenticated account.
    pub user: User,

    /// Session token issued by the backend.
    #[serde(default)]
    pub token: String,
}

impl AuthResponse {
    /// Whether the backend issued a token worth persisting.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
