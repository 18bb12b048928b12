use std::fmt;

use shared::models::{MessageBody, User};
use yewdux::Store;

/// Messages left by the last failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// A single message.
    Message(String),
    /// An ordered list of messages.
    List(Vec<String>),
}

impl Errors {
    /// Returns `true` when there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Message(message) => message.is_empty(),
            Self::List(messages) => messages.is_empty(),
        }
    }

    /// All messages in display order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        match self {
            Self::Message(message) if message.is_empty() => Vec::new(),
            Self::Message(message) => vec![message.as_str()],
            Self::List(messages) => messages.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Errors {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl From<MessageBody> for Errors {
    fn from(body: MessageBody) -> Self {
        match body {
            MessageBody::Single(message) => Self::Message(message),
            MessageBody::Many(messages) => Self::List(messages),
        }
    }
}

impl From<&str> for Errors {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Client-side session state.
///
/// Lives in a [`yewdux::Context`] and changes only through
/// [`super::AuthEvent`].
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AuthState {
    /// The signed-in account, if any.
    pub user: Option<User>,
    /// Session token; empty when signed out.
    pub token: String,
    /// True while a register, login or current-user request is in flight.
    pub is_loading: bool,
    /// Messages from the last failed register, login or current-user request.
    pub errors: Errors,
}

/// Whether the state holds a session token.
#[must_use]
pub fn is_authenticated(state: &AuthState) -> bool {
    !state.token.is_empty()
}
