use std::fmt;

use serde::{Deserialize, Serialize};

/// The `message` field of an API error body.
///
/// Most failures carry one string; validation failures carry one entry per
/// rejected field.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageBody {
    /// A single human-readable message.
    Single(String),
    /// An ordered list of messages.
    Many(Vec<String>),
}

impl MessageBody {
    /// Returns `true` when there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(message) => message.is_empty(),
            Self::Many(messages) => messages.is_empty(),
        }
    }
}

impl Default for MessageBody {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for MessageBody {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for MessageBody {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for MessageBody {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(message) => f.write_str(message),
            Self::Many(messages) => f.write_str(&messages.join("; ")),
        }
    }
}

/// Represents an error response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    #[serde(default)]
    pub message: MessageBody,
    /// Optional additional details about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<MessageBody>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
