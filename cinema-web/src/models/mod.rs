//! Session state, the events that change it, and read-only selectors.

pub mod auth_event;
pub mod auth_state;

pub use auth_event::{AuthEvent, AuthOperation, transition};
pub use auth_state::{AuthState, Errors, is_authenticated};
