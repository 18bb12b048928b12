//! Operations that talk to the API and update the session store.

pub mod auth;

pub use auth::AuthService;
