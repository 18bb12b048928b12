//! Request and response bodies exchanged with the Cinema API.

pub mod auth;
pub mod errors;
pub mod user;

pub use auth::AuthResponse;
pub use errors::{ErrorResponse, MessageBody};
pub use user::{CreateUserRequest, User};
