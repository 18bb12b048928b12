//! # cinema-web
//!
//! Authentication state for the Cinema single-page app: an HTTP client for
//! the auth and favorites endpoints, a yewdux store holding the session, and
//! [`AuthService`] tying the two together.
//!
//! ```no_run
//! use web::{AuthService, CinemaClient, ClientConfig, MemoryTokenStorage};
//! use yewdux::{Context, Dispatch};
//!
//! # async fn run() -> Result<(), web::AuthError> {
//! let config = ClientConfig::default();
//! let cx = Context::new();
//! let service = AuthService::new(
//!     CinemaClient::new(&config)?,
//!     Dispatch::new(&cx),
//!     MemoryTokenStorage::new(),
//! );
//! service.get_me().await?;
//! assert!(service.is_authenticated());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use api::CinemaClient;
pub use config::ClientConfig;
pub use error::{AuthError, StorageError};
pub use models::{AuthEvent, AuthOperation, AuthState, Errors, is_authenticated};
pub use services::AuthService;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalTokenStorage;
pub use storage::{MemoryTokenStorage, TokenStorage};
