//! Authentication operations wired to the session store.
//!
//! LIFECYCLE
//! =========
//! `register`, `login` and `get_me` dispatch [`AuthEvent::Started`] before the
//! request, then exactly one of `Succeeded`, `Failed` (server message) or
//! `Aborted` (no usable response). Favorites never touch the loading or error
//! fields; failures are logged and handed back to the caller.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use shared::models::{AuthResponse, CreateUserRequest, User};
use tracing::{debug, warn};
use yewdux::Dispatch;

use crate::api::CinemaClient;
use crate::error::AuthError;
use crate::models::{AuthEvent, AuthOperation, AuthState, Errors, is_authenticated};
use crate::storage::TokenStorage;

/// Runs API calls and mirrors their outcome into [`AuthState`].
pub struct AuthService<S> {
    client: CinemaClient,
    dispatch: Dispatch<AuthState>,
    storage: S,
}

impl<S: fmt::Debug> fmt::Debug for AuthService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("client", &self.client)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl<S: TokenStorage> AuthService<S> {
    /// Wire a client, a store handle and token storage together.
    ///
    /// A previously persisted token is attached to outgoing requests so
    /// [`AuthService::get_me`] can restore the session after a reload.
    pub fn new(client: CinemaClient, dispatch: Dispatch<AuthState>, storage: S) -> Self {
        match storage.load() {
            Ok(Some(token)) => {
                debug!("restored persisted session token");
                client.set_bearer_token(Some(token));
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to read persisted token"),
        }

        Self {
            client,
            dispatch,
            storage,
        }
    }

    /// The store handle this service writes to.
    pub fn dispatch(&self) -> &Dispatch<AuthState> {
        &self.dispatch
    }

    /// The underlying API client.
    pub fn client(&self) -> &CinemaClient {
        &self.client
    }

    /// The token storage adapter.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> Rc<AuthState> {
        self.dispatch.get()
    }

    /// Whether the store currently holds a session token.
    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.state())
    }

    /// Create an account and start a session with it.
    ///
    /// # Errors
    ///
    /// [`AuthError::Api`] after the server message has been stored in
    /// `errors`; any other variant when no usable response arrived.
    pub async fn register(&self, request: &CreateUserRequest) -> Result<AuthResponse, AuthError> {
        self.track(AuthOperation::Register, async {
            let response = self.client.register(request).await?;
            self.persist_token(&response);
            Ok::<_, AuthError>(response)
        })
        .await
    }

    /// Sign in with existing credentials.
    ///
    /// # Errors
    ///
    /// Same as [`AuthService::register`].
    pub async fn login(&self, request: &CreateUserRequest) -> Result<AuthResponse, AuthError> {
        self.track(AuthOperation::Login, async {
            let response = self.client.login(request).await?;
            self.persist_token(&response);
            Ok::<_, AuthError>(response)
        })
        .await
    }

    /// Reload the account owning the current token.
    ///
    /// # Errors
    ///
    /// Same as [`AuthService::register`].
    pub async fn get_me(&self) -> Result<AuthResponse, AuthError> {
        self.track(AuthOperation::GetMe, self.client.me()).await
    }

    /// Add a movie to the signed-in user's favorites.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; the session state is left as it was.
    pub async fn add_favorite(&self, movie_id: i64) -> Result<User, AuthError> {
        let result = self.client.add_favorite(movie_id).await;
        self.merge_user("add", movie_id, result)
    }

    /// Remove a movie from the signed-in user's favorites.
    ///
    /// # Errors
    ///
    /// Any [`AuthError`]; the session state is left as it was.
    pub async fn remove_favorite(&self, movie_id: i64) -> Result<User, AuthError> {
        let result = self.client.remove_favorite(movie_id).await;
        self.merge_user("remove", movie_id, result)
    }

    /// Forget the session in the store, the client and durable storage.
    ///
    /// Requests already in flight are not cancelled.
    pub fn logout(&self) {
        self.dispatch.apply(AuthEvent::Logout);
        self.client.set_bearer_token(None);
        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "failed to clear persisted token");
        }
    }

    async fn track<F>(&self, operation: AuthOperation, request: F) -> Result<AuthResponse, AuthError>
    where
        F: Future<Output = Result<AuthResponse, AuthError>>,
    {
        self.dispatch.apply(AuthEvent::Started(operation));
        debug!(%operation, "auth operation started");

        match request.await {
            Ok(response) => {
                if response.has_token() {
                    self.client.set_bearer_token(Some(response.token.clone()));
                }
                self.dispatch
                    .apply(AuthEvent::Succeeded(operation, response.clone()));
                debug!(%operation, user_id = response.user.id, "auth operation succeeded");
                Ok(response)
            }
            Err(err) => {
                match err.api_body() {
                    Some(body) => {
                        let errors = Errors::from(body.message.clone());
                        self.dispatch.apply(AuthEvent::Failed(operation, errors));
                        debug!(
                            %operation,
                            error = %err,
                            details = body.details.as_deref().unwrap_or(""),
                            "auth operation rejected"
                        );
                    }
                    None => {
                        self.dispatch.apply(AuthEvent::Aborted(operation));
                        warn!(%operation, error = %err, "auth operation failed without a response");
                    }
                }
                Err(err)
            }
        }
    }

    fn persist_token(&self, response: &AuthResponse) {
        if !response.has_token() {
            return;
        }
        if let Err(err) = self.storage.save(&response.token) {
            warn!(error = %err, "failed to persist session token");
        }
    }

    fn merge_user(
        &self,
        action: &str,
        movie_id: i64,
        result: Result<User, AuthError>,
    ) -> Result<User, AuthError> {
        match result {
            Ok(user) => {
                self.dispatch.apply(AuthEvent::UserUpdated(user.clone()));
                debug!(action, movie_id, "favorites updated");
                Ok(user)
            }
            Err(err) => {
                let details = err.api_body().and_then(|body| body.details.as_deref());
                warn!(
                    action,
                    movie_id,
                    error = %err,
                    details = details.unwrap_or(""),
                    "favorites update failed"
                );
                Err(err)
            }
        }
    }
}
