use std::fmt;
use std::rc::Rc;

use shared::models::{AuthResponse, User};
use yewdux::store::Reducer;

use super::{AuthState, Errors};

/// The tracked operations sharing the loading and error fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthOperation {
    /// Account creation.
    Register,
    /// Credential sign-in.
    Login,
    /// Current-user lookup.
    GetMe,
}

impl AuthOperation {
    /// Stable name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Login => "login",
            Self::GetMe => "get_me",
        }
    }
}

impl fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way [`AuthState`] can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The request was sent.
    Started(AuthOperation),
    /// The server accepted the request.
    Succeeded(AuthOperation, AuthResponse),
    /// The server rejected the request with a message.
    Failed(AuthOperation, Errors),
    /// The request ended without a usable response.
    Aborted(AuthOperation),
    /// A favorites change returned the updated account.
    UserUpdated(User),
    /// Forget the session.
    Logout,
}

/// Apply `event` to `state`, returning the next state.
#[must_use]
pub fn transition(state: &AuthState, event: AuthEvent) -> AuthState {
    let mut next = state.clone();
    match event {
        AuthEvent::Started(_) => {
            next.is_loading = true;
            next.errors = Errors::default();
        }
        AuthEvent::Succeeded(_, response) => {
            next.is_loading = false;
            next.user = Some(response.user);
            next.token = response.token;
        }
        AuthEvent::Failed(_, errors) => {
            next.is_loading = false;
            next.errors = errors;
        }
        AuthEvent::Aborted(_) => {
            next.is_loading = false;
        }
        AuthEvent::UserUpdated(user) => {
            next.user = Some(user);
        }
        AuthEvent::Logout => {
            next = AuthState::default();
        }
    }
    next
}

impl Reducer<AuthState> for AuthEvent {
    fn apply(self, state: Rc<AuthState>) -> Rc<AuthState> {
        Rc::new(transition(&state, self))
    }
}
