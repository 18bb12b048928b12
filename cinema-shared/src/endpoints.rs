//! Paths of the Cinema API, relative to the configured base URL.

/// `POST` — create an account and start a session.
pub const REGISTRATION: &str = "auth/registration";

/// `POST` — start a session for an existing account.
pub const LOGIN: &str = "auth/login";

/// `GET` — the account owning the current session.
pub const ME: &str = "auth/me";

/// `POST` — add a movie to the current user's favorites.
#[must_use]
pub fn add_favorite(movie_id: i64) -> String {
    format!("users/movieId/{movie_id}/add")
}

/// `DELETE` — remove a movie from the current user's favorites.
#[must_use]
pub fn remove_favorite(movie_id: i64) -> String {
    format!("users/movieId/{movie_id}/delete")
}
