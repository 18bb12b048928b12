//! In-process Cinema API used by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use shared::models::{AuthResponse, CreateUserRequest, User};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use web::{AuthService, CinemaClient, ClientConfig, MemoryTokenStorage};
use yewdux::{Context, Dispatch};

pub const USER_ID: i64 = 7;
pub const TOKEN: &str = "tok-neo";
pub const PASSWORD: &str = "red-pill";
/// Favorites for this movie fail with HTTP 500.
pub const FAILING_MOVIE: i64 = 42;
/// Logging in as this user returns a 200 with an undecodable body.
pub const GARBLED_USER: &str = "garbled";
/// Logging in as this user succeeds without issuing a token.
pub const TOKENLESS_USER: &str = "tokenless";
/// Registering this username fails validation.
pub const TAKEN_USER: &str = "taken";

/// Lets a test hold the registration handler open to observe in-flight state.
#[derive(Debug, Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

#[derive(Clone, Default)]
pub struct Backend {
    favorites: Arc<Mutex<Vec<i64>>>,
    gate: Option<Arc<Gate>>,
}

impl Backend {
    pub fn with_gate(gate: Arc<Gate>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    fn user(&self) -> User {
        User {
            id: USER_ID,
            username: "neo".to_string(),
            email: "neo@example.com".to_string(),
            favorites: self.favorites.lock().unwrap().clone(),
        }
    }

    fn auth_response(&self) -> AuthResponse {
        AuthResponse {
            user: self.user(),
            token: TOKEN.to_string(),
        }
    }
}

fn error(status: StatusCode, message: serde_json::Value) -> Response {
    (status, Json(json!({ "message": message, "statusCode": status.as_u16() }))).into_response()
}

fn error_with_details(status: StatusCode, message: &str, details: &str) -> Response {
    let body = json!({ "message": message, "details": details, "statusCode": status.as_u16() });
    (status, Json(body)).into_response()
}

async fn registration(
    State(backend): State<Backend>,
    Json(request): Json<CreateUserRequest>,
) -> Response {
    if let Some(gate) = &backend.gate {
        gate.entered.notify_one();
        gate.release.notified().await;
    }
    if request.username == TAKEN_USER {
        return error(
            StatusCode::BAD_REQUEST,
            json!(["username already exists", "email already exists"]),
        );
    }
    Json(backend.auth_response()).into_response()
}

async fn login(State(backend): State<Backend>, Json(request): Json<CreateUserRequest>) -> Response {
    if request.username == GARBLED_USER {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    if request.password != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, json!("bad password"));
    }
    if request.username == TOKENLESS_USER {
        return Json(json!({ "user": backend.user() })).into_response();
    }
    Json(backend.auth_response()).into_response()
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    let expected = format!("Bearer {TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, json!("Unauthorized"));
    }
    Json(backend.auth_response()).into_response()
}

async fn add_favorite(State(backend): State<Backend>, Path(movie_id): Path<i64>) -> Response {
    if movie_id == FAILING_MOVIE {
        return error_with_details(
            StatusCode::INTERNAL_SERVER_ERROR,
            "favorites unavailable",
            "catalogue cache offline",
        );
    }
    backend.favorites.lock().unwrap().push(movie_id);
    Json(backend.user()).into_response()
}

async fn remove_favorite(State(backend): State<Backend>, Path(movie_id): Path<i64>) -> Response {
    backend.favorites.lock().unwrap().retain(|id| *id != movie_id);
    Json(backend.user()).into_response()
}

fn routes() -> Router<Backend> {
    Router::new()
        .route("/auth/registration", post(registration))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/users/movieId/{id}/add", post(add_favorite))
        .route("/users/movieId/{id}/delete", delete(remove_favorite))
}

/// Serve `backend` on an ephemeral port and return its API base URL.
pub async fn spawn(backend: Backend) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().nest("/api", routes()).with_state(backend);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn service(base_url: &str, storage: MemoryTokenStorage) -> AuthService<MemoryTokenStorage> {
    init_tracing();
    let client = CinemaClient::new(&ClientConfig::new().with_base_url(base_url)).unwrap();
    AuthService::new(client, Dispatch::new(&Context::new()), storage)
}

pub fn credentials(username: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest::new(username, "neo@example.com", password)
}
