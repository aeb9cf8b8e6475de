use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

// Credential payloads are tiny; 1 MiB is plenty.
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Build the primary axum router with the provided shared application state.
///
/// All routes live under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/login", post(crate::handlers::auth::login))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
        .layer(Extension(state));

    Router::new().nest("/api", router)
}

async fn health_handler() -> impl IntoResponse {
    // Liveness: always return 200 OK when process is alive.
    (StatusCode::OK, "OK")
}

async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    if state.users.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "no users loaded");
    }
    (StatusCode::OK, "OK")
}
