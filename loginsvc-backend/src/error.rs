use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Errors a request handler can surface to the caller.
///
/// Every variant is client-caused and maps to `400 Bad Request` with a body of
/// the form `{"error": "<message>"}`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// `email` or `password` was absent or empty.
    #[error("Missing input")]
    MissingInput,
    /// Unknown email, or the password did not match.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput | ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let payload = json!({ "error": self.to_string() });
        (self.status(), Json(payload)).into_response()
    }
}
