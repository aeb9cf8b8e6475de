use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::HeaderMap;
use axum::response::Json;
use tracing::info;

use super::dto::{Credentials, Login};
use super::utils::{user_agent, LoginSession};
use crate::store::SanitizedUser;
use crate::{error::ApiError, state::AppState};

/// POST /api/login
/// Accepts { email, password, remember? } and returns the matching user without its password.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SanitizedUser>, ApiError> {
    let dto = Login::from_body(&body);
    let (email, password) = match dto.credentials() {
        Credentials::Missing => return Err(ApiError::MissingInput),
        Credentials::Unmatchable => return Err(ApiError::InvalidCredentials),
        Credentials::Text { email, password } => (email, password),
    };

    let user = state
        .users
        .get(email)
        .filter(|user| user.password == password)
        .ok_or(ApiError::InvalidCredentials)?;

    let session = LoginSession::new(user.id, dto.remember);

    let agent = user_agent(&headers);
    info!(
        user_id = session.user_id,
        remember = session.remember,
        "LOGIN OK: User '{email}' logged in successfully. Agent: {agent}"
    );

    Ok(Json(SanitizedUser::from(user)))
}
