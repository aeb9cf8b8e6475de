use std::borrow::Cow;

use axum::http::{header::USER_AGENT, HeaderMap};

/// Notional session produced by a successful login. Never persisted or returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSession {
    pub user_id: i64,
    pub remember: bool,
}

impl LoginSession {
    pub fn new(user_id: i64, remember: bool) -> Self {
        Self { user_id, remember }
    }
}

/// The caller's declared `User-Agent`, verbatim. Non-UTF-8 bytes are replaced
/// rather than rejected; an absent header renders as `None`.
pub fn user_agent(headers: &HeaderMap) -> Cow<'_, str> {
    match headers.get(USER_AGENT) {
        Some(value) => String::from_utf8_lossy(value.as_bytes()),
        None => Cow::Borrowed("None"),
    }
}
