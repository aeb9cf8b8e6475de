use std::sync::Arc;

use crate::store::UserStore;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
}

impl AppState {
    /// Wrap a fully loaded user store.
    pub fn new(users: UserStore) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}
