//! Read-only user store loaded once from a JSON document.
//!
//! The document carries its records under a top-level `users` key, either as an
//! object keyed by email or as a plain array of records:
//!
//! ```json
//! { "users": { "alice@example.com": { "id": 1, "name": "Alice", ... } } }
//! { "users": [ { "id": 1, "name": "Alice", "email": "alice@example.com", ... } ] }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A user record exactly as it appears in the source document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    /// Any further attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Externally visible view of a [`User`]; carries every attribute except the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&User> for SanitizedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            extra: user.extra.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read user file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid user document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate user email: {0}")]
    DuplicateEmail(String),
}

#[derive(Deserialize)]
struct UsersDocument {
    users: UserEntries,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserEntries {
    ByEmail(HashMap<String, User>),
    List(Vec<User>),
}

/// Email-keyed lookup over the loaded users. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    /// Read and parse the user document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let doc: UsersDocument = serde_json::from_str(raw)?;
        match doc.users {
            UserEntries::ByEmail(users) => Ok(Self { users }),
            UserEntries::List(list) => Self::from_users(list),
        }
    }

    /// Build a store keyed by each record's own email.
    pub fn from_users<I>(users: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = User>,
    {
        let mut map = HashMap::new();
        for user in users {
            if map.contains_key(&user.email) {
                return Err(StoreError::DuplicateEmail(user.email));
            }
            map.insert(user.email.clone(), user);
        }
        Ok(Self { users: map })
    }

    pub fn get(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEYED: &str = r#"{
        "users": {
            "alice@example.com": {
                "id": 1, "name": "Alice", "email": "alice@example.com",
                "password": "secret123", "role": "admin"
            },
            "bob@example.com": {
                "id": 2, "name": "Bob", "email": "bob@example.com",
                "password": "hunter2", "role": "user", "department": "sales"
            }
        }
    }"#;

    #[test]
    fn loads_email_keyed_document() {
        let store = UserStore::from_json_str(KEYED).expect("parse");
        assert_eq!(store.len(), 2);
        let alice = store.get("alice@example.com").expect("alice");
        assert_eq!(alice.id, 1);
        assert_eq!(alice.role, "admin");
        assert!(alice.extra.is_empty());
        let bob = store.get("bob@example.com").expect("bob");
        assert_eq!(bob.extra.get("department"), Some(&json!("sales")));
        assert!(store.get("carol@example.com").is_none());
    }

    #[test]
    fn loads_array_document() {
        let raw = r#"{"users": [
            {"id": 7, "name": "Dana", "email": "dana@example.com", "password": "pw", "role": "user"}
        ]}"#;
        let store = UserStore::from_json_str(raw).expect("parse");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("dana@example.com").map(|u| u.id), Some(7));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = UserStore::from_json_str(KEYED).unwrap();
        assert!(store.get("Alice@Example.com").is_none());
    }

    #[test]
    fn rejects_duplicate_emails_in_array() {
        let raw = r#"{"users": [
            {"id": 1, "name": "A", "email": "dup@example.com", "password": "a", "role": "user"},
            {"id": 2, "name": "B", "email": "dup@example.com", "password": "b", "role": "user"}
        ]}"#;
        match UserStore::from_json_str(raw) {
            Err(StoreError::DuplicateEmail(email)) => assert_eq!(email, "dup@example.com"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_records_missing_fields() {
        let raw = r#"{"users": [{"id": 1, "name": "NoPassword", "email": "x@example.com", "role": "user"}]}"#;
        assert!(matches!(
            UserStore::from_json_str(raw),
            Err(StoreError::Parse(_))
        ));
        assert!(matches!(
            UserStore::from_json_str(r#"{"people": []}"#),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        match UserStore::load(&missing) {
            Err(StoreError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn sanitized_user_drops_password_only() {
        let store = UserStore::from_json_str(KEYED).unwrap();
        let bob = store.get("bob@example.com").unwrap();
        let value = serde_json::to_value(SanitizedUser::from(bob)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 2,
                "name": "Bob",
                "email": "bob@example.com",
                "role": "user",
                "department": "sales"
            })
        );
        assert!(value.get("password").is_none());
    }
}
