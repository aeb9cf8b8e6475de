use serde_json::{Map, Value};

/// Credential submission for `POST /api/login`.
///
/// Fields are read independently from the body's JSON object, so a badly typed
/// field never hides the others.
#[derive(Debug, Clone, PartialEq)]
pub struct Login {
    pub email: Option<Value>,
    pub password: Option<Value>,
    /// Defaults to `true` when absent or not a boolean.
    pub remember: bool,
}

impl Default for Login {
    fn default() -> Self {
        Self {
            email: None,
            password: None,
            remember: true,
        }
    }
}

/// Outcome of the presence check on a [`Login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials<'a> {
    /// `email` or `password` is absent, null, or empty.
    Missing,
    /// Both are present but at least one is not a string; no stored user can match.
    Unmatchable,
    Text { email: &'a str, password: &'a str },
}

impl Login {
    /// Decode a raw request body.
    ///
    /// An empty body, malformed JSON, or a non-object document decodes to an
    /// empty submission, which then fails the presence check.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self::from_map(&map),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            email: map.get("email").cloned(),
            password: map.get("password").cloned(),
            remember: map
                .get("remember")
                .and_then(Value::as_bool)
                .unwrap_or(true),
        }
    }

    pub fn credentials(&self) -> Credentials<'_> {
        if is_blank(self.email.as_ref()) || is_blank(self.password.as_ref()) {
            return Credentials::Missing;
        }
        match (
            self.email.as_ref().and_then(Value::as_str),
            self.password.as_ref().and_then(Value::as_str),
        ) {
            (Some(email), Some(password)) => Credentials::Text { email, password },
            _ => Credentials::Unmatchable,
        }
    }
}

/// Absent, `null`, `false`, zero, or an empty string/array/object.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}
