#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use loginsvc_backend::state::AppState;
use loginsvc_backend::store::UserStore;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub const USERS_JSON: &str = r#"{
    "users": {
        "alice@example.com": {
            "id": 1,
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret123",
            "role": "admin"
        },
        "bob@example.com": {
            "id": 2,
            "name": "Bob",
            "email": "bob@example.com",
            "password": "hunter2",
            "role": "user",
            "department": "sales"
        }
    }
}"#;

pub fn test_state() -> Arc<AppState> {
    let users = UserStore::from_json_str(USERS_JSON).expect("parse fixture users");
    Arc::new(AppState::new(users))
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture every event this crate emits on the current thread until the guard drops.
///
/// `#[tokio::test]` runs on a current-thread runtime, so handler events land
/// on the test's own thread and tests running in parallel stay isolated.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_env_filter(EnvFilter::new("loginsvc_backend=trace"))
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
