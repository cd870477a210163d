//! Local stand-in for the Telegram Bot API, used by unit tests.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Router,
};
use tokio::net::TcpListener;

use crate::sms::FormFields;

/// Base URL nothing listens on; requests fail with connection refused.
pub const UNREACHABLE_BASE: &str = "http://127.0.0.1:1";

/// One request received by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub fields: FormFields,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

pub struct MockTelegram {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTelegram {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn record(State(state): State<MockState>, uri: Uri, body: String) -> StatusCode {
    state.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_string(),
        fields: FormFields::parse(body.as_bytes()),
    });
    state.status
}

/// Serve on an ephemeral port, answering every request with `status`.
pub async fn spawn_telegram(status: StatusCode) -> MockTelegram {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(record).with_state(MockState {
        status,
        calls: calls.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockTelegram {
        base_url: format!("http://{addr}"),
        calls,
    }
}
