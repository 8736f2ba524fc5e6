//! Shared utilities for integration tests.
#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use bank_details::config::ServiceConfig;
use bank_details::notify::{Notifier, Toast};

pub const TEST_TOKEN: &str = "test-token";

/// Programmable stand-in for the profile service.
#[derive(Default)]
pub struct MockBackend {
    pub profile: Mutex<Option<Value>>,
    pub banks: Mutex<HashMap<String, (String, String)>>,
    pub update_failure: Mutex<Option<(u16, String)>>,
    pub lookup_delay: Mutex<Duration>,
    pub auth_headers: Mutex<Vec<Option<String>>>,
    pub request_ids: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<Value>>,
}

impl MockBackend {
    pub fn with_profile(self, profile: Value) -> Self {
        *self.profile.lock().unwrap() = Some(profile);
        self
    }

    pub fn with_bank(self, code: &str, bank_name: &str, branch: &str) -> Self {
        self.banks
            .lock()
            .unwrap()
            .insert(code.to_string(), (bank_name.to_string(), branch.to_string()));
        self
    }

    pub fn failing_updates(self, status: u16, body: &str) -> Self {
        *self.update_failure.lock().unwrap() = Some((status, body.to_string()));
        self
    }

    pub fn with_lookup_delay(self, delay: Duration) -> Self {
        *self.lookup_delay.lock().unwrap() = delay;
        self
    }

    fn record(&self, headers: &HeaderMap) {
        let auth = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(auth);
        if let Some(id) = headers.get("x-request-id").and_then(|h| h.to_str().ok()) {
            self.request_ids.lock().unwrap().push(id.to_string());
        }
    }
}

async fn get_profile(State(backend): State<Arc<MockBackend>>, headers: HeaderMap) -> Response {
    backend.record(&headers);
    let profile = backend.profile.lock().unwrap().clone();
    match profile {
        Some(profile) => Json(profile).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found" })),
        )
            .into_response(),
    }
}

async fn lookup_ifsc(
    State(backend): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Response {
    backend.record(&headers);
    let delay = *backend.lookup_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let bank = backend.banks.lock().unwrap().get(&code).cloned();
    match bank {
        Some((bank_name, branch)) => {
            Json(json!({ "bankName": bank_name, "branch": branch })).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "IFSC code not found" })),
        )
            .into_response(),
    }
}

async fn update_profile(
    State(backend): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    backend.record(&headers);
    backend.updates.lock().unwrap().push(body.clone());

    let failure = backend.update_failure.lock().unwrap().clone();
    if let Some((status, text)) = failure {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, text).into_response();
    }

    let mut guard = backend.profile.lock().unwrap();
    let mut profile = guard.clone().unwrap_or_else(|| json!({ "id": "u-1" }));
    profile["bankDetails"] = body["bankDetails"].clone();
    *guard = Some(profile.clone());
    Json(profile).into_response()
}

/// Serve the mock on an ephemeral port and return its address.
pub async fn start_mock_service(backend: Arc<MockBackend>) -> SocketAddr {
    let app = Router::new()
        .route("/api/users/me", get(get_profile).put(update_profile))
        .route("/api/users/ifsc/{code}", get(lookup_ifsc))
        .with_state(backend);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Client settings pointing at a mock service.
pub fn service_config(addr: SocketAddr) -> ServiceConfig {
    ServiceConfig {
        base_url: format!("http://{}/api", addr),
        bearer_token: Some(TEST_TOKEN.to_string()),
        request_timeout_secs: 1,
        connect_timeout_secs: 1,
    }
}

/// Notifier that keeps every toast for inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
