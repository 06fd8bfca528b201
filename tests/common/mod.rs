#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use heavyweight::heavyweight_config::Settings;
use heavyweight::router::init_router;
use heavyweight::state::{AppState, init_app_state};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET_KEY: &str = "test-secret-key-at-least-32-characters-long";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Settings for tests, backed by an in-memory SQLite database unless
/// overridden.
pub fn test_settings(overrides: &[(&str, &str)]) -> Settings {
    let mut values: HashMap<String, String> = HashMap::from([
        ("SECRET_KEY".to_string(), TEST_SECRET_KEY.to_string()),
        (
            "POSTGRES_DATABASE_URL".to_string(),
            IN_MEMORY_DATABASE_URL.to_string(),
        ),
        ("DATABASE_ACQUIRE_TIMEOUT_SECS".to_string(), "1".to_string()),
    ]);
    for (key, value) in overrides {
        values.insert(key.to_string(), value.to_string());
    }

    Settings::from_source(|key| values.get(key).cloned()).unwrap()
}

/// Must run inside a Tokio runtime.
pub fn setup_test_state(overrides: &[(&str, &str)]) -> AppState {
    init_app_state(Arc::new(test_settings(overrides))).unwrap()
}

pub fn setup_test_app() -> Router {
    init_router(setup_test_state(&[]))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(app, request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}
