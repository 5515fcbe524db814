//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use ontrack_api::{AppState, build_app};
use ontrack_core::config::AppConfig;
use ontrack_database::{InMemoryTodoRepository, TodoRepository};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_repo(Arc::new(InMemoryTodoRepository::new()))
    }

    /// Create a test application over the given repository
    pub fn with_repo(repo: Arc<dyn TodoRepository>) -> Self {
        let config = AppConfig::default();
        let state = AppState::new(config.clone(), repo);
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Create a todo through the API and return its `data` object
    pub async fn create_todo(&self, title: &str, description: Option<&str>) -> Value {
        let mut body = json!({ "title": title });
        if let Some(description) = description {
            body["description"] = json!(description);
        }

        let response = self.request("POST", "/api/v1/todos", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "create failed: {}",
            response.body
        );
        response.body["data"].clone()
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str).await
    }

    /// Send a request with a raw body string
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let raw_len = body_bytes.len();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            raw_len,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when empty or not JSON
    pub body: Value,
    /// Body length in bytes
    pub raw_len: usize,
}
