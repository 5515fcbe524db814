//! Integration tests for the probes and store failure handling.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::json;

use ontrack_core::error::AppError;
use ontrack_core::result::AppResult;
use ontrack_core::types::TodoFilter;
use ontrack_database::TodoRepository;
use ontrack_entity::todo::{NewTodo, Todo};

/// A store whose every call fails as if the database were down.
#[derive(Debug)]
struct UnreachableRepository;

fn down() -> AppError {
    AppError::database("connection refused")
}

#[async_trait]
impl TodoRepository for UnreachableRepository {
    async fn create(&self, _data: &NewTodo) -> AppResult<Todo> {
        Err(down())
    }
    async fn get_by_id(&self, _id: i64) -> AppResult<Todo> {
        Err(down())
    }
    async fn get_all(&self, _filter: &TodoFilter) -> AppResult<Vec<Todo>> {
        Err(down())
    }
    async fn count(&self, _filter: &TodoFilter) -> AppResult<u64> {
        Err(down())
    }
    async fn update(&self, _todo: &Todo) -> AppResult<Todo> {
        Err(down())
    }
    async fn delete(&self, _id: i64) -> AppResult<()> {
        Err(down())
    }
    async fn health_check(&self) -> AppResult<()> {
        Err(down())
    }
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(response.body["time"].is_string());
}

#[tokio::test]
async fn test_ready() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/ready", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ready");
}

#[tokio::test]
async fn test_not_ready_when_store_is_down() {
    let app = helpers::TestApp::with_repo(Arc::new(UnreachableRepository));

    let response = app.request("GET", "/ready", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_store_failure_is_hidden() {
    let app = helpers::TestApp::with_repo(Arc::new(UnreachableRepository));

    let response = app
        .request("POST", "/api/v1/todos", Some(json!({ "title": "Buy milk" })))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "An unexpected error occurred");
    assert!(!response.body.to_string().contains("connection refused"));
}
