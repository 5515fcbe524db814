//! Integration tests for the todo endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_todo() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/todos",
            Some(json!({ "title": "  Buy milk  " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Todo created successfully");

    let data = &response.body["data"];
    assert!(data["id"].as_i64().expect("id") > 0);
    assert_eq!(data["title"], "Buy milk");
    assert_eq!(data["description"], "");
    assert_eq!(data["completed"], false);
    assert_eq!(data["created_at"], data["updated_at"]);
}

#[tokio::test]
async fn test_create_todo_missing_title() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/v1/todos", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"][0]["field"], "title");
    assert_eq!(response.body["details"][0]["tag"], "required");
}

#[tokio::test]
async fn test_create_todo_content_rules() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/v1/todos", Some(json!({ "title": "12345" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"][0]["tag"], "content_quality");

    let response = app
        .request(
            "POST",
            "/api/v1/todos",
            Some(json!({ "title": "Walk dog", "description": "Walk dog" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"][0]["field"], "description");
    assert_eq!(response.body["details"][0]["tag"], "unique_content");
}

#[tokio::test]
async fn test_create_todo_invalid_json() {
    let app = helpers::TestApp::new();

    let response = app
        .request_raw("POST", "/api/v1/todos", "{\"title\": ")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_JSON");

    let response = app
        .request("POST", "/api/v1/todos", Some(json!({ "title": 42 })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_get_todo() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Read book", Some("Chapter 3")).await;
    let id = created["id"].as_i64().expect("id");

    let response = app.request("GET", &format!("/api/v1/todos/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Read book");
    assert_eq!(response.body["data"]["description"], "Chapter 3");
}

#[tokio::test]
async fn test_get_todo_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/todos/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "TODO_NOT_FOUND");
    assert_eq!(response.body["message"], "Todo with ID 999 not found");
}

#[tokio::test]
async fn test_invalid_id() {
    let app = helpers::TestApp::new();

    for path in ["/api/v1/todos/abc", "/api/v1/todos/0", "/api/v1/todos/-4"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.body["code"], "INVALID_ID", "{path}");
    }
}

#[tokio::test]
async fn test_list_todos_pagination() {
    let app = helpers::TestApp::new();
    for i in 0..25 {
        app.create_todo(&format!("Task {i}"), None).await;
    }

    let response = app.request("GET", "/api/v1/todos?limit=10", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["items"].as_array().expect("items").len(), 10);
    assert_eq!(data["items"][0]["title"], "Task 24");
    assert_eq!(data["pagination"]["total"], 25);
    assert_eq!(data["pagination"]["total_pages"], 3);
    assert_eq!(data["pagination"]["has_next"], true);
    assert_eq!(data["pagination"]["has_prev"], false);

    let response = app
        .request("GET", "/api/v1/todos?page=3&limit=10", None)
        .await;
    let data = &response.body["data"];
    assert_eq!(data["items"].as_array().expect("items").len(), 5);
    assert_eq!(data["pagination"]["current_page"], 3);
    assert_eq!(data["pagination"]["has_next"], false);
    assert_eq!(data["pagination"]["has_prev"], true);
}

#[tokio::test]
async fn test_list_todos_empty() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/todos", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["items"], json!([]));
    assert_eq!(data["pagination"]["total"], 0);
    assert_eq!(data["pagination"]["total_pages"], 1);
    assert_eq!(data["pagination"]["per_page"], 10);
}

#[tokio::test]
async fn test_list_todos_filters() {
    let app = helpers::TestApp::new();
    app.create_todo("Buy Milk", None).await;
    app.create_todo("Groceries", Some("eggs and milk")).await;
    let walk = app.create_todo("Walk dog", None).await;
    let walk_id = walk["id"].as_i64().expect("id");
    app.request("PATCH", &format!("/api/v1/todos/{walk_id}/toggle"), None)
        .await;

    let response = app.request("GET", "/api/v1/todos?search=MILK", None).await;
    assert_eq!(response.body["data"]["pagination"]["total"], 2);

    let response = app
        .request("GET", "/api/v1/todos?completed=true", None)
        .await;
    assert_eq!(response.body["data"]["pagination"]["total"], 1);
    assert_eq!(response.body["data"]["items"][0]["title"], "Walk dog");

    let response = app
        .request("GET", "/api/v1/todos?completed=false&search=milk", None)
        .await;
    assert_eq!(response.body["data"]["pagination"]["total"], 2);
}

#[tokio::test]
async fn test_list_todos_rejects_bad_query() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/todos?limit=0", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"][0]["field"], "limit");

    let response = app.request("GET", "/api/v1/todos?limit=101", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/v1/todos?completed=maybe", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_update_todo_partial() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Write report", Some("Q3 numbers")).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/todos/{id}"),
            Some(json!({ "completed": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Todo updated successfully");
    let data = &response.body["data"];
    assert_eq!(data["title"], "Write report");
    assert_eq!(data["description"], "Q3 numbers");
    assert_eq!(data["completed"], true);
}

#[tokio::test]
async fn test_update_todo_clears_description() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Write report", Some("Q3 numbers")).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/todos/{id}"),
            Some(json!({ "title": " Write summary ", "description": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Write summary");
    assert_eq!(response.body["data"]["description"], "");
}

#[tokio::test]
async fn test_update_todo_validation() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Write report", None).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/todos/{id}"),
            Some(json!({ "title": null })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"][0]["tag"], "notblank");

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/todos/{id}"),
            Some(json!({ "title": "!!!!" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"][0]["tag"], "content_quality");
}

#[tokio::test]
async fn test_update_title_equal_description_rejected() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Alpha", None).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/todos/{id}"),
            Some(json!({ "title": "Beta", "description": " Beta " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"][0]["field"], "description");
    assert_eq!(response.body["details"][0]["tag"], "unique_content");

    let response = app.request("GET", &format!("/api/v1/todos/{id}"), None).await;
    assert_eq!(response.body["data"]["title"], "Alpha");
}

#[tokio::test]
async fn test_update_missing_todo_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/v1/todos/404",
            Some(json!({ "title": "12345" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "TODO_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_todo() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Old task", None).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .request("DELETE", &format!("/api/v1/todos/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.raw_len, 0);

    let response = app.request("GET", &format!("/api/v1/todos/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/v1/todos/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_todo() {
    let app = helpers::TestApp::new();
    let created = app.create_todo("Water plants", None).await;
    let id = created["id"].as_i64().expect("id");
    let path = format!("/api/v1/todos/{id}/toggle");

    let response = app.request("PATCH", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Completion status toggled successfully"
    );
    assert_eq!(response.body["data"]["completed"], true);

    let response = app.request("PATCH", &path, None).await;
    assert_eq!(response.body["data"]["completed"], false);

    let response = app.request("PATCH", "/api/v1/todos/777/toggle", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_and_method() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/nothing", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "ROUTE_NOT_FOUND");

    let response = app.request("POST", "/api/v1/todos/1", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["code"], "METHOD_NOT_ALLOWED");

    let response = app.request("DELETE", "/api/v1/todos", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/todos", None).await;

    assert!(response.headers.contains_key("x-request-id"));
}
