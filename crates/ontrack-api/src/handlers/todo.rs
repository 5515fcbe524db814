//! Todo CRUD and toggle handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use ontrack_core::types::PageResponse;
use ontrack_service::{CreateTodoRequest, ListTodosRequest, UpdateTodoRequest};

use crate::dto::{ApiResponse, TodoResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery, TodoId};
use crate::state::AppState;

/// POST /api/v1/todos
pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TodoResponse>>), ApiError> {
    let todo = state.todo_service.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            todo.into(),
            "Todo created successfully",
        )),
    ))
}

/// GET /api/v1/todos?completed=&search=&page=&limit=
pub async fn list_todos(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<ListTodosRequest>,
) -> Result<Json<ApiResponse<PageResponse<TodoResponse>>>, ApiError> {
    let page = state.todo_service.list(req).await?;
    Ok(Json(ApiResponse::ok(page.map(TodoResponse::from))))
}

/// GET /api/v1/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<Json<ApiResponse<TodoResponse>>, ApiError> {
    let todo = state.todo_service.get(id).await?;
    Ok(Json(ApiResponse::ok(todo.into())))
}

/// PUT /api/v1/todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    ApiJson(req): ApiJson<UpdateTodoRequest>,
) -> Result<Json<ApiResponse<TodoResponse>>, ApiError> {
    let todo = state.todo_service.update(id, req).await?;
    Ok(Json(ApiResponse::with_message(
        todo.into(),
        "Todo updated successfully",
    )))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<StatusCode, ApiError> {
    state.todo_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/todos/{id}/toggle
pub async fn toggle_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> Result<Json<ApiResponse<TodoResponse>>, ApiError> {
    let todo = state.todo_service.toggle_complete(id).await?;
    Ok(Json(ApiResponse::with_message(
        todo.into(),
        "Completion status toggled successfully",
    )))
}
