//! Request shapes accepted by the todo use cases.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use ontrack_core::types::{PageRequest, Patch, TodoFilter};
use ontrack_core::types::pagination::DEFAULT_PAGE_SIZE;

/// Maximum title length after trimming, in characters.
pub const TITLE_MAX_CHARS: usize = 255;
/// Maximum description length after trimming, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Body of `POST /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Required title. A missing key decodes as empty and fails validation.
    #[serde(default)]
    #[validate(custom(function = "title_length"))]
    pub title: String,
    /// Optional description.
    #[validate(custom(function = "description_length"))]
    pub description: Option<String>,
}

/// Body of `PUT /todos/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// New title; `null` is rejected.
    #[serde(default)]
    pub title: Patch<String>,
    /// New description; `null` or blank clears it.
    #[serde(default)]
    pub description: Patch<String>,
    /// New completion flag; `null` is rejected.
    #[serde(default)]
    pub completed: Patch<bool>,
}

/// Query of `GET /todos`. Values are validated as sent, then defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListTodosRequest {
    /// Filter by completion state.
    pub completed: Option<bool>,
    /// Substring matched against title or description.
    #[validate(length(
        max = 100,
        code = "max",
        message = "Search query is too long (max 100 characters)"
    ))]
    pub search: Option<String>,
    /// 1-based page number.
    #[validate(range(min = 1, code = "min", message = "Page number must be positive"))]
    pub page: Option<i64>,
    /// Page size.
    #[validate(range(
        min = 1,
        max = 100,
        code = "range",
        message = "Limit must be between 1 and 100"
    ))]
    pub limit: Option<i64>,
}

impl ListTodosRequest {
    /// Apply defaults and clamps, producing the repository filter.
    pub fn to_filter(&self) -> TodoFilter {
        let page = self.page.unwrap_or(1).max(1) as u64;
        let limit = self
            .limit
            .map(|l| l.max(1) as u64)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        TodoFilter::new(
            self.completed,
            self.search.clone(),
            PageRequest::new(page, limit),
        )
    }
}

fn title_length(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("required").with_message("title is required".into()));
    }
    if title.trim().chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::new("max")
            .with_message("title must not exceed 255 characters".into()));
    }
    Ok(())
}

fn description_length(description: &str) -> Result<(), ValidationError> {
    if description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::new("max")
            .with_message("description must not exceed 1000 characters".into()));
    }
    Ok(())
}
