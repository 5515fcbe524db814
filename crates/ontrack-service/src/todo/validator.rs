//! Field-level validation for todo requests.
//!
//! Structural rules (required, length) come from the `validator` derives on
//! the request types and short-circuit. Content rules run only once the
//! structure is acceptable and are collected exhaustively.

use validator::{Validate, ValidationErrors};

use ontrack_core::error::FieldError;
use ontrack_core::types::Patch;

use super::request::{
    CreateTodoRequest, DESCRIPTION_MAX_CHARS, ListTodosRequest, TITLE_MAX_CHARS,
    UpdateTodoRequest,
};

/// Share of disallowed characters above which a title is rejected.
const SPECIAL_CHAR_RATIO: f64 = 0.3;
/// Code points at or above this value (Cyrillic onwards) count as letters.
const EXTENDED_ALPHABET_START: char = '\u{0400}';

/// Stateless rule checker for create, update, and list requests.
///
/// Each method returns every violated rule in order; an empty list means
/// the request is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoValidator;

impl TodoValidator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a create request.
    pub fn validate_create(&self, req: &CreateTodoRequest) -> Vec<FieldError> {
        if let Err(errors) = req.validate() {
            return to_field_errors(&errors);
        }
        content_rules(&req.title, req.description.as_deref())
    }

    /// Validates only the fields present in an update request.
    pub fn validate_update(&self, req: &UpdateTodoRequest) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match &req.title {
            Patch::Absent => {}
            Patch::Null => errors.push(blank_title()),
            Patch::Value(title) => {
                if title.trim().chars().count() > TITLE_MAX_CHARS {
                    errors.push(FieldError::new(
                        "title",
                        "Title must not exceed 255 characters",
                        "max",
                    ));
                }
                let description = req.description.as_value().map(String::as_str);
                errors.extend(content_rules(title, description));
            }
        }

        if let Patch::Value(description) = &req.description {
            if description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
                errors.push(FieldError::new(
                    "description",
                    "Description must not exceed 1000 characters",
                    "max",
                ));
            }
        }

        if req.completed == Patch::Null {
            errors.push(FieldError::new(
                "completed",
                "Completed must be true or false",
                "required",
            ));
        }

        errors
    }

    /// Validates list query values as the client sent them.
    pub fn validate_filter(&self, req: &ListTodosRequest) -> Vec<FieldError> {
        match req.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => to_field_errors(&errors),
        }
    }
}

/// Content-quality rules shared by create and update.
fn content_rules(title: &str, description: Option<&str>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let title = title.trim();

    if title.is_empty() {
        errors.push(blank_title());
    }

    if is_only_digits(title) {
        errors.push(FieldError::new(
            "title",
            "Title cannot contain only digits",
            "content_quality",
        ));
    }

    if has_excessive_special_chars(title) {
        errors.push(FieldError::new(
            "title",
            "Title contains too many special characters",
            "content_quality",
        ));
    }

    if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
        if description == title {
            errors.push(FieldError::new(
                "description",
                "Description should not be identical to title",
                "unique_content",
            ));
        }
    }

    errors
}

fn blank_title() -> FieldError {
    FieldError::new(
        "title",
        "Title cannot be empty or contain only whitespace",
        "notblank",
    )
}

fn is_only_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c >= EXTENDED_ALPHABET_START
}

fn has_excessive_special_chars(s: &str) -> bool {
    let total = s.chars().count();
    if total == 0 {
        return false;
    }
    let special = s.chars().filter(|c| !is_allowed_char(*c)).count();
    special as f64 / total as f64 > SPECIAL_CHAR_RATIO
}

/// Flatten derive errors into field errors, `title` before `description`.
fn to_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                FieldError::new(field.clone(), message, e.code.to_string())
            })
        })
        .collect();
    out.sort_by_key(|e| field_rank(&e.field));
    out
}

fn field_rank(field: &str) -> u8 {
    match field {
        "title" => 0,
        "description" => 1,
        "search" => 2,
        "page" => 3,
        "limit" => 4,
        _ => 5,
    }
}
