//! # ontrack-core
//!
//! Core crate for OnTrack. Contains configuration schemas, the todo
//! filter and pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other OnTrack crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind, FieldError};
pub use result::AppResult;
