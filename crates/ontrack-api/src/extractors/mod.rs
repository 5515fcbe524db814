//! Custom Axum extractors.
//!
//! Each wraps a stock extractor and turns its rejection into an
//! [`crate::error::ApiError`] so clients always get the failure
//! envelope.

pub mod json;
pub mod path;
pub mod query;

pub use json::ApiJson;
pub use path::TodoId;
pub use query::ApiQuery;
