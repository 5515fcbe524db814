//! Core type definitions used across the OnTrack workspace.

pub mod filter;
pub mod pagination;
pub mod patch;

pub use filter::TodoFilter;
pub use pagination::{PageRequest, PageResponse, Pagination};
pub use patch::Patch;
