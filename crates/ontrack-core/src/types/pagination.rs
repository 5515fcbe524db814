//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized paging parameters. Always within range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Total number of pages (at least 1).
    pub total_pages: u64,
    /// Current page number (1-based).
    pub current_page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Compute pagination metadata for a page request and a total count.
    pub fn new(page: &PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(page.page_size).max(1);
        Self {
            total,
            total_pages,
            current_page: page.page,
            per_page: page.page_size,
            has_next: page.page < total_pages,
            has_prev: page.page > 1,
        }
    }
}

/// A page of items with its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Paging metadata.
    pub pagination: Pagination,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::new(page, total),
        }
    }

    /// Convert every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
