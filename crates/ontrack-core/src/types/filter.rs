//! Query-time filter for listing todos.

use serde::{Deserialize, Serialize};

use super::pagination::PageRequest;

/// Normalized list filter shared by every repository implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilter {
    /// Only return todos with this completion state.
    pub completed: Option<bool>,
    /// Case-insensitive substring matched against title or description.
    search: Option<String>,
    /// Paging window.
    pub page: PageRequest,
}

impl TodoFilter {
    /// Build a filter. A blank search term means "no search".
    pub fn new(completed: Option<bool>, search: Option<String>, page: PageRequest) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            completed,
            search,
            page,
        }
    }

    /// The search term, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// SQL `LIMIT`.
    pub fn limit(&self) -> u64 {
        self.page.limit()
    }

    /// SQL `OFFSET`.
    pub fn offset(&self) -> u64 {
        self.page.offset()
    }

    /// Whether a todo with these fields passes the completed and search predicates.
    pub fn matches(&self, title: &str, description: Option<&str>, completed: bool) -> bool {
        if self.completed.is_some_and(|c| c != completed) {
            return false;
        }
        match self.search() {
            None => true,
            Some(term) => {
                let needle = term.to_lowercase();
                title.to_lowercase().contains(&needle)
                    || description.is_some_and(|d| d.to_lowercase().contains(&needle))
            }
        }
    }
}
