//! Shared request parameter types for API handlers.
//!
//! Common query and body structs that appear across multiple handler
//! modules are extracted here to avoid duplication.

use medley_core::pagination::Page;
use serde::Deserialize;

/// Generic pagination parameters (`?page=`), 1-based.
///
/// Used by any handler that supports paginated listing. Missing or
/// out-of-range values are clamped by [`Page`].
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// The validated page request.
    pub fn page(&self) -> Page {
        Page::new(self.page.unwrap_or(1))
    }
}

/// Request body for the booking search endpoints
/// (`POST /venues/search`, `POST /artists/search`).
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub search_term: String,
}
