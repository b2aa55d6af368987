//! Page-based pagination: the validated request and the metadata block
//! returned alongside list and search results.

use serde::Serialize;
use validator::Validate;

/// Page number used when `?page=` is omitted.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `?limit=` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 100;

/// A validated `(page, limit)` pair. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PageRequest {
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: i64,
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageMeta {
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        let total_pages = total_pages(total_items, request.limit);
        Self {
            current_page: request.page,
            total_pages,
            total_items,
            items_per_page: request.limit,
            has_next_page: request.page < total_pages,
            has_previous_page: request.page > 1,
        }
    }
}

/// `ceil(total / limit)`; zero when there are no rows.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
