//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Maximum page size for paginated listings.
pub const MAX_LIMIT: i64 = 100;

/// Default page size for paginated listings.
pub const DEFAULT_LIMIT: i64 = 10;

/// Generic page-based pagination parameters (`?page=&limit=`).
///
/// Pages are 1-based; out-of-range values are clamped rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Resolve to a clamped `(page, limit, offset)` triple.
    pub fn resolve(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (page, limit, (page - 1) * limit)
    }
}
