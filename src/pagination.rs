//! Pagination windows and listing metadata.
//!
//! Raw `page`/`limit` query values resolve asymmetrically on purpose:
//! absent or non-numeric values fall back to defaults, values below one
//! are rejected, and limits above [`MAX_ITEMS_PER_PAGE`] are silently
//! clamped rather than rejected. Callers rely on this exact behavior.

use serde::Serialize;
use thiserror::Error;

/// Items returned per page when the client does not ask for a limit.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Hard ceiling on the page size; larger requests are clamped, not rejected.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Errors produced while resolving raw pagination parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageParamError {
    /// An explicit page number below one was requested.
    #[error("Page number must be greater than 0")]
    InvalidPage,
    /// An explicit limit below one was requested.
    #[error("Limit must be greater than 0")]
    InvalidLimit,
}

/// A `(page, per_page)` window over a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Page size, already clamped to [`MAX_ITEMS_PER_PAGE`].
    pub per_page: usize,
}

impl Pagination {
    /// Number of items skipped before this page starts.
    ///
    /// Saturates instead of overflowing: a page number near `usize::MAX`
    /// must yield an empty result set, not a panic or a wrapped-around
    /// offset that lands back on page one.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Resolve raw query-string values into a [`Pagination`] window.
///
/// Absent or non-numeric values default to page 1 and
/// [`DEFAULT_ITEMS_PER_PAGE`]; explicit values below one are rejected;
/// limits above [`MAX_ITEMS_PER_PAGE`] are clamped.
pub fn resolve_params(
    page: Option<&str>,
    limit: Option<&str>,
) -> Result<Pagination, PageParamError> {
    let page = match page.map(str::trim).and_then(|raw| raw.parse::<i64>().ok()) {
        Some(n) if n < 1 => return Err(PageParamError::InvalidPage),
        Some(n) => n as usize,
        None => 1,
    };

    let per_page = match limit.map(str::trim).and_then(|raw| raw.parse::<i64>().ok()) {
        Some(n) if n < 1 => return Err(PageParamError::InvalidLimit),
        Some(n) => (n as usize).min(MAX_ITEMS_PER_PAGE),
        None => DEFAULT_ITEMS_PER_PAGE,
    };

    Ok(Pagination { page, per_page })
}

/// Listing metadata returned alongside every page of products.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub limit: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageInfo {
    /// Compute metadata for a window over `total_items` matching entities.
    ///
    /// Requesting a page past the end is not an error; it simply yields
    /// `has_next_page = false` next to an empty result set.
    pub fn new(pagination: Pagination, total_items: usize) -> Self {
        let total_pages = total_items.div_ceil(pagination.per_page);
        Self {
            current_page: pagination.page,
            total_pages,
            total_items,
            limit: pagination.per_page,
            has_next_page: pagination.page < total_pages,
            has_prev_page: pagination.page > 1,
        }
    }
}
