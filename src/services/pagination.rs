// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page slicing with clamped page numbers and a fixed set of page sizes.
//!
//! Page parameters come straight from the query string. Anything that does
//! not parse, or is out of range, falls back to the default instead of
//! producing an error.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;
pub const ALLOWED_PER_PAGE: [usize; 3] = [10, 20, 30];

/// A requested page number (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a request from already-parsed numbers, applying the same
    /// fallbacks as `from_params`.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: if ALLOWED_PER_PAGE.contains(&per_page) {
                per_page
            } else {
                DEFAULT_PER_PAGE
            },
        }
    }

    /// Build a request from raw query values.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = page.and_then(parse_positive).unwrap_or(DEFAULT_PAGE);
        let per_page = per_page.and_then(parse_positive).unwrap_or(DEFAULT_PER_PAGE);
        Self::new(page, per_page)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }
}

/// Parse a strictly positive integer; anything else is `None`.
fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n >= 1)
}

/// Pagination metadata for a computed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PageInfo {
    /// Effective page after clamping (1-based)
    pub current_page: usize,
    pub per_page: usize,
    /// 0 when there are no items
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first displayed item, 0 when empty
    pub start_index: usize,
    /// 1-based index of the last displayed item, 0 when empty
    pub end_index: usize,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Compute the `[start, end)` bounds and metadata for `total` items.
pub fn page_bounds(total: usize, request: PageRequest) -> (usize, usize, PageInfo) {
    let per_page = request.per_page();
    let total_pages = total.div_ceil(per_page);

    let current_page = if total_pages > 0 {
        request.page().min(total_pages)
    } else {
        1
    };

    let start = (current_page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    let (start_index, end_index) = if total == 0 { (0, 0) } else { (start + 1, end) };

    let info = PageInfo {
        current_page,
        per_page,
        total_pages,
        total_items: total,
        start_index,
        end_index,
    };
    (start, end, info)
}

/// Slice `items` down to the requested page.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let (start, end, info) = page_bounds(items.len(), request);
    Page {
        items: items[start..end].to_vec(),
        info,
    }
}
