//! Pagination utilities for API responses.
//!
//! Page-based pagination driven by four query parameters:
//!
//! - `page`: Page number (1-indexed, default: 1)
//! - `size`: Items per page (default: 10)
//! - `query`: Optional free-text search term
//! - `order`: Sort direction, `asc` or `desc`. When omitted the source order
//!   is kept; [`PaginationParams::order`] falls back to `desc` for callers that
//!   always sort.
//!
//! Empty query-string values are treated as absent. `page` and `size` below 1
//! fail validation at the HTTP boundary; the accessors additionally clamp them
//! so the window arithmetic never sees a non-positive value.
//!
//! # Window and metadata
//!
//! For a total of `T` items the requested window is
//! `[(page - 1) * size, page * size)` clamped to `[0, T]`.
//!
//! `total_no_pages` is `T / size` using truncating integer division, so a
//! trailing partial page is not counted: 4 items with `size = 10` report
//! `total_no_pages = 0` even though the first page holds all 4 items.
//!
//! # Example
//!
//! ```ignore
//! async fn list_names(
//!     ValidatedQuery(params): ValidatedQuery<PaginationParams>,
//! ) -> PaginatedResponse<Name> {
//!     let (page, meta) = paginate(&names, &params);
//!     PaginatedResponse::new(page, meta)
//! }
//! ```

use std::cmp::Ordering;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::serde::{deserialize_optional, deserialize_optional_i64, deserialize_optional_string};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_SIZE: i64 = 10;

/// Sort direction for list endpoints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Sorts `items` by `key` in this direction. The sort is stable.
    pub fn sort_by_key<T, K, F>(self, items: &mut [T], mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        items.sort_by(|a, b| self.apply(key(a).cmp(&key(b))));
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Metadata about a paginated response.
///
/// # Example JSON
///
/// ```json
/// {
///   "total_no_items": 4,
///   "total_no_pages": 0,
///   "page": 1,
///   "size": 10,
///   "count": 4,
///   "has_next_page": false,
///   "has_prev_page": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// The total number of items available
    pub total_no_items: i64,
    /// The total number of pages (truncating division of items by size)
    pub total_no_pages: i64,
    /// The current page number
    pub page: i64,
    /// Max number of items to return per page
    pub size: i64,
    /// The number of items returned
    pub count: i64,
    /// Indicates if there is a next page
    pub has_next_page: bool,
    /// Indicates if there is a previous page
    pub has_prev_page: bool,
}

impl PaginationMeta {
    /// Derives the metadata for a page of `count` items out of `total`.
    pub fn new(total: i64, params: &PaginationParams, count: i64) -> Self {
        let page = params.page();
        let size = params.size();
        let total_no_pages = total.max(0) / size;

        Self {
            total_no_items: total,
            total_no_pages,
            page,
            size,
            count,
            has_next_page: page < total_no_pages,
            has_prev_page: page > 1,
        }
    }
}

/// Query parameters for pagination (the pagination descriptor).
///
/// # Example
///
/// ```ignore
/// // GET /example?page=2&size=20&order=asc
/// let params = PaginationParams::new(None, 2, 20, SortOrder::Asc);
///
/// assert_eq!(params.offset(), 20); // (page - 1) * size
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Optional search term
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub query: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: Option<i64>,
    /// Max number of items per page (default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[validate(range(min = 1, message = "size must be greater than or equal to 1"))]
    pub size: Option<i64>,
    /// Sort direction (omitted: source order)
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub order: Option<SortOrder>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            query: None,
            page: Some(DEFAULT_PAGE),
            size: Some(DEFAULT_SIZE),
            order: None,
        }
    }
}

impl PaginationParams {
    pub fn new(query: Option<String>, page: i64, size: i64, order: SortOrder) -> Self {
        Self {
            query,
            page: Some(page),
            size: Some(size),
            order: Some(order),
        }
    }

    /// Returns the page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    /// Returns the page size, clamped to a minimum of 1.
    #[must_use]
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_SIZE).max(1)
    }

    /// The requested direction, if the client sent one.
    #[must_use]
    pub fn requested_order(&self) -> Option<SortOrder> {
        self.order
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }

    /// Returns the trimmed search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Number of items skipped before the requested page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.size())
    }

    /// Index range of the requested page within a collection of `total` items.
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(total);
        let size = usize::try_from(self.size()).unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(total);
        start..end
    }
}

/// Cuts the requested page out of an ordered collection.
pub fn paginate<T: Clone>(items: &[T], params: &PaginationParams) -> (Vec<T>, PaginationMeta) {
    let page = items
        .get(params.window(items.len()))
        .map(<[T]>::to_vec)
        .unwrap_or_default();

    let total = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let count = i64::try_from(page.len()).unwrap_or(i64::MAX);
    let meta = PaginationMeta::new(total, params, count);

    (page, meta)
}
