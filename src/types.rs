//! Request and response types for the book-search surface.

use serde::{Deserialize, Serialize};

/// Hard cap on page size sent upstream; requests asking for more share a
/// cache entry with requests asking for exactly this many.
pub const MAX_PAGE_SIZE: u32 = 40;

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Result ordering understood by the book-search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Relevance,
    Newest,
}

impl OrderBy {
    /// Wire value for the upstream `orderBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Relevance => "relevance",
            OrderBy::Newest => "newest",
        }
    }
}

/// A validated book-search request.
///
/// ```rust
/// # use bookgate::{OrderBy, SearchRequest};
/// let request = SearchRequest::new("clean code")
///     .order_by(OrderBy::Newest)
///     .max_results(20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search phrase; must be non-empty after trimming.
    pub query: String,
    pub order_by: OrderBy,
    /// Zero-based offset into the upstream result set.
    pub start_index: u32,
    /// Requested page size; capped to [`MAX_PAGE_SIZE`] before any cache
    /// lookup or upstream call.
    pub max_results: u32,
}

impl SearchRequest {
    /// Create a request with default paging and ordering.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            order_by: OrderBy::default(),
            start_index: 0,
            max_results: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the result ordering.
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the zero-based start index.
    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    /// Set the page size. Values above [`MAX_PAGE_SIZE`] are capped during
    /// normalization.
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Copy with `max_results` capped. The orchestrator normalizes before
    /// building the cache key, so a request for 60 and a request for 40
    /// are the same request.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            max_results: self.max_results.min(MAX_PAGE_SIZE),
            ..self.clone()
        }
    }

    /// Deterministic cache key over the four normalized fields.
    pub(crate) fn cache_key(&self) -> String {
        format!(
            "q={}|order={}|start={}|max={}",
            self.query,
            self.order_by.as_str(),
            self.start_index,
            self.max_results
        )
    }
}

/// Normalized search result returned to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub total_items: u32,
    /// Order preserved from upstream.
    pub items: Vec<BookRecord>,
}

/// A single book in the gateway's stable output schema.
///
/// Missing upstream fields are filled with defaults during mapping;
/// `description` and `thumbnail` stay absent instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub published_date: String,
    pub page_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
