//! Pagination and response envelope types

use serde::{Deserialize, Serialize};

/// Page selection for list endpoints.
///
/// A field is sent only when it is set and positive; `Some(0)` behaves like
/// `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-based page number
    pub page: Option<u32>,
    /// Items per page
    pub page_size: Option<u32>,
}

impl ListOptions {
    /// Create empty options (server defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Options for the page after this one, keeping the page size.
    ///
    /// An unset page counts as page 1.
    pub fn next_page(&self) -> Self {
        let current = self.page.filter(|p| *p > 0).unwrap_or(1);
        Self {
            page: Some(current.saturating_add(1)),
            page_size: self.page_size,
        }
    }

    /// Query parameters in wire order (`page`, then `pageSize`), positive values only.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size.filter(|s| *s > 0) {
            pairs.push(("pageSize", page_size.to_string()));
        }
        pairs
    }
}

/// Pagination state of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Items across all pages
    pub total_items: u64,
    /// Number of pages
    pub total_pages: u32,
}

/// A page of items from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Where this page sits in the full listing
    pub pagination: Pagination,
}

impl<T> ListResponse<T> {
    /// Whether another page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.pagination.page < self.pagination.total_pages
    }

    /// Options requesting the following page, or `None` on the last page.
    pub fn next_page_options(&self) -> Option<ListOptions> {
        self.has_next_page().then(|| ListOptions {
            page: Some(self.pagination.page + 1),
            page_size: Some(self.pagination.page_size),
        })
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Single-resource `{"data": T}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// The wrapped resource
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Unwrap the resource.
    pub fn into_inner(self) -> T {
        self.data
    }
}
