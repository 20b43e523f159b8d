//! Listing envelopes and pagination utilities

use serde::{Deserialize, Serialize};

/// A collection response from the record store.
///
/// Collection endpoints answer either with a bare JSON array or with a
/// paginated envelope:
///
/// ```text
/// [ {...}, {...} ]
/// { "count": 42, "next": "...?page=2", "previous": null, "results": [ {...} ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paginated(Envelope<T>),
    Plain(Vec<T>),
}

/// Paginated envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: Option<usize>,

    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,

    pub results: Vec<T>,
}

impl<T> Listing<T> {
    /// Whether the store returned a paginated envelope
    pub fn is_paginated(&self) -> bool {
        matches!(self, Listing::Paginated(_))
    }

    /// The records on this page
    pub fn into_records(self) -> Vec<T> {
        match self {
            Listing::Paginated(envelope) => envelope.results,
            Listing::Plain(records) => records,
        }
    }
}

/// One page of records plus pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The records on this page
    pub items: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after search)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata, clamping `page` into the valid range
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);
        let page = page.clamp(1, total_pages.max(1));
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }

    /// Index range of this page within the full list
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.limit).min(self.total);
        let end = (start + self.limit).min(self.total);
        start..end
    }
}
