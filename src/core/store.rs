//! In-memory searching, sorting and pagination of fetched record lists

use crate::core::entity::Record;
use crate::core::field::FieldValue;
use crate::core::query::{Page, PaginationMeta};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Sort applied when a column header is selected.
    ///
    /// Selecting the column that is currently sorted ascending flips it to
    /// descending; anything else sorts ascending.
    pub fn toggle(current: Option<&SortConfig>, key: &str) -> SortConfig {
        match current {
            Some(c) if c.key == key && c.direction == SortDirection::Asc => Self::desc(key),
            _ => Self::asc(key),
        }
    }

    /// Parse `field`, `field:asc` or `field:desc`
    pub fn parse(expr: &str) -> Option<SortConfig> {
        let (key, direction) = match expr.split_once(':') {
            Some((key, "asc")) => (key, SortDirection::Asc),
            Some((key, "desc")) => (key, SortDirection::Desc),
            Some(_) => return None,
            None => (expr, SortDirection::Asc),
        };
        let key = key.trim();
        (!key.is_empty()).then(|| SortConfig {
            key: key.to_string(),
            direction,
        })
    }

    fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        let a = a.field_value(&self.key).unwrap_or(FieldValue::Null);
        let b = b.field_value(&self.key).unwrap_or(FieldValue::Null);
        match self.direction {
            SortDirection::Asc => a.compare(&b),
            SortDirection::Desc => b.compare(&a),
        }
    }
}

/// View state over a fetched list: search query, sort column and page.
///
/// The list itself stays owned by the caller; [`ListView::apply`] produces
/// the visible page without mutating it.
#[derive(Debug, Clone)]
pub struct ListView {
    search: String,
    sort: Option<SortConfig>,
    default_sort: Option<SortConfig>,
    page: usize,
    page_size: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: None,
            default_sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Sort used while no column has been selected
    pub fn with_default_sort(mut self, sort: SortConfig) -> Self {
        self.default_sort = Some(sort);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the search query and go back to the first page
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Select a column header
    pub fn sort_by(&mut self, key: &str) -> &SortConfig {
        self.sort.insert(SortConfig::toggle(self.sort.as_ref(), key))
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Jump to a page. Out-of-range pages are clamped by [`ListView::apply`].
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Search, sort and slice `records` into the visible page
    pub fn apply<T: Record>(&self, records: &[T]) -> Page<T> {
        let mut visible = filter_records(records, &self.search);

        if let Some(sort) = self.sort.as_ref().or(self.default_sort.as_ref()) {
            sort_records(&mut visible, sort);
        }

        let pagination = PaginationMeta::new(self.page, self.page_size, visible.len());
        let items = visible[pagination.range()].to_vec();

        Page { items, pagination }
    }
}

/// Records whose indexed fields contain `query` (case-insensitive)
pub fn filter_records<T: Record>(records: &[T], query: &str) -> Vec<T> {
    records.iter().filter(|r| r.matches(query)).cloned().collect()
}

/// Stable sort by a field
pub fn sort_records<T: Record>(records: &mut [T], sort: &SortConfig) {
    records.sort_by(|a, b| sort.compare(a, b));
}
