//! Result types for query application

use serde::Serialize;

use crate::record::Record;

/// Records visible after a query, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    /// Visible records
    pub records: Vec<Record>,
    /// Size of the input collection
    pub total_count: usize,
}

impl ExecutionResult {
    /// Creates an empty result over an empty collection
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
        }
    }

    /// Returns true if nothing matched.
    ///
    /// This is a normal outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of visible records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of visible records ("Showing N of M")
    pub fn matched_count(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Consumes the result, returning the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns one page of the visible records.
    ///
    /// `page` is 1-based; zero is treated as 1 and `per_page` of zero as 1.
    /// Pages past the end are empty.
    pub fn page(&self, page: usize, per_page: usize) -> PageView<'_> {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let matched = self.records.len();

        let start = (page - 1).saturating_mul(per_page).min(matched);
        let end = start.saturating_add(per_page).min(matched);

        PageView {
            records: &self.records[start..end],
            page,
            per_page,
            total_pages: matched.div_ceil(per_page),
            matched_count: matched,
            first_index: if start < end { start + 1 } else { 0 },
            last_index: if start < end { end } else { 0 },
        }
    }
}

/// A page of visible records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a> {
    /// Records on this page
    pub records: &'a [Record],
    /// 1-based page number
    pub page: usize,
    /// Page size
    pub per_page: usize,
    /// Number of pages over all matches
    pub total_pages: usize,
    /// Visible records across all pages
    pub matched_count: usize,
    /// 1-based index of the first record shown (0 when the page is empty)
    pub first_index: usize,
    /// 1-based index of the last record shown (0 when the page is empty)
    pub last_index: usize,
}

impl PageView<'_> {
    /// "Showing 1 to 10 of 24 results"
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_index, self.last_index, self.matched_count
        )
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
