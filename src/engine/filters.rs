//! Record filtering for the search, filter and range stages
//!
//! Every stage is a pure predicate over one record. Missing fields never
//! match; an inactive stage matches everything.

use crate::query::{FieldFilter, Query, RangeBound, RangeFilter, RangeTarget, SearchSpec};
use crate::record::Record;

use super::values::field_date;

/// Evaluates query stages against records
pub struct RecordFilter;

impl RecordFilter {
    /// Checks if a record passes search AND filters AND range
    pub fn matches(record: &Record, query: &Query) -> bool {
        Self::matches_search(record, &query.search)
            && Self::matches_filters(record, query)
            && query
                .range
                .as_ref()
                .map_or(true, |range| Self::matches_range(record, range))
    }

    /// Search stage: lower-cased term is a substring of at least one
    /// lower-cased search field
    pub fn matches_search(record: &Record, search: &SearchSpec) -> bool {
        if !search.is_active() {
            return true;
        }

        let needle = search.term.to_lowercase();
        search.fields.iter().any(|field| {
            record
                .text(field)
                .map_or(false, |value| value.to_lowercase().contains(&needle))
        })
    }

    /// Filter stage: every active equality filter holds
    pub fn matches_filters(record: &Record, query: &Query) -> bool {
        query
            .filters
            .iter()
            .all(|(field, filter)| Self::matches_filter(record, field, filter))
    }

    /// Checks a single equality filter (exact, case-sensitive)
    pub fn matches_filter(record: &Record, field: &str, filter: &FieldFilter) -> bool {
        match filter {
            FieldFilter::NoConstraint => true,
            FieldFilter::Equals(expected) => record.text(field).as_deref() == Some(expected.as_str()),
        }
    }

    /// Range stage.
    ///
    /// Point fields must fall within the bound. Interval records must
    /// overlap it; for an exact date that means containing it. An inverted
    /// bound matches nothing.
    pub fn matches_range(record: &Record, range: &RangeFilter) -> bool {
        let (lo, hi) = range.bound.bounds();
        if lo > hi {
            return false;
        }

        match &range.target {
            RangeTarget::Point { field } => match field_date(record, field) {
                Some(date) => match range.bound {
                    RangeBound::On(day) => date == day,
                    RangeBound::Between { .. } => lo <= date && date <= hi,
                },
                None => false,
            },
            RangeTarget::Interval {
                start_field,
                end_field,
            } => match (field_date(record, start_field), field_date(record, end_field)) {
                (Some(start), Some(end)) => start <= hi && lo <= end,
                _ => false,
            },
        }
    }
}
