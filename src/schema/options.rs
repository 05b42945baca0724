//! Filter dropdown options and value tallies
//!
//! Option sets are the distinct rendered values of a field in first-seen
//! order, with `All` prepended.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::query::{FieldFilter, ALL_SENTINEL};
use crate::record::Record;

/// One entry of a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOption {
    /// The "no constraint" entry
    All,
    /// A concrete observed value
    Value(String),
}

impl FilterOption {
    /// Label shown in the dropdown
    pub fn label(&self) -> &str {
        match self {
            FilterOption::All => ALL_SENTINEL,
            FilterOption::Value(v) => v,
        }
    }

    /// Converts the selection into a field filter
    pub fn to_filter(&self) -> FieldFilter {
        match self {
            FilterOption::All => FieldFilter::NoConstraint,
            FilterOption::Value(v) => FieldFilter::Equals(v.clone()),
        }
    }
}

impl Serialize for FilterOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Builds the option set for a field: `All` followed by distinct values
pub fn filter_options(records: &[Record], field: &str) -> Vec<FilterOption> {
    let mut seen = HashSet::new();
    let mut options = vec![FilterOption::All];

    for value in records.iter().filter_map(|r| r.text(field)) {
        if seen.insert(value.clone()) {
            options.push(FilterOption::Value(value));
        }
    }

    options
}

/// Count of records holding a given value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

/// Counts records per rendered value of a field, in first-seen order.
///
/// Records missing the field are not counted.
pub fn tally(records: &[Record], field: &str) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::new();

    for value in records.iter().filter_map(|r| r.text(field)) {
        match tallies.iter_mut().find(|t| t.value == value) {
            Some(t) => t.count += 1,
            None => tallies.push(Tally { value, count: 1 }),
        }
    }

    tallies
}

/// Number of records whose field renders to `value`
pub fn count_where(records: &[Record], field: &str, value: &str) -> usize {
    records
        .iter()
        .filter(|r| r.text(field).as_deref() == Some(value))
        .count()
}
