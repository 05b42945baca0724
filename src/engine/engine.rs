//! Record query engine
//!
//! Applies a query to a record collection, producing the visible records in
//! display order.
//!
//! Stages (strict order):
//! 1. Search
//! 2. Equality filters
//! 3. Range
//! 4. Stable sort
//!
//! The input slice is never modified; visible records are cloned into the
//! result.

use std::collections::BTreeMap;

use tracing::debug;

use crate::observability::Event;
use crate::query::Query;
use crate::record::Record;
use crate::schema::{FieldKind, ScreenSchema};

use super::filters::RecordFilter;
use super::result::ExecutionResult;
use super::sorter::ResultSorter;

/// Source of declared field kinds
pub trait FieldKinds {
    /// Returns the declared kind of a field, if any
    fn kind_of(&self, field: &str) -> Option<&FieldKind>;
}

impl FieldKinds for ScreenSchema {
    fn kind_of(&self, field: &str) -> Option<&FieldKind> {
        ScreenSchema::kind_of(self, field)
    }
}

impl FieldKinds for BTreeMap<String, FieldKind> {
    fn kind_of(&self, field: &str) -> Option<&FieldKind> {
        self.get(field)
    }
}

/// No declarations; every field is compared by its JSON type
#[derive(Debug, Clone, Copy, Default)]
pub struct Undeclared;

impl FieldKinds for Undeclared {
    fn kind_of(&self, _field: &str) -> Option<&FieldKind> {
        None
    }
}

/// Stateless query engine bound to a set of field declarations
pub struct RecordQueryEngine<'a, K: FieldKinds> {
    kinds: &'a K,
}

impl<'a, K: FieldKinds> RecordQueryEngine<'a, K> {
    /// Creates a new engine
    pub fn new(kinds: &'a K) -> Self {
        Self { kinds }
    }

    /// Applies a query to records.
    ///
    /// Deterministic: same records + same query = same result.
    pub fn apply(&self, records: &[Record], query: &Query) -> ExecutionResult {
        // Stages 1-3: search, filters, range
        let mut visible: Vec<Record> = records
            .iter()
            .filter(|record| RecordFilter::matches(record, query))
            .cloned()
            .collect();

        // Stage 4: sort
        if let Some(sort_spec) = &query.sort {
            ResultSorter::sort(&mut visible, sort_spec, self.kinds.kind_of(&sort_spec.field));
        }

        let event = if visible.is_empty() {
            Event::QueryEmpty
        } else {
            Event::QueryApplied
        };
        debug!(
            event = event.as_str(),
            scanned = records.len(),
            matched = visible.len(),
            sorted = query.sort.is_some(),
            "query applied"
        );

        ExecutionResult {
            records: visible,
            total_count: records.len(),
        }
    }
}

/// Applies a query without field declarations
pub fn apply(records: &[Record], query: &Query) -> ExecutionResult {
    RecordQueryEngine::new(&Undeclared).apply(records, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{RangeBound, RangeFilter, RangeTarget, SortSpec};
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn records(values: Vec<Value>) -> Vec<Record> {
        values.into_iter().filter_map(Record::from_value).collect()
    }

    fn ids(result: &ExecutionResult) -> Vec<i64> {
        result
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .collect()
    }

    fn users() -> Vec<Record> {
        records(vec![
            json!({"id": 1, "name": "John Doe", "email": "john@example.com", "role": "Patient", "status": "Active", "createdAt": "2023-01-15"}),
            json!({"id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "Patient", "status": "Inactive", "createdAt": "2023-02-20"}),
            json!({"id": 3, "name": "Dr. Robert", "email": "robert@example.com", "role": "Doctor", "status": "Active", "createdAt": "2023-03-10"}),
        ])
    }

    #[test]
    fn test_empty_query_is_identity() {
        let input = users();
        let result = apply(&input, &Query::new());

        assert_eq!(result.records, input);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn test_empty_collection() {
        let result = apply(&[], &Query::new().with_search("x").with_sort(SortSpec::asc("id")));
        assert!(result.is_empty());
        assert_eq!(result.total_count, 0);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = users();
        let before = input.clone();
        let _ = apply(&input, &Query::new().with_sort(SortSpec::desc("id")));
        assert_eq!(input, before);
    }

    #[test]
    fn test_search_then_filter_then_sort() {
        let query = Query::new()
            .search_in(["email"])
            .with_search("EXAMPLE")
            .filter_eq("status", "Active")
            .with_sort(SortSpec::desc("id"));

        let result = apply(&users(), &query);
        assert_eq!(ids(&result), vec![3, 1]);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn test_range_with_declared_schema() {
        let schema = ScreenSchema::new("users")
            .with_field("createdAt", FieldKind::Date)
            .with_range(RangeTarget::point("createdAt"));

        let query = Query::new()
            .with_range(RangeFilter::new(
                RangeTarget::point("createdAt"),
                RangeBound::Between {
                    start: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                    end: NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
                },
            ))
            .with_sort(SortSpec::desc("createdAt"));

        let result = RecordQueryEngine::new(&schema).apply(&users(), &query);
        assert_eq!(ids(&result), vec![3, 2]);
    }

    #[test]
    fn test_declared_kind_changes_order() {
        let input = records(vec![
            json!({"id": 1, "time": "02:00 PM"}),
            json!({"id": 2, "time": "09:00 AM"}),
        ]);
        let query = Query::new().with_sort(SortSpec::asc("time"));

        // lexical: "02:00 PM" < "09:00 AM"
        assert_eq!(ids(&apply(&input, &query)), vec![1, 2]);

        let kinds: BTreeMap<String, FieldKind> =
            [("time".to_string(), FieldKind::Clock12h)].into_iter().collect();
        let result = RecordQueryEngine::new(&kinds).apply(&input, &query);
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn test_sort_on_absent_field_keeps_order() {
        let result = apply(&users(), &Query::new().with_sort(SortSpec::desc("nope")));
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let query = Query::new().search_in(["name", "email"]).with_search("zzz-no-match");
        let result = apply(&users(), &query);
        assert!(result.is_empty());
        assert_eq!(result.total_count, 3);
    }
}
