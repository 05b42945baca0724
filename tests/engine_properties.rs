//! Record Query Engine Property Tests
//!
//! Properties every screen relies on:
//! 1. Identity and idempotence
//! 2. Conjunctive filtering
//! 3. Stable sorting in both directions
//! 4. Case-insensitive search
//! 5. 12-hour clock normalization
//! 6. Dashboard scenarios over the built-in fixtures

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::{json, Value};

use clinicdesk::catalog::fixtures;
use clinicdesk::engine::{apply, RecordQueryEngine};
use clinicdesk::query::{FieldFilter, Query, RangeBound, SortSpec};
use clinicdesk::record::Record;
use clinicdesk::schema::FieldKind;

fn records(values: Vec<Value>) -> Vec<Record> {
    values.into_iter().filter_map(Record::from_value).collect()
}

fn ids(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_i64))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// IDENTITY AND IDEMPOTENCE
// =============================================================================

/// Test: An empty query returns the records in their original order.
#[test]
fn test_empty_query_is_identity() {
    for (_, input) in fixtures::all() {
        let result = apply(&input, &Query::new());
        assert_eq!(result.records, input);
        assert_eq!(result.total_count, input.len());
    }
}

/// Test: Applying a query to its own output changes nothing.
#[test]
fn test_apply_is_idempotent() {
    let schema = fixtures::appointments_schema();
    let engine = RecordQueryEngine::new(&schema);

    let query = schema
        .initial_query()
        .with_search("dr.")
        .filter_eq("status", "Pending")
        .with_sort(SortSpec::desc("date"));

    let once = engine.apply(&fixtures::appointments(), &query);
    let twice = engine.apply(&once.records, &query);

    assert_eq!(ids(&once.records), vec![5, 2]);
    assert_eq!(twice.records, once.records);
}

/// Test: The input collection is never modified.
#[test]
fn test_input_is_untouched() {
    let input = fixtures::medications();
    let before = input.clone();

    let schema = fixtures::medications_schema();
    let _ = RecordQueryEngine::new(&schema).apply(&input, &schema.initial_query());

    assert_eq!(input, before);
}

// =============================================================================
// CONJUNCTIVE FILTERING
// =============================================================================

/// Test: Two filters together equal the intersection of each alone.
#[test]
fn test_filters_are_conjunctive() {
    let input = fixtures::appointments();

    let by_status = apply(&input, &Query::new().filter_eq("status", "Confirmed"));
    let by_doctor = apply(&input, &Query::new().filter_eq("doctor", "Dr. Smith"));
    let both = apply(
        &input,
        &Query::new()
            .filter_eq("status", "Confirmed")
            .filter_eq("doctor", "Dr. Smith"),
    );

    let intersection: Vec<i64> = ids(&by_status.records)
        .into_iter()
        .filter(|id| ids(&by_doctor.records).contains(id))
        .collect();

    assert_eq!(ids(&both.records), intersection);
    assert_eq!(ids(&both.records), vec![1, 4]);
}

fn intersect(a: &[Record], b: &[Record]) -> Vec<i64> {
    let other = ids(b);
    ids(a).into_iter().filter(|id| other.contains(id)).collect()
}

/// Test: Search and a date range together equal the intersection of each alone.
#[test]
fn test_search_and_range_are_conjunctive() {
    let input = fixtures::medications();
    let schema = fixtures::medications_schema();
    let base = schema.initial_query().without_sort();
    let range = schema
        .range_filter(RangeBound::On(date(2025, 6, 10)))
        .unwrap();

    let by_search = apply(&input, &base.clone().with_search("john"));
    let by_range = apply(&input, &base.clone().with_range(range.clone()));
    let both = apply(
        &input,
        &base.clone().with_search("john").with_range(range.clone()),
    );

    assert_eq!(ids(&by_search.records), vec![1, 2]);
    assert_eq!(ids(&by_range.records), vec![2, 3, 4, 5]);
    assert_eq!(
        ids(&both.records),
        intersect(&by_search.records, &by_range.records)
    );
    assert_eq!(ids(&both.records), vec![2]);

    // Every prescriber matches "dr.", so only the range narrows
    let broad = apply(&input, &base.with_search("dr.").with_range(range));
    assert_eq!(ids(&broad.records), ids(&by_range.records));
}

/// Test: A dropdown filter and a date range together equal the intersection.
#[test]
fn test_filter_and_range_are_conjunctive() {
    let input = fixtures::medications();
    let schema = fixtures::medications_schema();
    let base = schema.initial_query().without_sort();
    let range = schema
        .range_filter(RangeBound::On(date(2025, 6, 10)))
        .unwrap();

    let by_status = apply(&input, &base.clone().filter_eq("status", "Scheduled"));
    let by_range = apply(&input, &base.clone().with_range(range.clone()));
    let both = apply(
        &input,
        &base.filter_eq("status", "Scheduled").with_range(range),
    );

    assert_eq!(ids(&by_status.records), vec![1, 4, 5]);
    assert_eq!(
        ids(&both.records),
        intersect(&by_status.records, &by_range.records)
    );
    assert_eq!(ids(&both.records), vec![4, 5]);
}

/// Test: A NoConstraint entry is skipped.
#[test]
fn test_no_constraint_is_skipped() {
    let input = fixtures::users();
    let query = Query::new()
        .with_filter("role", FieldFilter::NoConstraint)
        .with_filter("status", FieldFilter::from_option_text("All"));

    assert_eq!(apply(&input, &query).records, input);
}

/// Test: Equality is exact and case-sensitive.
#[test]
fn test_filter_is_case_sensitive() {
    let result = apply(&fixtures::users(), &Query::new().filter_eq("role", "doctor"));
    assert!(result.is_empty());
}

// =============================================================================
// STABLE SORTING
// =============================================================================

/// Test: Equal keys keep encounter order ascending and descending.
#[test]
fn test_sort_is_stable_both_ways() {
    let input = records(vec![
        json!({"id": 1, "status": "Active"}),
        json!({"id": 2, "status": "Inactive"}),
        json!({"id": 3, "status": "Active"}),
        json!({"id": 4, "status": "Inactive"}),
        json!({"id": 5, "status": "Active"}),
    ]);

    let asc = apply(&input, &Query::new().with_sort(SortSpec::asc("status")));
    assert_eq!(ids(&asc.records), vec![1, 3, 5, 2, 4]);

    let desc = apply(&input, &Query::new().with_sort(SortSpec::desc("status")));
    assert_eq!(ids(&desc.records), vec![2, 4, 1, 3, 5]);
}

/// Test: Records missing the sort key go last in both directions.
#[test]
fn test_missing_keys_sort_last() {
    let input = records(vec![
        json!({"id": 1}),
        json!({"id": 2, "availability": 3}),
        json!({"id": 3, "availability": 1}),
        json!({"id": 4, "availability": null}),
    ]);

    let asc = apply(&input, &Query::new().with_sort(SortSpec::asc("availability")));
    assert_eq!(ids(&asc.records), vec![3, 2, 1, 4]);

    let desc = apply(&input, &Query::new().with_sort(SortSpec::desc("availability")));
    assert_eq!(ids(&desc.records), vec![2, 3, 1, 4]);
}

/// Test: Undeclared numbers sort numerically, not lexically.
#[test]
fn test_inferred_numeric_sort() {
    let input = records(vec![
        json!({"id": 10}),
        json!({"id": 9}),
        json!({"id": 100}),
    ]);

    let result = apply(&input, &Query::new().with_sort(SortSpec::asc("id")));
    assert_eq!(ids(&result.records), vec![9, 10, 100]);
}

// =============================================================================
// SEARCH
// =============================================================================

/// Test: Search is a case-insensitive substring match.
#[test]
fn test_search_is_case_insensitive() {
    let query = Query::new().search_in(["name", "email"]).with_search("dOE");
    let result = apply(&fixtures::users(), &query);
    assert_eq!(ids(&result.records), vec![1]);
}

/// Test: Search matches any one of the searchable fields.
#[test]
fn test_search_any_field() {
    let schema = fixtures::medications_schema();
    let query = schema.initial_query().without_sort().with_search("dr. lee");

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::medications(), &query);
    assert_eq!(ids(&result.records), vec![3]);
}

/// Test: A search that matches nothing yields an empty result.
#[test]
fn test_no_match_is_empty() {
    let schema = fixtures::users_schema();
    let query = schema.initial_query().with_search("zzz-no-match");

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::users(), &query);
    assert!(result.is_empty());
    assert_eq!(result.total_count, 3);
}

// =============================================================================
// 12-HOUR CLOCK
// =============================================================================

/// Test: Clock strings sort by time of day.
#[test]
fn test_twelve_hour_normalization() {
    let input = records(vec![
        json!({"time": "02:00 PM"}),
        json!({"time": "09:00 AM"}),
        json!({"time": "12:00 AM"}),
        json!({"time": "12:30 PM"}),
    ]);
    let kinds: BTreeMap<String, FieldKind> =
        [("time".to_string(), FieldKind::Clock12h)].into_iter().collect();

    let result =
        RecordQueryEngine::new(&kinds).apply(&input, &Query::new().with_sort(SortSpec::asc("time")));
    let times: Vec<String> = result.iter().filter_map(|r| r.text("time")).collect();

    assert_eq!(times, vec!["12:00 AM", "09:00 AM", "12:30 PM", "02:00 PM"]);
}

// =============================================================================
// DASHBOARD SCENARIOS
// =============================================================================

/// Scenario A: filtering users by role returns exactly the doctor.
#[test]
fn test_scenario_filter_users_by_role() {
    let schema = fixtures::users_schema();
    let query = schema.initial_query().filter_eq("role", "Doctor");

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::users(), &query);
    assert_eq!(ids(&result.records), vec![3]);
    assert_eq!(result.records[0].text("name").as_deref(), Some("Dr. Robert"));
}

/// Scenario B: appointments on one day, ordered by date and time.
#[test]
fn test_scenario_appointments_on_a_day() {
    let schema = fixtures::appointments_schema();
    let range = schema.range_filter(RangeBound::On(date(2025, 6, 12))).unwrap();
    let query = schema.initial_query().with_range(range);

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::appointments(), &query);
    assert_eq!(ids(&result.records), vec![1, 4]);

    let times: Vec<String> = result.iter().filter_map(|r| r.text("time")).collect();
    assert_eq!(times, vec!["10:00 AM", "03:00 PM"]);
}

/// Scenario C: medications active on a given day.
#[test]
fn test_scenario_medications_active_on_a_day() {
    let schema = fixtures::medications_schema();
    let range = schema.range_filter(RangeBound::On(date(2025, 6, 10))).unwrap();
    let query = schema.initial_query().without_sort().with_range(range);

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::medications(), &query);
    assert_eq!(ids(&result.records), vec![2, 3, 4, 5]);
}

/// Test: An interval bound keeps medications overlapping it.
#[test]
fn test_medications_overlapping_interval() {
    let schema = fixtures::medications_schema();
    let bound = RangeBound::between(date(2025, 5, 1), date(2025, 6, 3)).unwrap();
    let query = schema
        .initial_query()
        .without_sort()
        .with_range(schema.range_filter(bound).unwrap());

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::medications(), &query);
    assert_eq!(ids(&result.records), vec![1, 4, 5]);
}

/// Test: Symptom timestamps are matched on their calendar date.
#[test]
fn test_symptom_logs_by_day() {
    let schema = fixtures::symptom_logs_schema();
    let query = schema
        .initial_query()
        .with_range(schema.range_filter(RangeBound::On(date(2025, 6, 9))).unwrap());

    let result = RecordQueryEngine::new(&schema).apply(&fixtures::symptom_logs(), &query);
    assert_eq!(ids(&result.records), vec![2]);
}
