//! Result sorting
//!
//! Sorts records by a single field, stably. The comparison is chosen by the
//! field's declared kind; undeclared fields are compared by JSON type.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::query::{SortDirection, SortSpec};
use crate::record::{render, Record};
use crate::schema::FieldKind;

use super::values::{clock_minutes, field_date, field_datetime, parse_timestamp};

/// Orderable key extracted from one record
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<FixedOffset>),
    DateTime(NaiveDateTime),
    Minutes(u32),
}

impl SortKey {
    /// Extracts the key of `field` under an optional declared kind.
    ///
    /// Returns None when the field is missing or does not parse as its kind.
    pub fn extract(record: &Record, field: &str, kind: Option<&FieldKind>) -> Option<SortKey> {
        match kind {
            None => record.get(field).map(Self::inferred),
            Some(FieldKind::Text) => record.text(field).map(SortKey::Text),
            Some(FieldKind::Number) => match record.get(field)? {
                Value::Number(n) => n.as_f64().map(SortKey::Number),
                Value::String(s) => s.trim().parse::<f64>().ok().map(SortKey::Number),
                _ => None,
            },
            Some(FieldKind::Date) => field_date(record, field).map(SortKey::Date),
            Some(FieldKind::Timestamp) => record
                .str_field(field)
                .and_then(parse_timestamp)
                .map(SortKey::Timestamp),
            Some(FieldKind::Clock12h) => record
                .str_field(field)
                .and_then(clock_minutes)
                .map(SortKey::Minutes),
            Some(FieldKind::DateTime { time_field }) => {
                field_datetime(record, field, time_field).map(SortKey::DateTime)
            }
        }
    }

    fn inferred(value: &Value) -> SortKey {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) => SortKey::Number(f),
                None => SortKey::Text(n.to_string()),
            },
            other => SortKey::Text(render(other)),
        }
    }

    /// Rank used only when two keys of different variants meet
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Minutes(_) => 1,
            SortKey::Date(_) => 2,
            SortKey::DateTime(_) => 3,
            SortKey::Timestamp(_) => 4,
            SortKey::Text(_) => 5,
        }
    }

    /// Total order over keys
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Timestamp(a), SortKey::Timestamp(b)) => a.cmp(b),
            (SortKey::DateTime(a), SortKey::DateTime(b)) => a.cmp(b),
            (SortKey::Minutes(a), SortKey::Minutes(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Sorts records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort specification.
    ///
    /// Stable in both directions. Records without a usable key keep their
    /// relative order and go after every keyed record.
    pub fn sort(records: &mut Vec<Record>, sort_spec: &SortSpec, kind: Option<&FieldKind>) {
        let mut keyed: Vec<(Option<SortKey>, Record)> = records
            .drain(..)
            .map(|r| (SortKey::extract(&r, &sort_spec.field, kind), r))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| Self::compare_keys(a.as_ref(), b.as_ref(), sort_spec.direction));

        records.extend(keyed.into_iter().map(|(_, r)| r));
    }

    fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => match direction {
                SortDirection::Asc => a.compare(b),
                SortDirection::Desc => b.compare(a),
            },
        }
    }
}
