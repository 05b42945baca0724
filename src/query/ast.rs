//! Query value types
//!
//! A `Query` is owned by the caller (a screen) and handed to the engine on
//! every interaction. It holds no state beyond the values below.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};

/// Sentinel text used by dropdowns for "no constraint"
pub const ALL_SENTINEL: &str = "All";

/// Equality constraint on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum FieldFilter {
    /// Any value passes
    NoConstraint,
    /// Rendered field value must equal this exactly (case-sensitive)
    Equals(String),
}

impl FieldFilter {
    /// Creates an equality constraint
    pub fn equals(value: impl Into<String>) -> Self {
        FieldFilter::Equals(value.into())
    }

    /// Interprets dropdown text. `All` maps to `NoConstraint`.
    pub fn from_option_text(text: &str) -> Self {
        if text == ALL_SENTINEL {
            FieldFilter::NoConstraint
        } else {
            FieldFilter::Equals(text.to_string())
        }
    }

    /// Returns true if this filter constrains anything
    pub fn is_active(&self) -> bool {
        matches!(self, FieldFilter::Equals(_))
    }

    /// Returns the expected value, if any
    pub fn expected(&self) -> Option<&str> {
        match self {
            FieldFilter::NoConstraint => None,
            FieldFilter::Equals(v) => Some(v),
        }
    }
}

/// Free-text search over declared fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Search term; empty matches everything
    pub term: String,
    /// Fields eligible for substring search, OR-ed together
    pub fields: Vec<String>,
}

impl SearchSpec {
    pub fn new(term: impl Into<String>, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            term: term.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the term constrains anything
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }
}

/// Which record field(s) a range filter looks at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RangeTarget {
    /// A single date (or timestamp) field
    Point { field: String },
    /// A record-side interval stored as two date fields
    Interval { start_field: String, end_field: String },
}

impl RangeTarget {
    pub fn point(field: impl Into<String>) -> Self {
        RangeTarget::Point {
            field: field.into(),
        }
    }

    pub fn interval(start_field: impl Into<String>, end_field: impl Into<String>) -> Self {
        RangeTarget::Interval {
            start_field: start_field.into(),
            end_field: end_field.into(),
        }
    }

    /// Short description for explain output
    pub fn describe(&self) -> String {
        match self {
            RangeTarget::Point { field } => field.clone(),
            RangeTarget::Interval {
                start_field,
                end_field,
            } => format!("[{}, {}]", start_field, end_field),
        }
    }
}

/// The caller-side date constraint.
///
/// Deserialization goes through [`RangeBound::between`], so an inverted
/// interval is rejected there. Built directly with `start > end`, a bound
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "RangeBoundRepr")]
pub enum RangeBound {
    /// A single calendar date
    On(NaiveDate),
    /// Inclusive interval
    Between { start: NaiveDate, end: NaiveDate },
}

/// Unchecked wire form of `RangeBound`
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RangeBoundRepr {
    On(NaiveDate),
    Between { start: NaiveDate, end: NaiveDate },
}

impl TryFrom<RangeBoundRepr> for RangeBound {
    type Error = QueryError;

    fn try_from(repr: RangeBoundRepr) -> QueryResult<Self> {
        match repr {
            RangeBoundRepr::On(day) => Ok(RangeBound::On(day)),
            RangeBoundRepr::Between { start, end } => RangeBound::between(start, end),
        }
    }
}

impl RangeBound {
    /// Creates an inclusive interval, rejecting `start > end`
    pub fn between(start: NaiveDate, end: NaiveDate) -> QueryResult<Self> {
        if start > end {
            return Err(QueryError::invalid_range(format!(
                "Range start {} is after end {}",
                start, end
            )));
        }
        Ok(RangeBound::Between { start, end })
    }

    /// Inclusive lower and upper dates
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        match *self {
            RangeBound::On(d) => (d, d),
            RangeBound::Between { start, end } => (start, end),
        }
    }
}

/// Date predicate: a target plus a bound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub target: RangeTarget,
    pub bound: RangeBound,
}

impl RangeFilter {
    pub fn new(target: RangeTarget, bound: RangeBound) -> Self {
        Self { target, bound }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort specification (single column)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Column header click.
    ///
    /// Clicking the active ascending column flips it to descending; any other
    /// click sorts the clicked column ascending.
    pub fn toggle(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(cur) if cur.field == field && cur.direction == SortDirection::Asc => {
                SortSpec::desc(field)
            }
            _ => SortSpec::asc(field),
        }
    }
}

/// A complete table query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Free-text search
    #[serde(default)]
    pub search: SearchSpec,
    /// Equality filters keyed by field (all combined with AND)
    #[serde(default)]
    pub filters: BTreeMap<String, FieldFilter>,
    /// Optional date predicate
    #[serde(default)]
    pub range: Option<RangeFilter>,
    /// Optional single-column sort
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl Query {
    /// Creates an empty query (matches everything, keeps input order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the searchable fields
    pub fn search_in(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.search.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search.term = term.into();
        self
    }

    /// Sets the filter for a field, replacing any previous one
    pub fn with_filter(mut self, field: impl Into<String>, filter: FieldFilter) -> Self {
        self.filters.insert(field.into(), filter);
        self
    }

    /// Adds an equality filter
    pub fn filter_eq(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_filter(field, FieldFilter::Equals(value.into()))
    }

    /// Sets the range filter
    pub fn with_range(mut self, range: RangeFilter) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Clears the sort specification
    pub fn without_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    /// Applies a header click to the current sort
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortSpec::toggle(self.sort.as_ref(), field));
    }

    /// Iterates filters that actually constrain, in field order
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter_map(|(field, f)| f.expected().map(|v| (field.as_str(), v)))
    }

    /// Returns true if no search, filter or range is active
    pub fn is_unconstrained(&self) -> bool {
        !self.search.is_active() && self.active_filters().next().is_none() && self.range.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_query_builder() {
        let query = Query::new()
            .search_in(["name", "email"])
            .with_search("doe")
            .filter_eq("role", "Doctor")
            .with_sort(SortSpec::desc("createdAt"));

        assert_eq!(query.search.fields, vec!["name", "email"]);
        assert_eq!(query.search.term, "doe");
        assert_eq!(query.filters.get("role"), Some(&FieldFilter::equals("Doctor")));
        assert_eq!(query.sort, Some(SortSpec::desc("createdAt")));
        assert!(!query.is_unconstrained());
    }

    #[test]
    fn test_all_sentinel_is_no_constraint() {
        assert_eq!(FieldFilter::from_option_text("All"), FieldFilter::NoConstraint);
        assert_eq!(
            FieldFilter::from_option_text("all"),
            FieldFilter::equals("all")
        );

        let query = Query::new().with_filter("status", FieldFilter::from_option_text("All"));
        assert!(query.is_unconstrained());
        assert_eq!(query.active_filters().count(), 0);
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortSpec::toggle(None, "time");
        assert_eq!(first, SortSpec::asc("time"));

        let second = SortSpec::toggle(Some(&first), "time");
        assert_eq!(second, SortSpec::desc("time"));

        let third = SortSpec::toggle(Some(&second), "time");
        assert_eq!(third, SortSpec::asc("time"));

        let other = SortSpec::toggle(Some(&second), "name");
        assert_eq!(other, SortSpec::asc("name"));
    }

    #[test]
    fn test_range_between_rejects_inverted() {
        assert!(RangeBound::between(date("2025-06-10"), date("2025-06-01")).is_err());

        let ok = RangeBound::between(date("2025-06-01"), date("2025-06-10")).unwrap();
        assert_eq!(ok.bounds(), (date("2025-06-01"), date("2025-06-10")));
    }

    #[test]
    fn test_range_bound_deserialize_validates() {
        let ok: RangeBound =
            serde_json::from_str(r#"{"between": {"start": "2025-06-01", "end": "2025-06-10"}}"#)
                .unwrap();
        assert_eq!(ok.bounds(), (date("2025-06-01"), date("2025-06-10")));

        let on: RangeBound = serde_json::from_str(r#"{"on": "2025-06-10"}"#).unwrap();
        assert_eq!(on, RangeBound::On(date("2025-06-10")));

        let err = serde_json::from_str::<RangeBound>(
            r#"{"between": {"start": "2025-06-10", "end": "2025-06-01"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("CLINIC_QUERY_INVALID_RANGE"));

        let query = serde_json::from_value::<Query>(serde_json::json!({
            "range": {
                "target": {"type": "point", "field": "date"},
                "bound": {"between": {"start": "2025-06-10", "end": "2025-06-01"}}
            }
        }));
        assert!(query.is_err());
    }

    #[test]
    fn test_query_serde_shape() {
        let query = Query::new()
            .filter_eq("status", "Active")
            .with_range(RangeFilter::new(
                RangeTarget::interval("startDate", "endDate"),
                RangeBound::On(date("2025-06-10")),
            ));

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["filters"]["status"]["op"], "equals");
        assert_eq!(json["range"]["target"]["type"], "interval");

        let back: Query = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
    }
}
