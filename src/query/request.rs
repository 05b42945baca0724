//! Text and JSON query requests
//!
//! Turns user-facing text (`status=Active`, `2025-06-10`, `time:desc`) into
//! query values, resolved against a screen's declarations.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::ScreenSchema;

use super::ast::{FieldFilter, Query, RangeBound, SortDirection, SortSpec};
use super::errors::{QueryError, QueryResult};

/// Query request as submitted by the CLI or a JSON client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Target screen
    pub screen: String,
    /// Search box text
    #[serde(default)]
    pub search: String,
    /// Dropdown selections by field; `All` means no constraint
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    /// Exact date
    #[serde(default)]
    pub on: Option<String>,
    /// Inclusive range start
    #[serde(default)]
    pub from: Option<String>,
    /// Inclusive range end
    #[serde(default)]
    pub to: Option<String>,
    /// Sort text `field[:asc|desc]`; the screen default applies when absent
    #[serde(default)]
    pub sort: Option<String>,
}

impl QueryRequest {
    /// Parses a request from a JSON string
    pub fn parse(json: &str) -> QueryResult<Self> {
        let request: QueryRequest = serde_json::from_str(json)
            .map_err(|e| QueryError::invalid_request(format!("Invalid JSON: {}", e)))?;

        if request.screen.trim().is_empty() {
            return Err(QueryError::invalid_request("Missing screen"));
        }

        Ok(request)
    }

    /// Resolves the request into a query using the screen's declarations
    pub fn to_query(&self, schema: &ScreenSchema) -> QueryResult<Query> {
        let mut query = schema.initial_query().with_search(self.search.clone());

        for (field, value) in &self.filters {
            if field.is_empty() {
                return Err(QueryError::invalid_filter(format!("={}", value)));
            }
            query = query.with_filter(field.clone(), FieldFilter::from_option_text(value));
        }

        let bound = parse_bound(self.on.as_deref(), self.from.as_deref(), self.to.as_deref())
            .map_err(|e| match &schema.range {
                Some(target) => e.with_field(target.describe()),
                None => e,
            })?;

        if let Some(bound) = bound {
            let range = schema.range_filter(bound).ok_or_else(|| {
                QueryError::invalid_range(format!(
                    "Screen '{}' has no date field to filter on",
                    schema.name
                ))
            })?;
            query = query.with_range(range);
        }

        if let Some(sort) = &self.sort {
            query = query.with_sort(parse_sort(sort)?);
        }

        Ok(query)
    }
}

/// Parses `field=value`
pub fn parse_filter(text: &str) -> QueryResult<(String, String)> {
    match text.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(QueryError::invalid_filter(text)),
    }
}

/// Parses a `YYYY-MM-DD` calendar date
pub fn parse_date(text: &str) -> QueryResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| QueryError::invalid_date(text))
}

/// Parses `field`, `field:asc` or `field:desc`
pub fn parse_sort(text: &str) -> QueryResult<SortSpec> {
    let (field, direction) = match text.split_once(':') {
        Some((field, "asc")) => (field, SortDirection::Asc),
        Some((field, "desc")) => (field, SortDirection::Desc),
        Some(_) => return Err(QueryError::invalid_sort(text)),
        None => (text, SortDirection::Asc),
    };

    let field = field.trim();
    if field.is_empty() {
        return Err(QueryError::invalid_sort(text));
    }

    Ok(SortSpec {
        field: field.to_string(),
        direction,
    })
}

/// Combines exact-date and interval inputs into a bound.
///
/// `on` excludes `from`/`to`; `from` and `to` must come together.
pub fn parse_bound(
    on: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> QueryResult<Option<RangeBound>> {
    match (on, from, to) {
        (None, None, None) => Ok(None),
        (Some(d), None, None) => Ok(Some(RangeBound::On(parse_date(d)?))),
        (None, Some(start), Some(end)) => {
            RangeBound::between(parse_date(start)?, parse_date(end)?).map(Some)
        }
        (Some(_), _, _) => Err(QueryError::invalid_range(
            "An exact date cannot be combined with from/to",
        )),
        _ => Err(QueryError::invalid_range("Both from and to are required")),
    }
}
