//! Screen schema definitions
//!
//! A screen declares, for its record collection:
//! - the comparison kind of each field that needs one
//! - which fields the search box looks at
//! - which fields get a filter dropdown
//! - which field(s) the date picker constrains
//! - the sort applied when the screen opens

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::{Query, RangeBound, RangeFilter, RangeTarget, SortSpec};

/// Declared comparison kind of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Lexical, case-sensitive
    Text,
    /// Numeric
    Number,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp
    Timestamp,
    /// 12-hour clock string such as `08:00 AM`
    Clock12h,
    /// Date field combined with a 12-hour clock field on the same record
    DateTime {
        /// Field holding the time of day
        time_field: String,
    },
}

impl FieldKind {
    /// Returns the kind name for explain output
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Clock12h => "clock12h",
            FieldKind::DateTime { .. } => "datetime",
        }
    }
}

/// Field declarations of one management screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSchema {
    /// Screen identifier, e.g. `medications`
    pub name: String,
    /// Declared kinds. Undeclared fields are compared by their JSON type.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldKind>,
    /// Fields the search box matches against
    #[serde(default)]
    pub search_fields: Vec<String>,
    /// Fields offered as filter dropdowns
    #[serde(default)]
    pub filter_fields: Vec<String>,
    /// Field(s) constrained by the date picker
    #[serde(default)]
    pub range: Option<RangeTarget>,
    /// Sort applied when the screen opens
    #[serde(default)]
    pub default_sort: Option<SortSpec>,
}

impl ScreenSchema {
    /// Creates a screen with no declarations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
            search_fields: Vec::new(),
            filter_fields: Vec::new(),
            range: None,
            default_sort: None,
        }
    }

    /// Declares the kind of a field
    pub fn with_field(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.insert(field.into(), kind);
        self
    }

    /// Declares the searchable fields
    pub fn searchable(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Declares the filterable fields
    pub fn filterable(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.filter_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Declares the date picker target
    pub fn with_range(mut self, target: RangeTarget) -> Self {
        self.range = Some(target);
        self
    }

    /// Declares the opening sort
    pub fn with_default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Returns the declared kind of a field
    pub fn kind_of(&self, field: &str) -> Option<&FieldKind> {
        self.fields.get(field)
    }

    /// The query a screen starts with: its search fields and default sort,
    /// nothing constrained.
    pub fn initial_query(&self) -> Query {
        let query = Query::new().search_in(self.search_fields.iter().cloned());
        match &self.default_sort {
            Some(sort) => query.with_sort(sort.clone()),
            None => query,
        }
    }

    /// Builds a range filter against this screen's date target
    pub fn range_filter(&self, bound: RangeBound) -> Option<RangeFilter> {
        self.range
            .as_ref()
            .map(|target| RangeFilter::new(target.clone(), bound))
    }

    /// Validates the declarations themselves (not records)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Screen name must not be empty".into());
        }

        for (field, kind) in &self.fields {
            if let FieldKind::DateTime { time_field } = kind {
                if time_field == field {
                    return Err(format!(
                        "Field '{}' cannot use itself as its time field",
                        field
                    ));
                }
            }
        }

        if let Some(RangeTarget::Interval {
            start_field,
            end_field,
        }) = &self.range
        {
            if start_field == end_field {
                return Err(format!(
                    "Interval range needs two distinct fields, got '{}' twice",
                    start_field
                ));
            }
        }

        Ok(())
    }
}
