//! Explain output
//!
//! Produces deterministic, human-readable descriptions of a query as the
//! engine will evaluate it.

use std::fmt;

use serde::Serialize;

use crate::schema::ScreenSchema;

use super::ast::{Query, RangeBound};

/// Explain output
#[derive(Debug, Clone, Serialize)]
pub struct ExplainPlan {
    /// Screen the query targets (if known)
    pub screen: Option<String>,
    /// Search stage description
    pub search: Option<String>,
    /// Active equality filters
    pub filters: Vec<String>,
    /// Range stage description
    pub range: Option<String>,
    /// Sort stage description
    pub sort: Option<String>,
}

impl ExplainPlan {
    /// Describes a query without screen declarations
    pub fn from_query(query: &Query) -> Self {
        Self::build(query, None)
    }

    /// Describes a query, naming declared sort kinds from the screen
    pub fn for_screen(query: &Query, schema: &ScreenSchema) -> Self {
        Self::build(query, Some(schema))
    }

    fn build(query: &Query, schema: Option<&ScreenSchema>) -> Self {
        let search = query.search.is_active().then(|| {
            format!(
                "'{}' in [{}] (case-insensitive)",
                query.search.term,
                query.search.fields.join(", ")
            )
        });

        let filters = query
            .active_filters()
            .map(|(field, value)| format!("{} = '{}'", field, value))
            .collect();

        let range = query.range.as_ref().map(|r| match r.bound {
            RangeBound::On(d) => format!("{} on {}", r.target.describe(), d),
            RangeBound::Between { start, end } => {
                format!("{} within {}..{}", r.target.describe(), start, end)
            }
        });

        let sort = query.sort.as_ref().map(|s| {
            let kind = schema
                .and_then(|sc| sc.kind_of(&s.field))
                .map(|k| k.kind_name())
                .unwrap_or("inferred");
            format!("{} {} ({})", s.field, s.direction.as_str(), kind)
        });

        Self {
            screen: schema.map(|s| s.name.clone()),
            search,
            filters,
            range,
            sort,
        }
    }
}

impl fmt::Display for ExplainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN QUERY ===")?;

        if let Some(screen) = &self.screen {
            writeln!(f, "Screen: {}", screen)?;
        }
        match &self.search {
            Some(search) => writeln!(f, "Search: {}", search)?,
            None => writeln!(f, "Search: (none)")?,
        }
        if self.filters.is_empty() {
            writeln!(f, "Filters: (none)")?;
        } else {
            writeln!(f, "Filters:")?;
            for filter in &self.filters {
                writeln!(f, "  - {}", filter)?;
            }
        }
        match &self.range {
            Some(range) => writeln!(f, "Range: {}", range)?,
            None => writeln!(f, "Range: (none)")?,
        }
        match &self.sort {
            Some(sort) => writeln!(f, "Sort: {} [stable]", sort)?,
            None => writeln!(f, "Sort: (input order)")?,
        }

        Ok(())
    }
}
