//! Query values for record tables
//!
//! A query is built by the caller on every interaction and consumed by the
//! engine. It never outlives the screen that owns it.
//!
//! # Stages (evaluated in this order)
//!
//! 1. Search: case-insensitive substring over declared fields (OR)
//! 2. Filter: exact equality per field (AND)
//! 3. Range: date point or interval predicate
//! 4. Sort: single column, stable

mod ast;
mod errors;
mod explain;
mod request;

pub use ast::{
    FieldFilter, Query, RangeBound, RangeFilter, RangeTarget, SearchSpec, SortDirection,
    SortSpec, ALL_SENTINEL,
};
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use explain::ExplainPlan;
pub use request::{parse_bound, parse_date, parse_filter, parse_sort, QueryRequest};
