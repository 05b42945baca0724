//! Record query engine
//!
//! Consumes a `Query` and a record collection and produces the visible
//! records in display order.
//!
//! # Execution Flow (strict order)
//!
//! 1. Search: keep records whose search fields contain the term
//! 2. Filter: keep records satisfying every equality filter
//! 3. Range: keep records satisfying the date predicate
//! 4. Sort: stable sort by the declared or inferred field kind
//!
//! # Guarantees
//!
//! - Pure: input records are never modified
//! - Deterministic and idempotent
//! - Never fails; an empty result is a normal outcome

mod engine;
mod filters;
mod result;
mod sorter;
mod values;

pub use engine::{apply, FieldKinds, RecordQueryEngine, Undeclared};
pub use filters::RecordFilter;
pub use result::{ExecutionResult, PageView};
pub use sorter::{ResultSorter, SortKey};
pub use values::{clock_minutes, field_date, parse_clock12h};
