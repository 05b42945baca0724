//! Screen declarations
//!
//! Each management screen supplies a `ScreenSchema` instead of carrying its
//! own filter and sort state. The engine reads declared field kinds from it;
//! the CLI reads search, filter and range declarations from it.

mod options;
mod types;

pub use options::{count_where, filter_options, tally, FilterOption, Tally};
pub use types::{FieldKind, ScreenSchema};
