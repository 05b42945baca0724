//! clinicdesk - filter, search and sort engine for clinic dashboard tables
//!
//! Every management screen (users, doctors, appointments, medications,
//! reports, symptom logs) shows a table of records narrowed by a search box,
//! filter dropdowns and a date picker, and ordered by a clickable column.
//! This crate implements that pipeline once, generically:
//!
//! - `record`: schemaless JSON records
//! - `query`: query values, text parsing and explain output
//! - `schema`: per-screen field declarations, filter options and tallies
//! - `engine`: search, filter, range and stable sort
//! - `catalog`: built-in screens and records files
//! - `cli`: command-line front end

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod observability;
pub mod query;
pub mod record;
pub mod schema;
