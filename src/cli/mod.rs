//! CLI module for clinicdesk
//!
//! Provides command-line access to the screen catalog:
//! - screens: List screens and their declarations
//! - query: One-shot query with paging
//! - explain: Describe a query without running it
//! - options: Filter dropdown contents and tallies
//! - summary: Dashboard record counts
//! - request: Answer a JSON request from stdin

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, QueryArgs};
pub use commands::{
    answer_request, explain, options, query, run, run_command, screens, summary, Output,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{ok_response, read_request, write_response, write_text};
