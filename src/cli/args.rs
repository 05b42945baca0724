//! CLI argument definitions using clap
//!
//! Commands:
//! - clinicdesk screens
//! - clinicdesk query --screen <name> [...]
//! - clinicdesk explain --screen <name> [...]
//! - clinicdesk options --screen <name>
//! - clinicdesk summary
//! - clinicdesk request < request.json

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::query::{parse_filter, QueryRequest};

use super::errors::CliResult;

/// clinicdesk - filter, search and sort clinic dashboard tables
#[derive(Parser, Debug)]
#[command(name = "clinicdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List screens with their search, filter and date declarations
    Screens,

    /// Run a query against a screen and print one page of results
    Query(QueryArgs),

    /// Describe how a query will be evaluated
    Explain(QueryArgs),

    /// Show filter options and value counts of a screen
    Options {
        /// Screen name
        #[arg(long)]
        screen: String,
    },

    /// Record counts and status breakdown of every screen
    Summary,

    /// Answer one JSON query request read from stdin
    Request,
}

/// Table controls of one screen
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Screen name
    #[arg(long)]
    pub screen: String,

    /// Search box text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Dropdown selection; `All` clears the field
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Exact date (YYYY-MM-DD)
    #[arg(long)]
    pub on: Option<String>,

    /// Range start (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,

    /// Range end (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,

    /// Sort column; the screen default applies when omitted
    #[arg(long, value_name = "FIELD[:asc|desc]")]
    pub sort: Option<String>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Page size; the configured default applies when omitted
    #[arg(long)]
    pub per_page: Option<usize>,
}

impl QueryArgs {
    /// Converts the arguments into a query request
    pub fn to_request(&self) -> CliResult<QueryRequest> {
        let mut request = QueryRequest {
            screen: self.screen.clone(),
            search: self.search.clone(),
            on: self.on.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            sort: self.sort.clone(),
            ..Default::default()
        };

        for text in &self.filters {
            let (field, value) = parse_filter(text)?;
            request.filters.insert(field, value);
        }

        Ok(request)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
