//! CLI command implementations
//!
//! Every command works against the catalog built from configuration:
//! built-in screens, configured declarations, then the records file.
//! Commands produce their output as a value; `run` writes it to stdout.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::catalog::{Catalog, Screen};
use crate::observability::{init_logging, Event};
use crate::query::{ExplainPlan, Query, QueryError, QueryRequest, RangeTarget};

use super::args::{Cli, Command, QueryArgs};
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_request, write_response, write_text};

/// Output of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Wrapped in the `{"status": "ok", "data": ...}` envelope
    Json(Value),
    /// Written as-is
    Text(String),
}

/// Optional paging keys of a JSON request
#[derive(Debug, Default, Deserialize)]
struct Paging {
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    per_page: Option<usize>,
}

/// Parse arguments, load configuration and run the command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    init_logging(&config.log_level);

    if let Some(path) = &cli.config {
        info!(
            event = Event::ConfigLoaded.as_str(),
            path = %path.display(),
            screens = config.screens.len(),
            "configuration loaded"
        );
    }

    let catalog = config.build_catalog()?;

    match run_command(cli.command, &config, &catalog)? {
        Output::Json(data) => write_response(data),
        Output::Text(text) => write_text(&text),
    }
}

/// Run a single command against a catalog
pub fn run_command(cmd: Command, config: &Config, catalog: &Catalog) -> CliResult<Output> {
    match cmd {
        Command::Screens => Ok(Output::Json(screens(catalog))),
        Command::Query(args) => query(&args, config, catalog).map(Output::Json),
        Command::Explain(args) => explain(&args, catalog).map(Output::Text),
        Command::Options { screen } => options(&screen, catalog).map(Output::Json),
        Command::Summary => Ok(Output::Json(summary(catalog))),
        Command::Request => {
            let body = read_request()?;
            answer_request(&body, config, catalog).map(Output::Json)
        }
    }
}

/// Screen declarations with record counts
pub fn screens(catalog: &Catalog) -> Value {
    let screens: Vec<Value> = catalog
        .screens()
        .map(|screen| {
            json!({
                "name": screen.name(),
                "records": screen.records.len(),
                "search_fields": screen.schema.search_fields,
                "filter_fields": screen.schema.filter_fields,
                "range": screen.schema.range.as_ref().map(RangeTarget::describe),
                "default_sort": screen.schema.default_sort,
            })
        })
        .collect();

    json!({ "screens": screens })
}

/// Run a query built from command line arguments
pub fn query(args: &QueryArgs, config: &Config, catalog: &Catalog) -> CliResult<Value> {
    let request = args.to_request()?;
    let per_page = args.per_page.unwrap_or(config.per_page);
    execute(&request, args.page, per_page, catalog)
}

/// Describe a query built from command line arguments
pub fn explain(args: &QueryArgs, catalog: &Catalog) -> CliResult<String> {
    let request = args.to_request()?;
    let screen = catalog.screen(&request.screen)?;
    let query = resolve(&request, screen)?;

    Ok(ExplainPlan::for_screen(&query, &screen.schema).to_string())
}

/// Filter options and tallies of one screen
pub fn options(name: &str, catalog: &Catalog) -> CliResult<Value> {
    let screen = catalog.screen(name)?;
    Ok(json!({
        "screen": screen.name(),
        "fields": screen.options(),
    }))
}

/// Dashboard summary of every screen
pub fn summary(catalog: &Catalog) -> Value {
    json!({ "screens": catalog.summary() })
}

/// Answer a JSON query request.
///
/// Besides the request keys, `page` and `per_page` are honored.
pub fn answer_request(body: &str, config: &Config, catalog: &Catalog) -> CliResult<Value> {
    let request = QueryRequest::parse(body)?;
    let paging: Paging = serde_json::from_str(body)
        .map_err(|e| QueryError::invalid_request(format!("Invalid paging: {}", e)))?;

    execute(
        &request,
        paging.page.unwrap_or(1),
        paging.per_page.unwrap_or(config.per_page),
        catalog,
    )
}

fn execute(
    request: &QueryRequest,
    page: usize,
    per_page: usize,
    catalog: &Catalog,
) -> CliResult<Value> {
    let screen = catalog.screen(&request.screen)?;
    let query = resolve(request, screen)?;

    let result = screen.apply(&query);
    let view = result.page(page, per_page);

    Ok(json!({
        "screen": screen.name(),
        "total": result.total_count,
        "matched": result.matched_count(),
        "page": view.page,
        "per_page": view.per_page,
        "total_pages": view.total_pages,
        "showing": view.summary(),
        "records": view.records,
    }))
}

fn resolve(request: &QueryRequest, screen: &Screen) -> CliResult<Query> {
    request.to_query(&screen.schema).map_err(|e| {
        warn!(
            event = Event::QueryRejected.as_str(),
            code = e.code().code(),
            screen = screen.name(),
            "query rejected"
        );
        e.into()
    })
}
