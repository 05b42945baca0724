//! Screen catalog
//!
//! Holds every management screen with its declarations and records, in
//! navigation order. Starts from the built-in fixtures; a records file or
//! extra declarations from configuration may replace or add screens.
//!
//! Records are immutable once registered. Queries borrow them.

mod errors;
pub mod fixtures;

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::engine::{ExecutionResult, RecordQueryEngine};
use crate::observability::Event;
use crate::query::Query;
use crate::record::Record;
use crate::schema::{filter_options, tally, FilterOption, ScreenSchema, Tally};

pub use errors::{CatalogError, CatalogResult};

/// Field tallied by the dashboard summary
pub const STATUS_FIELD: &str = "status";

/// One screen: declarations plus its record collection
#[derive(Debug, Clone)]
pub struct Screen {
    pub schema: ScreenSchema,
    pub records: Vec<Record>,
}

impl Screen {
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// Applies a query using this screen's field declarations
    pub fn apply(&self, query: &Query) -> ExecutionResult {
        RecordQueryEngine::new(&self.schema).apply(&self.records, query)
    }

    /// Option sets and tallies for every filterable field
    pub fn options(&self) -> Vec<FieldOptions> {
        self.schema
            .filter_fields
            .iter()
            .map(|field| FieldOptions {
                field: field.clone(),
                options: filter_options(&self.records, field),
                tallies: tally(&self.records, field),
            })
            .collect()
    }

    /// Record count and status breakdown
    pub fn summary(&self) -> ScreenSummary {
        ScreenSummary {
            screen: self.schema.name.clone(),
            records: self.records.len(),
            status: tally(&self.records, STATUS_FIELD),
        }
    }
}

/// Dropdown content for one filterable field
#[derive(Debug, Clone, Serialize)]
pub struct FieldOptions {
    pub field: String,
    pub options: Vec<FilterOption>,
    pub tallies: Vec<Tally>,
}

/// Dashboard card for one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSummary {
    pub screen: String,
    pub records: usize,
    /// Empty when no record carries a status
    pub status: Vec<Tally>,
}

/// Ordered set of screens
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    screens: Vec<Screen>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in fixture screens
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (schema, records) in fixtures::all() {
            catalog.insert(Screen { schema, records });
        }

        info!(
            event = Event::CatalogLoaded.as_str(),
            screens = catalog.screens.len(),
            "built-in catalog loaded"
        );
        catalog
    }

    /// Adds a screen, replacing any screen of the same name in place
    pub fn register(&mut self, schema: ScreenSchema, records: Vec<Record>) -> CatalogResult<()> {
        check_schema(&schema)?;
        self.insert(Screen { schema, records });
        Ok(())
    }

    /// Declares a screen. An existing screen keeps its records; a new one
    /// starts empty.
    pub fn register_schema(&mut self, schema: ScreenSchema) -> CatalogResult<()> {
        check_schema(&schema)?;

        info!(
            event = Event::ScreenRegistered.as_str(),
            screen = %schema.name,
            "screen declared"
        );

        match self.position(&schema.name) {
            Some(i) => self.screens[i].schema = schema,
            None => self.screens.push(Screen {
                schema,
                records: Vec::new(),
            }),
        }
        Ok(())
    }

    /// Replaces the records of a screen, adding an undeclared screen when
    /// the name is new
    pub fn replace_records(&mut self, name: &str, records: Vec<Record>) {
        match self.position(name) {
            Some(i) => self.screens[i].records = records,
            None => self.screens.push(Screen {
                schema: ScreenSchema::new(name),
                records,
            }),
        }
    }

    /// Loads a JSON file of the form `{"screen": [record, ...], ...}`.
    ///
    /// Every listed screen has its records replaced. Returns the number of
    /// records loaded. Nothing is changed if any part of the file is invalid.
    pub fn load_records_file(&mut self, path: &Path) -> CatalogResult<usize> {
        let shown = path.display().to_string();

        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
            path: shown.clone(),
            source,
        })?;

        let collections = parse_collections(&text).map_err(|source| CatalogError::Malformed {
            path: shown.clone(),
            source,
        })?;

        let mut loaded = Vec::with_capacity(collections.len());
        for (screen, values) in collections {
            let records = values
                .into_iter()
                .enumerate()
                .map(|(index, value)| {
                    Record::from_value(value).ok_or_else(|| CatalogError::NotAnObject {
                        screen: screen.clone(),
                        index,
                    })
                })
                .collect::<CatalogResult<Vec<Record>>>()?;
            loaded.push((screen, records));
        }

        let count = loaded.iter().map(|(_, records)| records.len()).sum();
        let screens = loaded.len();
        for (screen, records) in loaded {
            self.replace_records(&screen, records);
        }

        info!(
            event = Event::RecordsFileLoaded.as_str(),
            path = %shown,
            screens,
            records = count,
            "records file loaded"
        );
        Ok(count)
    }

    /// Looks up a screen by name
    pub fn screen(&self, name: &str) -> CatalogResult<&Screen> {
        self.screens
            .iter()
            .find(|s| s.schema.name == name)
            .ok_or_else(|| CatalogError::UnknownScreen(name.to_string()))
    }

    /// Screens in navigation order
    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Applies a query to the named screen
    pub fn query(&self, name: &str, query: &Query) -> CatalogResult<ExecutionResult> {
        Ok(self.screen(name)?.apply(query))
    }

    /// Dashboard summary of every screen
    pub fn summary(&self) -> Vec<ScreenSummary> {
        self.screens.iter().map(Screen::summary).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.schema.name == name)
    }

    fn insert(&mut self, screen: Screen) {
        match self.position(screen.name()) {
            Some(i) => self.screens[i] = screen,
            None => self.screens.push(screen),
        }
    }
}

fn check_schema(schema: &ScreenSchema) -> CatalogResult<()> {
    schema
        .validate_structure()
        .map_err(|reason| CatalogError::InvalidScreen {
            screen: schema.name.clone(),
            reason,
        })
}

fn parse_collections(text: &str) -> Result<Vec<(String, Vec<Value>)>, serde_json::Error> {
    let root: Map<String, Value> = serde_json::from_str(text)?;

    let mut collections = Vec::with_capacity(root.len());
    for (screen, value) in root {
        let records: Vec<Value> = serde_json::from_value(value)?;
        collections.push((screen, records));
    }
    Ok(collections)
}
