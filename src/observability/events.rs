//! Observable events
//!
//! Events are explicit and typed. Each renders to a stable SCREAMING_SNAKE
//! name that is attached to tracing output as the `event` field.

use std::fmt;

/// Observable events in clinicdesk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded and validated
    ConfigLoaded,

    // Catalog
    /// Built-in fixtures registered
    CatalogLoaded,
    /// Collections replaced or added from a records file
    RecordsFileLoaded,
    /// Screen declaration registered from configuration
    ScreenRegistered,

    // Query processing
    /// Query applied to a collection
    QueryApplied,
    /// Query produced no visible records
    QueryEmpty,
    /// Query text rejected
    QueryRejected,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::RecordsFileLoaded => "RECORDS_FILE_LOADED",
            Event::ScreenRegistered => "SCREEN_REGISTERED",
            Event::QueryApplied => "QUERY_APPLIED",
            Event::QueryEmpty => "QUERY_EMPTY",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
