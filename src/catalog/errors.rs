//! Catalog errors

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Invalid screen '{screen}': {reason}")]
    InvalidScreen { screen: String, reason: String },

    // Records file errors
    #[error("Cannot read records file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed records file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {index} of screen '{screen}' is not a JSON object")]
    NotAnObject { screen: String, index: usize },
}

impl CatalogError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::UnknownScreen(_) => "CLINIC_CATALOG_UNKNOWN_SCREEN",
            CatalogError::InvalidScreen { .. } => "CLINIC_CATALOG_INVALID_SCREEN",
            CatalogError::Unreadable { .. } => "CLINIC_CATALOG_UNREADABLE",
            CatalogError::Malformed { .. } => "CLINIC_CATALOG_MALFORMED",
            CatalogError::NotAnObject { .. } => "CLINIC_CATALOG_NOT_AN_OBJECT",
        }
    }
}
