//! Configuration file
//!
//! Optional JSON file passed with `--config`. Every key has a default, so an
//! empty object is a valid configuration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::observability::{is_valid_level, LOG_LEVELS};
use crate::schema::ScreenSchema;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Records file replacing or adding collections (optional).
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub records_path: Option<PathBuf>,

    /// Extra screen declarations (optional)
    #[serde(default)]
    pub screens: Vec<ScreenSchema>,

    /// Default page size (optional, default 10)
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_per_page() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            records_path: None,
            screens: Vec::new(),
            per_page: default_per_page(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let (Some(records), Some(dir)) = (config.records_path.as_mut(), path.parent()) {
            if records.is_relative() {
                *records = dir.join(&*records);
            }
        }

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if !is_valid_level(&self.log_level) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.per_page == 0 {
            return Err(CliError::config_error("per_page must be > 0"));
        }

        let mut names = HashSet::new();
        for screen in &self.screens {
            if screen.name.trim().is_empty() {
                return Err(CliError::config_error("Screen name must not be empty"));
            }
            if !names.insert(screen.name.as_str()) {
                return Err(CliError::config_error(format!(
                    "Duplicate screen: '{}'",
                    screen.name
                )));
            }
        }

        Ok(())
    }

    /// Builds the catalog: built-in screens, then configured declarations,
    /// then the records file
    pub fn build_catalog(&self) -> CliResult<Catalog> {
        let mut catalog = Catalog::builtin();

        for screen in &self.screens {
            catalog.register_schema(screen.clone())?;
        }

        if let Some(path) = &self.records_path {
            catalog.load_records_file(path)?;
        }

        Ok(catalog)
    }
}
