//! Record type shared by the engine, the catalog and the CLI
//!
//! A record is an immutable field -> value mapping. Values are JSON scalars
//! (strings, numbers, ISO-8601 timestamps rendered as strings).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a record from a JSON object map
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Creates a record from a JSON value.
    ///
    /// Returns None unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Returns the raw value of a field.
    ///
    /// Null counts as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Returns the rendered string form of a field
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).map(render)
    }

    /// Returns the field as a string slice if it holds a JSON string
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns true if the field is present and non-null
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates field names in authored order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Converts the record back into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Renders a JSON scalar the way a table cell shows it.
///
/// Strings are unquoted; everything else uses its JSON text.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
