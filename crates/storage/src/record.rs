//! Native record representation of the in-memory store

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use docwindow_core::{lookup_path, StoreError, StoreResult};

/// A stored record: a JSON object with named fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredRecord {
    fields: Map<String, Value>,
}

impl StoredRecord {
    /// Build a record from a JSON value, which must be an object
    ///
    /// # Errors
    ///
    /// Returns a malformed-query store error for non-object values.
    pub fn from_json(value: Value) -> StoreResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(StoreError::malformed_query(format!(
                "records must be JSON objects, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Build a record from an object map
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Value at a dotted path
    pub fn get(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            None => self.fields.get(path),
            Some((head, rest)) => self.fields.get(head).and_then(|v| lookup_path(v, rest)),
        }
    }

    /// Record identifier (`_id` field), if present
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("_id")
    }

    /// Top-level fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume into a JSON object value
    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
