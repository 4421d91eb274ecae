//! Canonical documents
//!
//! A [`Document`] is the store-independent representation handed to the CRUD
//! layer. It wraps a JSON value; field access uses dotted paths where numeric
//! segments index into arrays (`"items.0.sku"`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical, store-independent document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap a JSON value
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Value at a dotted path, if present
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup_path(&self.root, path)
    }

    /// String value at a dotted path, if present and a string
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Root JSON value
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Mutable root JSON value
    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    /// Consume and return the root JSON value
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Serialized JSON size in bytes
    pub fn encoded_len(&self) -> usize {
        serde_json::to_vec(&self.root).map(|v| v.len()).unwrap_or(0)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Resolve a dotted path against a JSON value
///
/// An empty path resolves to the value itself.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
