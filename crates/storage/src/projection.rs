//! Field projection for the in-memory store

use serde_json::Map;

use crate::record::StoredRecord;

/// Inclusion projection over top-level fields; `_id` is always kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    include: Vec<String>,
}

impl Projection {
    /// Keep only the named top-level fields (plus `_id`)
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields named by this projection
    pub fn fields(&self) -> &[String] {
        &self.include
    }

    /// Apply to a record
    pub fn apply(&self, record: &StoredRecord) -> StoredRecord {
        let mut fields = Map::new();
        for (name, value) in record.fields() {
            if name == "_id" || self.include.iter().any(|f| f == name) {
                fields.insert(name.clone(), value.clone());
            }
        }
        StoredRecord::from_map(fields)
    }
}
