//! Translation of stored records into canonical documents

use docwindow_core::{Document, RecordTranslator, Result};

use crate::record::StoredRecord;

/// Translates [`StoredRecord`]s one-to-one into canonical [`Document`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTranslator;

impl JsonTranslator {
    /// Create a translator
    pub fn new() -> Self {
        JsonTranslator
    }
}

impl RecordTranslator<StoredRecord> for JsonTranslator {
    fn to_canonical(&self, records: Vec<StoredRecord>) -> Result<Vec<Document>> {
        Ok(records
            .into_iter()
            .map(|r| Document::new(r.into_json()))
            .collect())
    }
}
