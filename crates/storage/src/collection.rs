//! MemCollection: in-memory document collection
//!
//! Records are kept in insertion order, which is the collection's natural
//! order. Readers and writers are synchronized with `parking_lot::RwLock`;
//! cursors work on a snapshot taken when they are opened, so concurrent
//! inserts never disturb an open cursor.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::debug;

use docwindow_core::{DocumentStore, StoreError, StoreResult};

use crate::cursor::{CursorLog, MemCursor};
use crate::filter::Filter;
use crate::projection::Projection;
use crate::record::StoredRecord;

/// Cursor stage at which an injected fault fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultStage {
    /// Opening the cursor (`DocumentStore::find`)
    Open,
    /// Applying a sort
    Sort,
    /// Counting matched records
    Count,
    /// Reading records
    Materialize,
}

/// Simulated store latency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    /// Delay while opening a cursor
    pub open: Duration,
    /// Delay while materializing; compared against the cursor's max time
    pub retrieval: Duration,
}

/// In-memory collection implementing [`DocumentStore`]
#[derive(Debug)]
pub struct MemCollection {
    name: String,
    records: RwLock<Vec<StoredRecord>>,
    faults: Mutex<Vec<(FaultStage, StoreError)>>,
    latency: Mutex<Latency>,
    log: Arc<Mutex<CursorLog>>,
}

impl MemCollection {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: RwLock::new(Vec::new()),
            faults: Mutex::new(Vec::new()),
            latency: Mutex::new(Latency::default()),
            log: Arc::new(Mutex::new(CursorLog::default())),
        }
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a record
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a JSON object.
    pub fn insert(&self, value: Value) -> StoreResult<()> {
        let record = StoredRecord::from_json(value)?;
        self.records.write().push(record);
        Ok(())
    }

    /// Append several records; nothing is inserted if any is invalid
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not a JSON object.
    pub fn insert_many(&self, values: impl IntoIterator<Item = Value>) -> StoreResult<()> {
        let records = values
            .into_iter()
            .map(StoredRecord::from_json)
            .collect::<StoreResult<Vec<_>>>()?;
        self.records.write().extend(records);
        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Arm a one-shot failure for the next cursor reaching `stage`
    pub fn fail_next(&self, stage: FaultStage, error: StoreError) {
        self.faults.lock().push((stage, error));
    }

    /// Simulate store latency for subsequently opened cursors
    pub fn set_latency(&self, latency: Latency) {
        *self.latency.lock() = latency;
    }

    /// Snapshot of cursor observations
    pub fn cursor_log(&self) -> CursorLog {
        self.log.lock().clone()
    }

    fn matching(&self, query: Option<&Filter>) -> Vec<StoredRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| query.map_or(true, |q| q.matches(r)))
            .cloned()
            .collect()
    }
}

impl DocumentStore for MemCollection {
    type Query = Filter;
    type Projection = Projection;
    type Record = StoredRecord;
    type Cursor = MemCursor;

    fn count(&self, query: Option<&Filter>) -> StoreResult<u64> {
        let records = self.records.read();
        let n = records
            .iter()
            .filter(|r| query.map_or(true, |q| q.matches(r)))
            .count();
        Ok(n as u64)
    }

    fn find(
        &self,
        query: Option<&Filter>,
        projection: Option<&Projection>,
    ) -> StoreResult<MemCursor> {
        let mut armed = std::mem::take(&mut *self.faults.lock());
        if let Some(i) = armed.iter().position(|(s, _)| *s == FaultStage::Open) {
            let (_, err) = armed.remove(i);
            self.faults.lock().extend(armed);
            return Err(err);
        }

        let latency = *self.latency.lock();
        if !latency.open.is_zero() {
            std::thread::sleep(latency.open);
        }

        let mut records = self.matching(query);
        if let Some(projection) = projection {
            records = records.iter().map(|r| projection.apply(r)).collect();
        }
        debug!(
            target: "docwindow::storage",
            collection = %self.name,
            matched = records.len(),
            "query evaluated"
        );
        Ok(MemCursor::new(
            records,
            latency.retrieval,
            armed,
            Arc::clone(&self.log),
        ))
    }
}
