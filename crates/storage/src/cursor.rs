//! Snapshot cursor over an in-memory collection
//!
//! A cursor captures the matched, projected records when it is opened.
//! Sorting happens on that snapshot, `count` ignores skip and limit, and
//! `materialize` applies skip then limit in cursor order.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::trace;

use docwindow_core::{ReadPreference, SortSpec, StoreCursor, StoreError, StoreResult};

use crate::collection::FaultStage;
use crate::compare::compare_fields;
use crate::record::StoredRecord;

/// Observations of cursor activity on one collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorLog {
    /// Cursors opened
    pub opened: u64,
    /// Cursors closed (each counted once)
    pub closed: u64,
    /// `materialize` calls
    pub materialized: u64,
    /// Read preference most recently applied
    pub last_read_preference: Option<ReadPreference>,
    /// Max time most recently applied
    pub last_max_time: Option<Duration>,
    /// Sort most recently applied
    pub last_sort: Option<SortSpec>,
    /// Skip most recently applied
    pub last_skip: Option<u64>,
    /// Limit most recently applied
    pub last_limit: Option<u64>,
}

impl CursorLog {
    /// Cursors opened but not yet closed
    pub fn open_cursors(&self) -> u64 {
        self.opened - self.closed
    }
}

/// Cursor over a snapshot of matched records
#[derive(Debug)]
pub struct MemCursor {
    records: Vec<StoredRecord>,
    skip: u64,
    limit: Option<u64>,
    max_time: Option<Duration>,
    retrieval_latency: Duration,
    faults: Vec<(FaultStage, StoreError)>,
    closed: bool,
    log: Arc<Mutex<CursorLog>>,
}

impl MemCursor {
    pub(crate) fn new(
        records: Vec<StoredRecord>,
        retrieval_latency: Duration,
        faults: Vec<(FaultStage, StoreError)>,
        log: Arc<Mutex<CursorLog>>,
    ) -> Self {
        log.lock().opened += 1;
        trace!(target: "docwindow::storage", matched = records.len(), "cursor opened");
        Self {
            records,
            skip: 0,
            limit: None,
            max_time: None,
            retrieval_latency,
            faults,
            closed: false,
            log,
        }
    }

    /// True once `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn take_fault(&mut self, stage: FaultStage) -> StoreResult<()> {
        match self.faults.iter().position(|(s, _)| *s == stage) {
            Some(i) => Err(self.faults.remove(i).1),
            None => Ok(()),
        }
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::other("cursor already closed"));
        }
        Ok(())
    }
}

impl StoreCursor for MemCursor {
    type Record = StoredRecord;

    fn apply_read_preference(&mut self, preference: ReadPreference) {
        self.log.lock().last_read_preference = Some(preference);
    }

    fn set_max_time(&mut self, max_time: Duration) {
        self.max_time = Some(max_time);
        self.log.lock().last_max_time = Some(max_time);
    }

    fn sort(&mut self, spec: &SortSpec) -> StoreResult<()> {
        self.ensure_open()?;
        self.take_fault(FaultStage::Sort)?;
        self.records.sort_by(|a, b| {
            spec.keys().iter().fold(std::cmp::Ordering::Equal, |ord, key| {
                ord.then_with(|| {
                    key.direction
                        .apply(compare_fields(a.get(&key.field), b.get(&key.field)))
                })
            })
        });
        self.log.lock().last_sort = Some(spec.clone());
        Ok(())
    }

    fn count(&mut self) -> StoreResult<u64> {
        self.ensure_open()?;
        self.take_fault(FaultStage::Count)?;
        Ok(self.records.len() as u64)
    }

    fn skip(&mut self, n: u64) {
        self.skip = n;
        self.log.lock().last_skip = Some(n);
    }

    fn limit(&mut self, n: u64) {
        self.limit = Some(n);
        self.log.lock().last_limit = Some(n);
    }

    fn materialize(&mut self) -> StoreResult<Vec<StoredRecord>> {
        self.ensure_open()?;
        self.log.lock().materialized += 1;
        self.take_fault(FaultStage::Materialize)?;

        if let Some(max_time) = self.max_time {
            if self.retrieval_latency > max_time {
                return Err(StoreError::timeout(format!(
                    "operation exceeded time limit of {}ms",
                    max_time.as_millis()
                )));
            }
        }
        if !self.retrieval_latency.is_zero() {
            std::thread::sleep(self.retrieval_latency);
        }

        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let limit = self
            .limit
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        Ok(self.records.iter().skip(skip).take(limit).cloned().collect())
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.log.lock().closed += 1;
            trace!(target: "docwindow::storage", "cursor closed");
        }
    }
}
