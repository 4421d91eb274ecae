//! Per-call execution statistics and slow-result diagnostics

use std::fmt;
use std::time::Duration;

use tracing::{debug, Level};

use docwindow_core::ResolvedWindow;

/// Tracing target for executor progress messages
pub const FINDER_TARGET: &str = "docwindow::finder";

/// Tracing target for diagnostic events about expensive queries
pub const SLOW_RESULTS_TARGET: &str = "docwindow::slowresults";

/// Execution or retrieval time above which a query is reported as slow
pub const SLOW_QUERY_THRESHOLD: Duration = Duration::from_millis(100);

/// True when a subscriber wants slow-result diagnostics
pub fn slow_results_enabled() -> bool {
    tracing::enabled!(target: SLOW_RESULTS_TARGET, Level::DEBUG)
}

/// Timings and counts gathered during one find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Time to open and configure the cursor
    pub execution_time: Duration,
    /// Time to materialize the windowed records
    pub retrieval_time: Duration,
    /// Documents matching the query
    pub matched: u64,
    /// Documents retrieved and published
    pub retrieved: u64,
    /// Estimated payload size; only computed when diagnostics will be emitted
    pub data_size: usize,
    /// Resolved window
    pub window: ResolvedWindow,
}

impl ExecutionStats {
    pub(crate) fn new(execution_time: Duration, matched: u64, window: ResolvedWindow) -> Self {
        Self {
            execution_time,
            retrieval_time: Duration::ZERO,
            matched,
            retrieved: 0,
            data_size: 0,
            window,
        }
    }

    /// Either phase exceeded [`SLOW_QUERY_THRESHOLD`]
    pub fn is_slow(&self) -> bool {
        self.execution_time > SLOW_QUERY_THRESHOLD || self.retrieval_time > SLOW_QUERY_THRESHOLD
    }

    pub(crate) fn report_if_slow(&self, query: &dyn fmt::Debug) {
        if !self.is_slow() || !slow_results_enabled() {
            return;
        }
        debug!(
            target: SLOW_RESULTS_TARGET,
            execution_time_ms = self.execution_time.as_millis() as u64,
            retrieval_time_ms = self.retrieval_time.as_millis() as u64,
            matched = self.matched,
            retrieved = self.retrieved,
            data_size = self.data_size as u64,
            query = ?query,
            from = self.window.from,
            to = self.window.to,
            "slow query"
        );
    }
}
