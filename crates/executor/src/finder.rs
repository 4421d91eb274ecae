//! Windowed find
//!
//! [`WindowFinder`] runs one query against a [`DocumentStore`], retrieves
//! only the requested inclusive window of the sorted result set, translates
//! the records into canonical documents and publishes them to an
//! [`OperationSink`]. It returns the number of documents that matched the
//! query, which callers use for pagination.
//!
//! Order of work for one call:
//! 1. open the cursor, apply read preference and max time
//! 2. sort (delegated to the store)
//! 3. count matches
//! 4. resolve the window against the match count
//! 5. admission check against the result-set cap
//! 6. skip/limit, materialize, translate, verify the count
//! 7. publish, tag and intercept each document
//! 8. slow-result diagnostics
//!
//! The cursor is owned by a [`CursorGuard`] for the whole call and closed
//! on every exit path.

use std::fmt;
use std::time::Instant;

use tracing::{debug, warn};

use docwindow_core::{
    DocumentStore, Error, FinderConfig, InterceptPoint, Operation, ReadPreference,
    RecordTranslator, Result, StoreCursor,
};

use crate::cursor_guard::CursorGuard;
use crate::request::FindRequest;
use crate::sink::OperationSink;
use crate::stats::{slow_results_enabled, ExecutionStats, FINDER_TARGET, SLOW_RESULTS_TARGET};

/// Executes windowed finds
///
/// Holds no per-call state, so one finder can serve concurrent calls as long
/// as each call has its own sink.
#[derive(Debug, Clone, Default)]
pub struct WindowFinder<T> {
    translator: T,
    config: FinderConfig,
}

impl<T> WindowFinder<T> {
    /// Finder with the given read preference and no limits
    pub fn new(translator: T, read_preference: Option<ReadPreference>) -> Self {
        Self::with_config(
            translator,
            FinderConfig {
                read_preference,
                ..FinderConfig::default()
            },
        )
    }

    /// Finder with a loaded configuration
    pub fn with_config(translator: T, config: FinderConfig) -> Self {
        Self { translator, config }
    }

    /// Read preference applied to every subsequent cursor
    pub fn set_read_preference(&mut self, read_preference: Option<ReadPreference>) {
        self.config.read_preference = read_preference;
    }

    /// Cap on documents retrieved per call; 0 disables the cap
    pub fn set_max_result_set_size(&mut self, max: u64) {
        self.config.max_result_set_size = max;
    }

    /// Server-side query time limit in milliseconds; 0 disables the limit
    pub fn set_max_query_time_ms(&mut self, max_ms: u64) {
        self.config.max_query_time_ms = max_ms;
    }

    /// Current configuration
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Record translator
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Find documents and publish the requested window to `sink`
    ///
    /// Returns the number of documents matching the query, independent of
    /// how many fall inside the window.
    ///
    /// # Errors
    ///
    /// - [`Error::TooManyResults`] if the window exceeds the result-set cap;
    ///   checked before any record is read.
    /// - [`Error::ResultSetMismatch`] if translation yields a different
    ///   number of documents than were requested.
    /// - [`Error::Store`] for any store failure, unchanged.
    /// - [`Error::Translation`] if the translator rejects a record.
    ///
    /// The sink is untouched when an error is returned.
    pub fn find<S, K>(
        &self,
        sink: &mut K,
        store: &S,
        request: FindRequest<'_, S::Query, S::Projection>,
    ) -> Result<u64>
    where
        S: DocumentStore,
        S::Query: fmt::Debug,
        T: RecordTranslator<S::Record>,
        K: OperationSink + ?Sized,
    {
        let query = request.query;
        debug!(target: FINDER_TARGET, query = ?query, "submitting query");

        let started = Instant::now();
        let mut cursor = CursorGuard::new(store.find(query, request.projection)?);
        if let Some(preference) = self.config.read_preference {
            cursor.apply_read_preference(preference);
        }
        if let Some(max_time) = self.config.max_query_time() {
            cursor.set_max_time(max_time);
        }
        let execution_time = started.elapsed();
        debug!(target: FINDER_TARGET, "query evaluated");

        if let Some(sort) = request.sort {
            cursor.sort(sort)?;
            debug!(target: FINDER_TARGET, sort = %sort, "result set sorted");
        }

        let matched = cursor.count()?;
        debug!(
            target: FINDER_TARGET,
            matched,
            from = ?request.window.from,
            to = ?request.window.to,
            "applying window"
        );
        let window = request.window.resolve(matched);
        let mut stats = ExecutionStats::new(execution_time, matched, window);

        if let Some(plan) = window.plan() {
            if let Some(max) = self.config.result_set_cap() {
                if plan.limit > max {
                    warn!(
                        target: FINDER_TARGET,
                        requested = plan.limit,
                        max,
                        "too many results"
                    );
                    debug!(
                        target: SLOW_RESULTS_TARGET,
                        resultset_size = matched,
                        requested = plan.limit,
                        query = ?query,
                        "too many results"
                    );
                    return Err(Error::TooManyResults {
                        requested: plan.limit,
                        max,
                    });
                }
            }

            cursor.skip(plan.skip);
            cursor.limit(plan.limit);
            debug!(target: FINDER_TARGET, skip = plan.skip, limit = plan.limit, "retrieving results");
            let retrieval_started = Instant::now();
            let records = cursor.materialize()?;
            stats.retrieval_time = retrieval_started.elapsed();
            debug!(target: FINDER_TARGET, count = records.len(), "retrieved results");

            let documents = self.translator.to_canonical(records)?;
            let retrieved = documents.len() as u64;
            if retrieved != plan.limit {
                return Err(Error::ResultSetMismatch {
                    requested: plan.limit,
                    retrieved,
                });
            }
            stats.retrieved = retrieved;
            if stats.is_slow() && slow_results_enabled() {
                stats.data_size = self.translator.estimate_size(&documents);
            }

            for index in sink.add_documents(documents) {
                if let Some(doc) = sink.documents_mut().get_mut(index) {
                    doc.set_operation_performed(Operation::Find);
                }
                sink.call_interceptors(InterceptPoint::PostFindDoc, index);
            }
            debug!(target: FINDER_TARGET, count = retrieved, "translated records");
        }

        drop(cursor);
        stats.report_if_slow(&query);
        Ok(matched)
    }
}
