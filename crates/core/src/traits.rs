//! Collaborator traits for the window executor
//!
//! The executor drives a store and a translator only through these traits.
//! Query and projection are associated types the executor never inspects.

use std::time::Duration;

use crate::document::Document;
use crate::error::{Result, StoreResult};
use crate::read_preference::ReadPreference;
use crate::sort::SortSpec;

/// Handle to a queryable collection of native records
pub trait DocumentStore {
    /// Filter predicate understood by this store
    type Query;
    /// Field-selection spec understood by this store
    type Projection;
    /// Native record type produced by cursors
    type Record;
    /// Cursor type opened by [`find`](Self::find)
    type Cursor: StoreCursor<Record = Self::Record>;

    /// Count records matching `query` (`None` matches everything)
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot evaluate the query.
    fn count(&self, query: Option<&Self::Query>) -> StoreResult<u64>;

    /// Open a cursor over records matching `query`, shaped by `projection`
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the query or cannot be reached.
    fn find(
        &self,
        query: Option<&Self::Query>,
        projection: Option<&Self::Projection>,
    ) -> StoreResult<Self::Cursor>;
}

/// Open cursor over a store query
///
/// Configuration calls (`sort`, `skip`, `limit`, read preference, max time)
/// must precede [`materialize`](Self::materialize). [`close`](Self::close)
/// must be idempotent and safe to call in any state.
pub trait StoreCursor {
    /// Native record type produced by this cursor
    type Record;

    /// Route reads according to `preference`
    fn apply_read_preference(&mut self, preference: ReadPreference);

    /// Ask the store to abort the query once `max_time` has elapsed
    fn set_max_time(&mut self, max_time: Duration);

    /// Order results by `spec`
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the sort.
    fn sort(&mut self, spec: &SortSpec) -> StoreResult<()>;

    /// Number of records matching the cursor's query, ignoring skip and limit
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot evaluate the count.
    fn count(&mut self) -> StoreResult<u64>;

    /// Skip the first `n` sorted records
    fn skip(&mut self, n: u64);

    /// Return at most `n` records
    fn limit(&mut self, n: u64);

    /// Read every record selected by the cursor, in cursor order
    ///
    /// # Errors
    ///
    /// Returns an error on connectivity loss or when the max time elapses.
    fn materialize(&mut self) -> StoreResult<Vec<Self::Record>>;

    /// Release the cursor's server-side resources
    fn close(&mut self);
}

/// Converts native store records into canonical documents
pub trait RecordTranslator<R> {
    /// Translate records, preserving order
    ///
    /// On success the output has the same length as the input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Translation` if a record cannot be represented.
    fn to_canonical(&self, records: Vec<R>) -> Result<Vec<Document>>;

    /// Approximate payload size of translated documents, in bytes
    ///
    /// Used for diagnostics only.
    fn estimate_size(&self, documents: &[Document]) -> usize {
        documents.iter().map(Document::encoded_len).sum()
    }
}
