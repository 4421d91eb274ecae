//! # docwindow executor
//!
//! Bounded-window query execution over a pluggable document store.
//!
//! - [`WindowFinder`] - runs a query and retrieves an inclusive `[from, to]`
//!   window of the sorted results
//! - [`FindRequest`] - query, projection, sort and window for one call
//! - [`OperationSink`] / [`OperationContext`] - where found documents land
//! - [`InterceptorChain`] - per-document hooks run after publication
//!
//! ## Quick Start
//!
//! ```text
//! use docwindow_executor::{FindRequest, OperationContext, WindowFinder};
//!
//! let finder = WindowFinder::new(translator, None);
//! let mut ctx = OperationContext::new(Operation::Find);
//!
//! // Documents 3..=9 of everything matching `filter`
//! let matched = finder.find(&mut ctx, &store, FindRequest::all().filter(&filter).from(3).to(9))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cursor_guard;
mod finder;
mod interceptor;
mod request;
mod sink;
mod stats;

#[cfg(test)]
mod tests;

// =============================================================================
// Public API
// =============================================================================

pub use cursor_guard::CursorGuard;
pub use finder::WindowFinder;
pub use interceptor::{Interceptor, InterceptorChain};
pub use request::FindRequest;
pub use sink::{DocCtx, OperationContext, OperationInfo, OperationSink};
pub use stats::{
    slow_results_enabled, ExecutionStats, FINDER_TARGET, SLOW_QUERY_THRESHOLD,
    SLOW_RESULTS_TARGET,
};

// Re-export core types so users don't need docwindow-core directly
pub use docwindow_core::{
    Document, DocumentStore, Error, FinderConfig, InterceptPoint, Operation, ReadPreference,
    RecordTranslator, ResolvedWindow, Result, RetrievalPlan, SortDirection, SortKey, SortSpec,
    StoreCursor, StoreError, StoreErrorKind, StoreResult, Window, CONFIG_FILE_NAME,
};
