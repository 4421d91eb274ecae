//! docwindow - bounded-window query execution over document stores
//!
//! docwindow runs a query against a pluggable document store and retrieves
//! only an inclusive `[from, to]` window of the sorted results, publishing
//! them as canonical documents and reporting the total match count for
//! pagination.
//!
//! # Quick Start
//!
//! ```ignore
//! use docwindow::{FindRequest, Operation, OperationContext, WindowFinder};
//!
//! let finder = WindowFinder::new(translator, None);
//! let mut ctx = OperationContext::new(Operation::Find);
//!
//! // Second page of ten, newest first
//! let sort = SortSpec::descending("createdAt");
//! let matched = finder.find(&mut ctx, &store, FindRequest::all().sort(&sort).from(10).to(19))?;
//! ```
//!
//! # Architecture
//!
//! The store and the record translator are traits from `docwindow-core`;
//! the executor drives them and never inspects queries or records itself.
//! Only the executor API is re-exported here.

// Re-export the public API from docwindow-executor
pub use docwindow_executor::*;

// Configuration loading lives with the core types
pub use docwindow_core::config;
