//! Core types and traits for docwindow
//!
//! This crate defines the vocabulary shared by the executor and by store
//! implementations:
//! - Window: inclusive `[from, to]` pagination bounds and their resolution
//! - SortSpec: ordered `(field, direction)` sort keys
//! - ReadPreference: read-consistency token handed to the store
//! - Document: canonical, store-independent document
//! - Operation / InterceptPoint: CRUD operation kinds and interception points
//! - Error: error taxonomy (admission, consistency, store, translation, config)
//! - FinderConfig: executor configuration loaded from TOML
//! - Traits: DocumentStore, StoreCursor, RecordTranslator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod operation;
pub mod read_preference;
pub mod sort;
pub mod traits;
pub mod window;

pub use config::{FinderConfig, CONFIG_FILE_NAME};
pub use document::{lookup_path, Document};
pub use error::{Error, Result, StoreError, StoreErrorKind, StoreResult};
pub use operation::{InterceptPoint, Operation};
pub use read_preference::ReadPreference;
pub use sort::{SortDirection, SortKey, SortSpec};
pub use traits::{DocumentStore, RecordTranslator, StoreCursor};
pub use window::{ResolvedWindow, RetrievalPlan, Window};
