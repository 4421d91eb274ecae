//! In-memory document store for docwindow
//!
//! This crate implements the store-side contracts from `docwindow-core`:
//! - MemCollection: ordered, thread-safe record collection (`DocumentStore`)
//! - MemCursor: snapshot cursor with sort, skip, limit and max time (`StoreCursor`)
//! - Filter: query predicates over dotted field paths
//! - Projection: top-level field inclusion
//! - JsonTranslator: native record → canonical document (`RecordTranslator`)
//! - CursorLog: observations of cursor lifecycle for tests and diagnostics
//!
//! # Fault injection
//!
//! `MemCollection::fail_next` arms a one-shot store error at a chosen cursor
//! stage, and `MemCollection::set_latency` simulates slow opens and slow
//! retrieval so server-side time limits and slow-query paths can be driven.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod compare;
pub mod cursor;
pub mod filter;
pub mod projection;
pub mod record;
pub mod translator;

pub use collection::{FaultStage, Latency, MemCollection};
pub use compare::compare_values;
pub use cursor::{CursorLog, MemCursor};
pub use filter::Filter;
pub use projection::Projection;
pub use record::StoredRecord;
pub use translator::JsonTranslator;
