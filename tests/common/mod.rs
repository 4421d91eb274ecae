//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use serde_json::json;

pub use docwindow::{
    FindRequest, FinderConfig, Operation, OperationContext, SortSpec, WindowFinder,
};
pub use docwindow_storage::{Filter, JsonTranslator, MemCollection};

// ============================================================================
// Collections
// ============================================================================

/// Collection holding `n` test documents with ids `{prefix}0 ..`.
pub fn collection_of(prefix: &str, n: usize) -> MemCollection {
    let coll = MemCollection::new(prefix);
    coll.insert_many((0..n).map(|i| json!({"_id": format!("{prefix}{i}"), "objectType": "test"})))
        .expect("seed collection");
    coll
}

/// Collection holding documents with the given integer ids, in order.
pub fn collection_with_ids(ids: &[i64]) -> MemCollection {
    let coll = MemCollection::new("ids");
    coll.insert_many(ids.iter().map(|id| json!({"_id": id, "objectType": "test"})))
        .expect("seed collection");
    coll
}

// ============================================================================
// Finder and context
// ============================================================================

pub fn finder() -> WindowFinder<JsonTranslator> {
    WindowFinder::new(JsonTranslator::new(), None)
}

pub fn context() -> OperationContext {
    OperationContext::new(Operation::Find).with_entity("test")
}

/// Run a find into a fresh context, returning the match count and context.
pub fn run(
    finder: &WindowFinder<JsonTranslator>,
    coll: &MemCollection,
    request: FindRequest<'_, Filter, docwindow_storage::Projection>,
) -> (u64, OperationContext) {
    let mut ctx = context();
    let matched = finder.find(&mut ctx, coll, request).expect("find");
    (matched, ctx)
}

pub fn string_ids(ctx: &OperationContext) -> Vec<String> {
    ctx.document_stream()
        .map(|d| d.get_str("_id").expect("string id").to_string())
        .collect()
}

pub fn int_ids(ctx: &OperationContext) -> Vec<i64> {
    ctx.document_stream()
        .map(|d| d.get("_id").and_then(|v| v.as_i64()).expect("integer id"))
        .collect()
}
