//! Shared fixtures: seeded collections, odd translators and log capture.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use docwindow_storage::{JsonTranslator, MemCollection, StoredRecord};

use crate::{Document, Error, Operation, OperationContext, RecordTranslator, Result, WindowFinder};

/// Collection of `n` documents with ids `{prefix}0 .. {prefix}{n-1}`.
pub fn seeded(prefix: &str, n: usize) -> MemCollection {
    let coll = MemCollection::new("test");
    coll.insert_many((0..n).map(|i| json!({"_id": format!("{prefix}{i}"), "objectType": "test"})))
        .unwrap();
    coll
}

/// Collection of documents with integer ids, in the given order.
pub fn numbered(ids: &[i64]) -> MemCollection {
    let coll = MemCollection::new("numbered");
    coll.insert_many(ids.iter().map(|id| json!({"_id": id, "objectType": "test"})))
        .unwrap();
    coll
}

pub fn finder() -> WindowFinder<JsonTranslator> {
    WindowFinder::new(JsonTranslator::new(), None)
}

pub fn find_ctx() -> OperationContext {
    OperationContext::new(Operation::Find).with_entity("test")
}

/// String ids of published documents, in order.
pub fn ids(ctx: &OperationContext) -> Vec<String> {
    ctx.document_stream()
        .map(|d| d.get_str("_id").unwrap().to_string())
        .collect()
}

/// Integer ids of published documents, in order.
pub fn int_ids(ctx: &OperationContext) -> Vec<i64> {
    ctx.document_stream()
        .map(|d| d.get("_id").and_then(|v| v.as_i64()).unwrap())
        .collect()
}

// =============================================================================
// Translators
// =============================================================================

/// Loses the last record of every batch.
#[derive(Debug, Default)]
pub struct DroppingTranslator;

impl RecordTranslator<StoredRecord> for DroppingTranslator {
    fn to_canonical(&self, records: Vec<StoredRecord>) -> Result<Vec<Document>> {
        let mut docs = JsonTranslator::new().to_canonical(records)?;
        docs.pop();
        Ok(docs)
    }
}

/// Rejects every batch.
#[derive(Debug, Default)]
pub struct RejectingTranslator;

impl RecordTranslator<StoredRecord> for RejectingTranslator {
    fn to_canonical(&self, _records: Vec<StoredRecord>) -> Result<Vec<Document>> {
        Err(Error::translation("unsupported record"))
    }
}

/// Counts size estimates.
#[derive(Debug, Default)]
pub struct CountingTranslator {
    pub estimates: AtomicUsize,
}

impl RecordTranslator<StoredRecord> for CountingTranslator {
    fn to_canonical(&self, records: Vec<StoredRecord>) -> Result<Vec<Document>> {
        JsonTranslator::new().to_canonical(records)
    }

    fn estimate_size(&self, documents: &[Document]) -> usize {
        self.estimates.fetch_add(1, Ordering::SeqCst);
        documents.iter().map(Document::encoded_len).sum()
    }
}

// =============================================================================
// Log capture
// =============================================================================

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub target: String,
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn field_u64(&self, name: &str) -> Option<u64> {
        self.field(name).and_then(|v| v.parse().ok())
    }
}

/// Layer recording every event emitted while [`LogCapture::run`] is active.
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn events(&self, target: &str) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.target == target)
            .cloned()
            .collect()
    }

    pub fn messages(&self, target: &str) -> Vec<String> {
        self.events(target).into_iter().map(|e| e.message).collect()
    }
}

struct FieldRecorder<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        let message = fields.remove("message").unwrap_or_default();
        self.events.lock().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}
