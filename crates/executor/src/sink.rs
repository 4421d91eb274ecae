//! Operation sink: where found documents are published
//!
//! A sink accumulates the documents produced by an operation, each wrapped
//! in a [`DocCtx`] that records what was done to it. Documents stay in the
//! sink once added. If a later find into the same sink fails, documents from
//! earlier successful finds remain; the failing find itself adds nothing,
//! because admission and consistency checks run before publishing.

use std::ops::Range;
use std::sync::Arc;

use docwindow_core::{Document, InterceptPoint, Operation};

use crate::interceptor::InterceptorChain;

/// Operation kind and target entity, handed to interceptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationInfo {
    operation: Operation,
    entity: Option<String>,
}

impl OperationInfo {
    /// Info for `operation` with no entity name
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            entity: None,
        }
    }

    /// Requested operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Entity (collection) name, when known
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }
}

/// One published document and its per-document state
#[derive(Debug, Clone, PartialEq)]
pub struct DocCtx {
    output: Document,
    operation_performed: Option<Operation>,
}

impl DocCtx {
    /// Wrap a freshly published document
    pub fn new(output: Document) -> Self {
        Self {
            output,
            operation_performed: None,
        }
    }

    /// Output document
    pub fn output(&self) -> &Document {
        &self.output
    }

    /// Mutable output document
    pub fn output_mut(&mut self) -> &mut Document {
        &mut self.output
    }

    /// Operation performed on this document, once tagged
    pub fn operation_performed(&self) -> Option<Operation> {
        self.operation_performed
    }

    /// Tag the document with the operation performed on it
    pub fn set_operation_performed(&mut self, operation: Operation) {
        self.operation_performed = Some(operation);
    }

    /// Unwrap into the output document
    pub fn into_output(self) -> Document {
        self.output
    }
}

/// Destination for the documents of one operation
pub trait OperationSink {
    /// Append `documents` in order, returning the indices they occupy
    fn add_documents(&mut self, documents: Vec<Document>) -> Range<usize>;

    /// Every published document, in publication order
    fn documents(&self) -> &[DocCtx];

    /// Mutable access to published documents
    fn documents_mut(&mut self) -> &mut [DocCtx];

    /// Invoke the interceptors registered for `point` on the document at `index`
    ///
    /// Out-of-range indices are ignored.
    fn call_interceptors(&mut self, point: InterceptPoint, index: usize);
}

/// Standard [`OperationSink`] carrying an interceptor chain
#[derive(Debug, Clone)]
pub struct OperationContext {
    info: OperationInfo,
    documents: Vec<DocCtx>,
    interceptors: Arc<InterceptorChain>,
}

impl OperationContext {
    /// Context for `operation` with no interceptors
    pub fn new(operation: Operation) -> Self {
        Self {
            info: OperationInfo::new(operation),
            documents: Vec::new(),
            interceptors: Arc::new(InterceptorChain::new()),
        }
    }

    /// Name the entity the operation targets
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.info.entity = Some(entity.into());
        self
    }

    /// Use `interceptors` for this operation
    pub fn with_interceptors(mut self, interceptors: Arc<InterceptorChain>) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// Operation info
    pub fn info(&self) -> &OperationInfo {
        &self.info
    }

    /// Output documents in publication order
    pub fn document_stream(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter().map(DocCtx::output)
    }

    /// Consume the context, returning its documents
    pub fn into_documents(self) -> Vec<DocCtx> {
        self.documents
    }

    /// Number of published documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing has been published
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl OperationSink for OperationContext {
    fn add_documents(&mut self, documents: Vec<Document>) -> Range<usize> {
        let start = self.documents.len();
        self.documents.extend(documents.into_iter().map(DocCtx::new));
        start..self.documents.len()
    }

    fn documents(&self) -> &[DocCtx] {
        &self.documents
    }

    fn documents_mut(&mut self) -> &mut [DocCtx] {
        &mut self.documents
    }

    fn call_interceptors(&mut self, point: InterceptPoint, index: usize) {
        if let Some(doc) = self.documents.get_mut(index) {
            self.interceptors.call(point, &self.info, doc);
        }
    }
}
