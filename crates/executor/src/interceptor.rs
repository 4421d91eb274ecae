//! Per-document interception
//!
//! Interceptors are registered against an [`InterceptPoint`] on an
//! [`InterceptorChain`]. The chain travels with the operation's sink; there
//! is no process-wide registry. Interceptors run synchronously, in
//! registration order, and may rewrite the document they are handed.

use std::fmt;
use std::sync::Arc;

use docwindow_core::InterceptPoint;

use crate::sink::{DocCtx, OperationInfo};

/// Hook invoked for a document at an interception point
pub trait Interceptor: Send + Sync {
    /// Inspect or rewrite `doc`
    fn intercept(&self, point: InterceptPoint, operation: &OperationInfo, doc: &mut DocCtx);
}

impl<F> Interceptor for F
where
    F: Fn(InterceptPoint, &OperationInfo, &mut DocCtx) + Send + Sync,
{
    fn intercept(&self, point: InterceptPoint, operation: &OperationInfo, doc: &mut DocCtx) {
        self(point, operation, doc)
    }
}

/// Ordered list of interceptors keyed by point
#[derive(Default, Clone)]
pub struct InterceptorChain {
    entries: Vec<(InterceptPoint, Arc<dyn Interceptor>)>,
}

impl InterceptorChain {
    /// Empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `interceptor` for `point`
    pub fn register(
        &mut self,
        point: InterceptPoint,
        interceptor: impl Interceptor + 'static,
    ) -> &mut Self {
        self.entries.push((point, Arc::new(interceptor)));
        self
    }

    /// Number of registered interceptors, across all points
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every interceptor registered for `point` against `doc`
    pub fn call(&self, point: InterceptPoint, operation: &OperationInfo, doc: &mut DocCtx) {
        for (registered, interceptor) in &self.entries {
            if *registered == point {
                interceptor.intercept(point, operation, doc);
            }
        }
    }
}

impl fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("interceptors", &self.entries.len())
            .finish()
    }
}
