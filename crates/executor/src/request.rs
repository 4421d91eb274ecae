//! Find request builder

use std::fmt;

use docwindow_core::{SortSpec, Window};

/// Parameters of one windowed find
///
/// Query and projection are opaque to the executor; their types come from
/// the [`DocumentStore`](docwindow_core::DocumentStore) being queried.
pub struct FindRequest<'a, Q, P> {
    /// Filter predicate; `None` matches every document
    pub query: Option<&'a Q>,
    /// Field selection; `None` returns whole documents
    pub projection: Option<&'a P>,
    /// Result ordering; `None` keeps the store's natural order
    pub sort: Option<&'a SortSpec>,
    /// Inclusive window into the sorted, matched results
    pub window: Window,
}

impl<'a, Q, P> FindRequest<'a, Q, P> {
    /// Match everything, whole documents, natural order, unbounded window
    pub fn all() -> Self {
        Self {
            query: None,
            projection: None,
            sort: None,
            window: Window::all(),
        }
    }

    /// Restrict to documents matching `query`
    pub fn filter(mut self, query: &'a Q) -> Self {
        self.query = Some(query);
        self
    }

    /// Shape results with `projection`
    pub fn project(mut self, projection: &'a P) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Order results by `sort`
    pub fn sort(mut self, sort: &'a SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Replace the whole window
    pub fn window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Set the first position to return
    pub fn from(mut self, from: i64) -> Self {
        self.window.from = Some(from);
        self
    }

    /// Set the last position to return
    pub fn to(mut self, to: i64) -> Self {
        self.window.to = Some(to);
        self
    }
}

impl<Q, P> Default for FindRequest<'_, Q, P> {
    fn default() -> Self {
        Self::all()
    }
}

impl<Q, P> Clone for FindRequest<'_, Q, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q, P> Copy for FindRequest<'_, Q, P> {}

impl<Q: fmt::Debug, P: fmt::Debug> fmt::Debug for FindRequest<'_, Q, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindRequest")
            .field("query", &self.query)
            .field("projection", &self.projection)
            .field("sort", &self.sort)
            .field("window", &self.window)
            .finish()
    }
}
