//! Scoped cursor release

use std::ops::{Deref, DerefMut};

use docwindow_core::StoreCursor;

/// Owns an open cursor and closes it when dropped
///
/// Every exit from a find (normal return, empty window, `?` on any error)
/// drops the guard, so the cursor is released exactly once per call.
#[derive(Debug)]
pub struct CursorGuard<C: StoreCursor> {
    cursor: C,
}

impl<C: StoreCursor> CursorGuard<C> {
    /// Take ownership of `cursor`
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: StoreCursor> Deref for CursorGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: StoreCursor> DerefMut for CursorGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: StoreCursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        self.cursor.close();
    }
}
