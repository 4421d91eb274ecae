//! Result windows
//!
//! A [`Window`] names an inclusive, 0-based `[from, to]` range into the
//! sorted, matched result sequence. Bounds come straight from callers and are
//! never trusted: [`Window::resolve`] clamps them against the matched count
//! before anything is handed to a cursor as skip/limit.
//!
//! Resolution rules:
//! - `f = from ?? 0`, raised to 0 when negative
//! - `t = to ?? matched - 1`, lowered to `matched - 1` when past the end
//! - nothing is retrieved when `t < f` or `f >= matched`
//! - otherwise `t - f + 1` documents are retrieved

use serde::{Deserialize, Serialize};

/// Requested result window, both ends inclusive and optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// First position to return; `None` means 0
    pub from: Option<i64>,
    /// Last position to return; `None` means the last matched position
    pub to: Option<i64>,
}

impl Window {
    /// Window covering every matched document
    pub const fn all() -> Self {
        Window {
            from: None,
            to: None,
        }
    }

    /// Window with explicit, possibly absent, bounds
    pub const fn new(from: Option<i64>, to: Option<i64>) -> Self {
        Window { from, to }
    }

    /// Inclusive range `[from, to]`
    pub const fn range(from: i64, to: i64) -> Self {
        Window {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Everything from `from` to the end
    pub const fn starting_at(from: i64) -> Self {
        Window {
            from: Some(from),
            to: None,
        }
    }

    /// Everything from the start up to and including `to`
    pub const fn up_to(to: i64) -> Self {
        Window {
            from: None,
            to: Some(to),
        }
    }

    /// Resolve the window against the number of matched documents
    pub fn resolve(&self, matched: u64) -> ResolvedWindow {
        let matched = i64::try_from(matched).unwrap_or(i64::MAX);
        let last = matched - 1;

        let mut from = self.from.unwrap_or(0);
        if from < 0 {
            from = 0;
        }
        let mut to = self.to.unwrap_or(last);
        if to >= matched {
            to = last;
        }

        let count = if to < from || from >= matched {
            0
        } else {
            (to - from + 1) as u64
        };

        ResolvedWindow { from, to, count }
    }
}

/// Window after clamping against the matched count
///
/// `from` and `to` are kept as computed, so `to` may be below `from` (or
/// negative) when the range is empty; they are reported in diagnostics as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedWindow {
    /// Clamped first position (never negative)
    pub from: i64,
    /// Clamped last position (may be below `from`)
    pub to: i64,
    /// Number of documents to retrieve
    pub count: u64,
}

impl ResolvedWindow {
    /// True when nothing needs to be retrieved
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Skip/limit to apply to the cursor, or `None` when nothing is retrieved
    pub fn plan(&self) -> Option<RetrievalPlan> {
        if self.is_empty() {
            return None;
        }
        Some(RetrievalPlan {
            skip: self.from as u64,
            limit: self.count,
        })
    }
}

/// Skip/limit pair derived from a non-empty resolved window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetrievalPlan {
    /// Number of sorted, matched documents to skip
    pub skip: u64,
    /// Number of documents to retrieve after skipping
    pub limit: u64,
}
