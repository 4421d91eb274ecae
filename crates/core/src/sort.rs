//! Sort specifications
//!
//! The executor never sorts; a [`SortSpec`] is handed to the store cursor,
//! which orders results before the window is applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A field path paired with a direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Dotted field path
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

/// Ordered sequence of sort keys; earlier keys take precedence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Empty sort (store's natural order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by a single ascending field
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new().then_ascending(field)
    }

    /// Sort by a single descending field
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new().then_descending(field)
    }

    /// Append a key
    pub fn then(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.keys.push(SortKey {
            field: field.into(),
            direction,
        });
        self
    }

    /// Append an ascending key
    pub fn then_ascending(self, field: impl Into<String>) -> Self {
        self.then(field, SortDirection::Ascending)
    }

    /// Append a descending key
    pub fn then_descending(self, field: impl Into<String>) -> Self {
        self.then(field, SortDirection::Descending)
    }

    /// Sort keys in precedence order
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// True when no keys are present
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let dir = match key.direction {
                SortDirection::Ascending => 1,
                SortDirection::Descending => -1,
            };
            write!(f, "{}: {}", key.field, dir)?;
        }
        f.write_str("}")
    }
}
