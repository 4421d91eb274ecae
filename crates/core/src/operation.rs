//! CRUD operation kinds and interception points

use serde::{Deserialize, Serialize};
use std::fmt;

/// CRUD operation performed on, or requested for, a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Insert new documents
    Insert,
    /// Insert or replace documents
    Save,
    /// Update matching documents
    Update,
    /// Delete matching documents
    Delete,
    /// Read matching documents
    Find,
}

impl Operation {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Save => "save",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Find => "find",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points at which registered interceptors are invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptPoint {
    /// After each found document is published to the operation context
    PostFindDoc,
}
