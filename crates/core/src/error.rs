//! Error types for docwindow
//!
//! Three categories matter to callers of the window executor:
//! - admission rejection (`TooManyResults`), raised before any retrieval
//! - consistency violation (`ResultSetMismatch`), raised after translation
//! - store failure (`Store`), propagated exactly as the store reported it
//!
//! None of them are retried here.

use thiserror::Error;

/// Result type alias for docwindow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for document store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Error types for the window executor and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// The resolved window asks for more documents than the configured cap
    #[error("too many results: {requested} requested, maximum is {max}")]
    TooManyResults {
        /// Retrieval count computed from the resolved window
        requested: u64,
        /// Configured maximum result-set size
        max: u64,
    },

    /// The translator returned a different number of documents than retrieved
    #[error("result set mismatch: requested={requested} retrieved={retrieved}")]
    ResultSetMismatch {
        /// Retrieval count computed from the resolved window
        requested: u64,
        /// Number of canonical documents produced by the translator
        retrieved: u64,
    },

    /// Failure reported by the document store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A native record could not be translated into a canonical document
    #[error("translation error: {reason}")]
    Translation {
        /// Why the record was rejected
        reason: String,
    },

    /// Configuration could not be read, parsed or validated
    #[error("invalid configuration: {reason}")]
    Config {
        /// What was wrong with the configuration
        reason: String,
    },
}

impl Error {
    /// Create a translation error
    pub fn translation(reason: impl Into<String>) -> Self {
        Error::Translation {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Stable error code, suitable for mapping onto CRUD responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::TooManyResults { .. } => "crud:TooManyResults",
            Error::ResultSetMismatch { .. } => "crud:ResultSetMismatch",
            Error::Store(e) => e.kind().code(),
            Error::Translation { .. } => "crud:TranslationError",
            Error::Config { .. } => "crud:ConfigurationError",
        }
    }

    /// Returns true for the admission rejection raised before retrieval
    pub fn is_admission_rejection(&self) -> bool {
        matches!(self, Error::TooManyResults { .. })
    }
}

/// Classification of a store-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// The store could not be reached
    Connectivity,
    /// The configured max query time elapsed on the store side
    Timeout,
    /// The store rejected the query, projection or sort
    MalformedQuery,
    /// Any other store failure
    Other,
}

impl StoreErrorKind {
    /// Stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorKind::Connectivity => "store:Connectivity",
            StoreErrorKind::Timeout => "store:Timeout",
            StoreErrorKind::MalformedQuery => "store:MalformedQuery",
            StoreErrorKind::Other => "store:Error",
        }
    }
}

impl std::fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreErrorKind::Connectivity => "connectivity",
            StoreErrorKind::Timeout => "timeout",
            StoreErrorKind::MalformedQuery => "malformed query",
            StoreErrorKind::Other => "store",
        };
        f.write_str(name)
    }
}

/// Error reported by a [`DocumentStore`](crate::DocumentStore) or its cursor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error: {message}")]
pub struct StoreError {
    kind: StoreErrorKind,
    message: String,
}

impl StoreError {
    /// Create a store error of the given kind
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The store could not be reached
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Connectivity, message)
    }

    /// The server-side time limit was exceeded
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Timeout, message)
    }

    /// The store rejected the request
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::MalformedQuery, message)
    }

    /// Any other store failure
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Other, message)
    }

    /// Failure classification
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Message as reported by the store
    pub fn message(&self) -> &str {
        &self.message
    }
}
