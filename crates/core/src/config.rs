//! Executor configuration via `docwindow.toml`
//!
//! Every setting has a default that disables it, so an empty file is a valid
//! configuration. The settings are read once when a finder is built and are
//! treated as read-only while finds are in flight.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::read_preference::ReadPreference;

/// Config file name placed next to the data source definition.
pub const CONFIG_FILE_NAME: &str = "docwindow.toml";

/// Window executor configuration.
///
/// # Example
///
/// ```toml
/// # Read preference applied to every cursor (unset = store default)
/// read_preference = "secondary_preferred"
///
/// # Largest window a single find may retrieve (0 = unlimited)
/// max_result_set_size = 10000
///
/// # Server-side query time limit in milliseconds (0 = unlimited)
/// max_query_time_ms = 30000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Read preference applied to every cursor, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_preference: Option<ReadPreference>,
    /// Maximum number of documents a single find may retrieve. 0 disables the cap.
    #[serde(default)]
    pub max_result_set_size: u64,
    /// Maximum query execution time in milliseconds. 0 disables the limit.
    #[serde(default)]
    pub max_query_time_ms: u64,
}

impl FinderConfig {
    /// Result-set cap, or `None` when unlimited
    pub fn result_set_cap(&self) -> Option<u64> {
        (self.max_result_set_size > 0).then_some(self.max_result_set_size)
    }

    /// Server-side query time limit, or `None` when unlimited
    pub fn max_query_time(&self) -> Option<Duration> {
        (self.max_query_time_ms > 0).then(|| Duration::from_millis(self.max_query_time_ms))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docwindow finder configuration
#
# Read preference applied to every cursor. One of:
#   "primary", "primary_preferred", "secondary", "secondary_preferred", "nearest"
# Leave unset to use the store default.
# read_preference = "primary"

# Largest window a single find may retrieve (0 = unlimited).
# Finds asking for more fail before any document is read.
max_result_set_size = 0

# Server-side query time limit in milliseconds (0 = unlimited).
max_query_time_ms = 0
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not valid TOML or names an
    /// unknown read preference.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            Error::config(format!("config file '{}': {}", path.display(), e))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
