//! Read-consistency preference handed to the store on every cursor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which replica set members a cursor may read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadPreference {
    /// Primary only
    Primary,
    /// Primary when available, otherwise a secondary
    PrimaryPreferred,
    /// Secondaries only
    Secondary,
    /// Secondary when available, otherwise the primary
    SecondaryPreferred,
    /// Lowest latency member
    Nearest,
}

impl ReadPreference {
    /// Canonical configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadPreference::Primary => "primary",
            ReadPreference::PrimaryPreferred => "primary_preferred",
            ReadPreference::Secondary => "secondary",
            ReadPreference::SecondaryPreferred => "secondary_preferred",
            ReadPreference::Nearest => "nearest",
        }
    }
}

impl fmt::Display for ReadPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadPreference {
    type Err = Error;

    /// Accepts snake_case and the camelCase spelling used by store URIs
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ReadPreference::Primary),
            "primary_preferred" | "primaryPreferred" => Ok(ReadPreference::PrimaryPreferred),
            "secondary" => Ok(ReadPreference::Secondary),
            "secondary_preferred" | "secondaryPreferred" => Ok(ReadPreference::SecondaryPreferred),
            "nearest" => Ok(ReadPreference::Nearest),
            other => Err(Error::config(format!(
                "unknown read preference '{}'",
                other
            ))),
        }
    }
}
