//! Configuration errors
//!
//! The simulation itself cannot fail; only loading settings can.

use std::fmt;

/// Error raised while loading or validating settings
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// A value parsed but cannot drive the simulation
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "failed to parse settings: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
