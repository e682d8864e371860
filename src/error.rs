//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbicam crate.
///
/// Only the configuration boundary can fail; the per-tick motion code never
/// returns errors.
#[derive(Debug)]
pub enum OrbicamError {
    /// Generic I/O failure while reading or writing a preset.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed fine but describe an impossible camera.
    InvalidOptions(String),
}

impl fmt::Display for OrbicamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid camera options: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbicamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbicamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
