//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbitcam crate.
///
/// Only the configuration and input-script surfaces can fail; the per-frame
/// camera update is infallible.
#[derive(Debug)]
pub enum OrbitCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Input script parsing failure.
    ScriptParse(String),
}

impl fmt::Display for OrbitCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(msg) => {
                write!(f, "input script parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
