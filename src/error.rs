//! Crate-level error types.

use std::fmt;

/// Errors produced by the camrig crate.
///
/// Camera math is total - clamping silently corrects out-of-range inputs
/// instead of failing - so only the options layer produces errors.
#[derive(Debug)]
pub enum CamrigError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CamrigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CamrigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for CamrigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
