//! Error types for the formatting library.
//!
//! Only caller-level contract violations surface as errors. Malformed data
//! degrades to an empty string inside the normalizers and formatters and never
//! reaches this module.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Error type for all formatting operations that can fail hard.
#[derive(Debug)]
pub enum FormatError {
    /// A non-blank value was given to the mask engine with no mask
    EmptyMask { value: String },

    /// A money value did not normalize to a number
    InvalidMoney { value: String },

    /// The requested formatting type is not supported
    UnsupportedFormat { tag: String },

    /// Pattern compilation or interpretation error
    PatternError { pattern: String, reason: String },

    /// Error occurred while reading or writing a batch file
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMask { value } => {
                write!(f, "Mask cannot be null or empty (value '{}')", value)
            }
            Self::InvalidMoney { value } => {
                write!(f, "Money value '{}' is invalid", value)
            }
            Self::UnsupportedFormat { tag } => {
                write!(f, "Formatting type '{}' not supported", tag)
            }
            Self::PatternError { pattern, reason } => {
                write!(f, "Pattern error for '{}': {}", pattern, reason)
            }
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<regex::Error> for FormatError {
    fn from(err: regex::Error) -> Self {
        Self::PatternError {
            pattern: "<unknown>".to_string(),
            reason: err.to_string(),
        }
    }
}
