//! Error types for catalog loading
//!
//! Both variants are recoverable: the viewer shows [`LoadError::user_message`]
//! and keeps whatever catalog it already had.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown when a file cannot be parsed as a catalog
pub const PARSE_ERROR_MESSAGE: &str = "Invalid JSON file format.";
/// Message shown when a file cannot be read at all
pub const READ_ERROR_MESSAGE: &str = "Failed to read file.";

/// Why the contents of a catalog file were rejected
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The text is not valid JSON
    #[error("{0}")]
    Syntax(#[from] serde_json::Error),

    /// Valid JSON, but the top-level value is not a list
    #[error("JSON root must be an array")]
    RootNotArray,

    /// A list entry is `null`
    #[error("course entry {0} is null")]
    NullEntry(usize),
}

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a catalog
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] ParseFailure),
}

impl LoadError {
    /// The fixed message shown to the user for this error kind
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Read { .. } => READ_ERROR_MESSAGE,
            Self::Parse(_) => PARSE_ERROR_MESSAGE,
        }
    }

    /// Whether this is a parse failure
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Whether this is a read failure
    #[must_use]
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}

/// Result type for catalog loading
pub type Result<T> = std::result::Result<T, LoadError>;
