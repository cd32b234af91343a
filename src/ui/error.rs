//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The browser needs an interactive terminal
    #[error("The browser needs an interactive terminal; use `list`, `options` or `show` instead")]
    NotATerminal,

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
