//! Coursecat - a course catalog viewer
//!
//! Loads a JSON array of course objects, normalizes each entry into a
//! [`course::CourseRecord`], and lets the user narrow the catalog with four
//! filters, order it with one of several sort keys, and inspect a course.
//! The same [`view::CatalogView`] drives both the terminal browser and tests.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod course;
pub mod filters;
pub mod logging;
pub mod output;
pub mod sort;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog could not be read or parsed
    #[error("{0}")]
    LoadError(#[from] catalog::LoadError),
    /// Terminal interface error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CatalogError {
    /// Message suitable for showing to the user
    ///
    /// Load failures use their fixed user-facing text; everything else uses
    /// the full error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LoadError(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_user_message() {
        let err: CatalogError = catalog::parse_catalog("{}").unwrap_err().into();
        assert_eq!(err.user_message(), catalog::PARSE_ERROR_MESSAGE);
    }

    #[test]
    fn test_invalid_input_message() {
        let err = CatalogError::InvalidInput("no catalog".into());
        assert_eq!(err.user_message(), "Invalid input: no catalog");
    }
}
