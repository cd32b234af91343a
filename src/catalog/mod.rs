//! Catalog loading
//!
//! Turns the text of a catalog file into an ordered list of
//! [`CourseRecord`]s. The file must hold a JSON array; each element is run
//! through [`normalize`](crate::course::normalize) in file order.

pub mod error;

pub use error::{LoadError, PARSE_ERROR_MESSAGE, ParseFailure, READ_ERROR_MESSAGE, Result};

use crate::course::{CourseRecord, RawCourse};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse catalog text into course records
///
/// Entries that are not objects (numbers, strings, nested lists) become
/// all-default records; a `null` entry rejects the whole file.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the text is not JSON, the root is not an
/// array, or an entry is `null`. The cause is logged; the user-facing text
/// is the same for every case.
pub fn parse_catalog(contents: &str) -> Result<Vec<CourseRecord>> {
    parse_entries(contents).map_err(|failure| {
        tracing::error!(error = %failure, "JSON parse error");
        LoadError::Parse(failure)
    })
}

fn parse_entries(contents: &str) -> std::result::Result<Vec<CourseRecord>, ParseFailure> {
    let Value::Array(entries) = serde_json::from_str::<Value>(contents)? else {
        return Err(ParseFailure::RootNotArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| match entry {
            Value::Null => Err(ParseFailure::NullEntry(idx)),
            Value::Object(_) => Ok(serde_json::from_value::<RawCourse>(entry)?.into()),
            _ => Ok(CourseRecord::default()),
        })
        .collect()
}

/// Read and parse a catalog file
///
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read as UTF-8 text, or
/// [`LoadError::Parse`] as described in [`parse_catalog`].
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "failed to read catalog file");
        LoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let courses = parse_catalog(contents.trim_start_matches('\u{feff}'))?;
    tracing::info!(path = %path.display(), count = courses.len(), "catalog loaded");
    Ok(courses)
}
