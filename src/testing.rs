//! Testing utilities for coursecat
//!
//! Fixture catalogs and a `TempCatalog` wrapper that writes catalog text to a
//! temporary directory and removes it on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::parse_catalog;
use crate::course::CourseRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small catalog exercising mixed value types, defaults and duplicates
///
/// In file order: CS201, MATH101, CS101, HIST210, CS101 (a second section).
pub const SAMPLE_CATALOG: &str = r#"[
  {
    "id": "CS201",
    "title": "Data Structures",
    "department": "Computer Science",
    "level": 200,
    "credits": 4,
    "instructor": "Grace Hopper",
    "description": "Lists, trees and graphs.",
    "semester": "Spring 2024"
  },
  {
    "id": "MATH101",
    "title": "calculus I",
    "department": "Mathematics",
    "level": 100,
    "credits": "4",
    "instructor": "Emmy Noether",
    "semester": "Fall 2023"
  },
  {
    "id": "CS101",
    "title": "Intro to Programming",
    "department": "Computer Science",
    "level": "100",
    "credits": 3,
    "semester": "Winter 2024"
  },
  {
    "id": "HIST210",
    "title": "Modern History",
    "department": "History",
    "level": 200,
    "credits": 3,
    "instructor": "Grace Hopper",
    "description": "From 1800 to now.",
    "semester": "Fall 2024"
  },
  {
    "id": "CS101",
    "title": "Intro to Programming (Evening)",
    "department": "Computer Science",
    "level": 100,
    "credits": 3,
    "instructor": "Alan Turing"
  }
]"#;

/// Parse [`SAMPLE_CATALOG`]
///
/// # Panics
/// Panics if the fixture stops parsing.
#[must_use]
pub fn sample_courses() -> Vec<CourseRecord> {
    parse_catalog(SAMPLE_CATALOG).expect("sample catalog parses")
}

/// Build a course with only an id and a semester set
#[must_use]
pub fn course_in(id: &str, semester: &str) -> CourseRecord {
    CourseRecord {
        id: id.to_string(),
        semester: semester.to_string(),
        ..CourseRecord::default()
    }
}

/// Catalog text written to a temporary file
///
/// The directory and file are removed when the wrapper is dropped.
pub struct TempCatalog {
    _dir: TempDir,
    path: PathBuf,
}

impl TempCatalog {
    /// Write `contents` to `catalog.json` in a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the temporary file cannot be written.
    #[must_use]
    pub fn new(contents: &str) -> Self {
        Self::from_bytes(contents.as_bytes())
    }

    /// Write raw bytes, for exercising read failures
    ///
    /// # Panics
    /// Panics if the temporary file cannot be written.
    #[must_use]
    pub fn from_bytes(contents: &[u8]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        fs::write(&path, contents).expect("write temp catalog");
        Self { _dir: dir, path }
    }

    /// Path of the catalog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_parses() {
        assert_eq!(sample_courses().len(), 5);
    }

    #[test]
    fn test_temp_catalog_cleanup() {
        let path = {
            let file = TempCatalog::new("[]");
            assert!(file.path().exists());
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
