//! Show command - print the details of a course

use crate::{catalog, course::CourseRecord, output, CatalogError};
use std::path::Path;

type Result<T> = std::result::Result<T, CatalogError>;

/// Every course with the given identifier, in catalog order
#[must_use]
pub fn find_by_id<'a>(courses: &'a [CourseRecord], id: &str) -> Vec<&'a CourseRecord> {
    courses.iter().filter(|c| c.id == id).collect()
}

/// Execute the show command
///
/// # Errors
/// Returns an error if the catalog cannot be read or parsed, or if no course
/// has the identifier
pub fn execute(file: &Path, id: &str) -> Result<()> {
    let courses = catalog::read_catalog(file)?;
    let matches = find_by_id(&courses, id);

    if matches.is_empty() {
        return Err(CatalogError::InvalidInput(format!("No course with id '{id}'")));
    }

    let blocks: Vec<String> = matches.into_iter().map(output::course_details).collect();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_courses, TempCatalog, SAMPLE_CATALOG};

    #[test]
    fn test_find_duplicates() {
        let courses = sample_courses();
        let found = find_by_id(&courses, "CS101");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].instructor, "Alan Turing");
        assert!(find_by_id(&courses, "cs101").is_empty());
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let file = TempCatalog::new(SAMPLE_CATALOG);
        let err = execute(file.path(), "NOPE").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }
}
