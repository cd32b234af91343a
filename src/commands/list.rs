//! List command - print the filtered, sorted listing

use crate::{
    catalog,
    course::CourseRecord,
    filters::{FilterCriteria, apply_filters},
    output,
    sort::{SortKey, apply_sort},
    CatalogError,
};
use std::path::Path;

type Result<T> = std::result::Result<T, CatalogError>;

/// Filter then sort a catalog, the same way the browser does
#[must_use]
pub fn listing(courses: &[CourseRecord], criteria: &FilterCriteria, sort: SortKey) -> Vec<CourseRecord> {
    let mut visible = apply_filters(courses, criteria);
    apply_sort(&mut visible, sort);
    visible
}

/// Execute the list command
///
/// # Errors
/// Returns an error if the catalog cannot be read or parsed
pub fn execute(file: &Path, criteria: &FilterCriteria, sort: SortKey, quiet: bool) -> Result<()> {
    let courses = catalog::read_catalog(file)?;
    let visible = listing(&courses, criteria, sort);

    if visible.is_empty() {
        if !quiet {
            println!("No courses match.");
        }
        return Ok(());
    }

    for course in &visible {
        println!("{}", output::course_row(course, quiet));
    }
    if !quiet {
        println!("{}", output::listing_summary(visible.len(), courses.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterField;
    use crate::testing::{sample_courses, TempCatalog};

    #[test]
    fn test_listing_filters_before_sorting() {
        let criteria = FilterCriteria::new().with(FilterField::Credits, "3");
        let visible = listing(&sample_courses(), &criteria, SortKey::TitleDesc);
        let titles: Vec<&str> = visible.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Modern History", "Intro to Programming (Evening)", "Intro to Programming"]
        );
    }

    #[test]
    fn test_execute_reports_parse_error() {
        let file = TempCatalog::new("{\"id\": 1}");
        let err = execute(file.path(), &FilterCriteria::new(), SortKey::None, true).unwrap_err();
        assert_eq!(err.user_message(), catalog::PARSE_ERROR_MESSAGE);
    }

    #[test]
    fn test_execute_on_valid_file() {
        let file = TempCatalog::new(crate::testing::SAMPLE_CATALOG);
        assert!(execute(file.path(), &FilterCriteria::new(), SortKey::IdAsc, true).is_ok());
    }
}
