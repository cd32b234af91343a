//! Filter operations over a list of courses

use super::types::{FilterCriteria, FilterOptions};
use crate::course::{CourseRecord, FieldValue};
use std::collections::HashSet;

/// Collect the distinct values of each filterable field
///
/// Values appear in the order they are first seen scanning the catalog top to
/// bottom. Empty instructor names are left out of the instructor options.
#[must_use]
pub fn compute_filter_options(courses: &[CourseRecord]) -> FilterOptions {
    FilterOptions {
        department: distinct_text(courses.iter().map(|c| c.department.as_str())),
        level: distinct_values(courses.iter().map(|c| &c.level)),
        credits: distinct_values(courses.iter().map(|c| &c.credits)),
        instructor: distinct_text(
            courses
                .iter()
                .map(|c| c.instructor.as_str())
                .filter(|name| !name.is_empty()),
        ),
    }
}

fn distinct_text<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

fn distinct_values<'a>(values: impl Iterator<Item = &'a FieldValue>) -> Vec<FieldValue> {
    let mut distinct: Vec<FieldValue> = Vec::new();
    for value in values {
        if !distinct.iter().any(|seen| seen.same_value(value)) {
            distinct.push(value.clone());
        }
    }
    distinct
}

/// Keep the courses matching every set criterion, in catalog order
#[must_use]
pub fn apply_filters(courses: &[CourseRecord], criteria: &FilterCriteria) -> Vec<CourseRecord> {
    courses
        .iter()
        .filter(|course| criteria.matches(course))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterField;
    use crate::catalog::parse_catalog;
    use crate::testing::sample_courses;

    fn ids(courses: &[CourseRecord]) -> Vec<&str> {
        courses.iter().map(CourseRecord::label).collect()
    }

    #[test]
    fn test_options_first_occurrence_order() {
        let options = compute_filter_options(&sample_courses());
        assert_eq!(
            options.department,
            ["Computer Science", "Mathematics", "History"]
        );
        assert_eq!(
            options.instructor,
            ["Grace Hopper", "Emmy Noether", "TBA", "Alan Turing"]
        );
    }

    #[test]
    fn test_options_keep_numbers_and_text_apart() {
        let options = compute_filter_options(&sample_courses());
        assert_eq!(
            options.level,
            [
                FieldValue::Number(200.0),
                FieldValue::Number(100.0),
                FieldValue::text("100"),
            ]
        );
        assert_eq!(options.values(FilterField::Level), ["200", "100", "100"]);
        assert_eq!(
            options.credits,
            [
                FieldValue::Number(4.0),
                FieldValue::text("4"),
                FieldValue::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_options_skip_empty_instructor() {
        let courses = vec![
            CourseRecord {
                instructor: String::new(),
                ..CourseRecord::default()
            },
            CourseRecord::default(),
        ];
        let options = compute_filter_options(&courses);
        assert_eq!(options.instructor, ["TBA"]);
        assert_eq!(options.department, ["Unknown Department"]);
    }

    #[test]
    fn test_options_of_empty_catalog() {
        assert!(compute_filter_options(&[]).is_empty());
    }

    #[test]
    fn test_unset_criteria_keep_everything() {
        let courses = sample_courses();
        let filtered = apply_filters(&courses, &FilterCriteria::new());
        assert_eq!(filtered, courses);
    }

    #[test]
    fn test_department_filter() {
        let courses = sample_courses();
        let criteria = FilterCriteria::new().with(FilterField::Department, "Computer Science");
        let filtered = apply_filters(&courses, &criteria);
        assert_eq!(ids(&filtered), ["CS201", "CS101", "CS101"]);
    }

    #[test]
    fn test_level_filter_is_coercive() {
        let courses = sample_courses();
        let criteria = FilterCriteria::new().with(FilterField::Level, "100");
        let filtered = apply_filters(&courses, &criteria);
        // numeric 100 and text "100" both match
        assert_eq!(ids(&filtered), ["MATH101", "CS101", "CS101"]);
    }

    #[test]
    fn test_single_criterion_partitions_catalog() {
        let courses = sample_courses();
        let cases: [(&str, &[&str]); 5] = [
            ("3", &["CS101", "HIST210", "CS101"]),
            ("4", &["CS201", "MATH101"]),
            // only the numeric 4 converts; the text "4" must match exactly
            ("4.0", &["CS201"]),
            ("—", &[]),
            ("0", &[]),
        ];
        for (value, expected) in cases {
            let criteria = FilterCriteria::new().with(FilterField::Credits, value);
            let filtered = apply_filters(&courses, &criteria);
            assert_eq!(ids(&filtered), expected, "credits = {value}");
        }
    }

    #[test]
    fn test_array_level_matches_its_string_form() {
        let courses = parse_catalog(r#"[{"id": "A", "level": [1]}, {"id": "B", "level": [1]}]"#)
            .unwrap();
        let criteria = FilterCriteria::new().with(FilterField::Level, "1");
        assert_eq!(ids(&apply_filters(&courses, &criteria)), ["A", "B"]);

        // each array is its own option, as in a JavaScript Set
        let options = compute_filter_options(&courses);
        assert_eq!(options.values(FilterField::Level), ["1", "1"]);
    }

    #[test]
    fn test_combined_criteria() {
        let courses = sample_courses();
        let criteria = FilterCriteria::new()
            .with(FilterField::Instructor, "Grace Hopper")
            .with(FilterField::Credits, "3");
        let filtered = apply_filters(&courses, &criteria);
        assert_eq!(ids(&filtered), ["HIST210"]);
    }

    #[test]
    fn test_no_match() {
        let courses = sample_courses();
        let criteria = FilterCriteria::new().with(FilterField::Department, "Physics");
        assert!(apply_filters(&courses, &criteria).is_empty());
    }
}
