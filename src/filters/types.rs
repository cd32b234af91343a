//! Filter data structures
//!
//! - `FilterField`: the four filterable course fields
//! - `FilterCriteria`: the currently selected value for each field
//! - `FilterOptions`: the distinct values offered for each field

use crate::course::{CourseRecord, FieldValue};
use std::fmt;

/// A course field that can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Department,
    Level,
    Credits,
    Instructor,
}

impl FilterField {
    /// All filterable fields in display order
    pub const ALL: [Self; 4] = [
        Self::Department,
        Self::Level,
        Self::Credits,
        Self::Instructor,
    ];

    /// Human-readable field name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::Level => "Level",
            Self::Credits => "Credits",
            Self::Instructor => "Instructor",
        }
    }

    /// Whether a course's value for this field matches `selected`
    ///
    /// Department and instructor compare exactly; level and credits use
    /// [`FieldValue::loosely_equals`] so `3` matches `"3"`.
    #[must_use]
    pub fn matches(self, course: &CourseRecord, selected: &str) -> bool {
        match self {
            Self::Department => course.department == selected,
            Self::Level => course.level.loosely_equals(selected),
            Self::Credits => course.credits.loosely_equals(selected),
            Self::Instructor => course.instructor == selected,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected filter values; `None` matches any course
///
/// An empty selection is the "All" option, so setting `Some("")` stores
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub department: Option<String>,
    pub level: Option<String>,
    pub credits: Option<String>,
    pub instructor: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every course
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Get the selection for a field
    #[must_use]
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Department => self.department.as_deref(),
            FilterField::Level => self.level.as_deref(),
            FilterField::Credits => self.credits.as_deref(),
            FilterField::Instructor => self.instructor.as_deref(),
        }
    }

    /// Set or clear the selection for a field
    pub fn set(&mut self, field: FilterField, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        let slot = match field {
            FilterField::Department => &mut self.department,
            FilterField::Level => &mut self.level,
            FilterField::Credits => &mut self.credits,
            FilterField::Instructor => &mut self.instructor,
        };
        *slot = value;
    }

    /// Whether no field is constrained
    #[must_use]
    pub fn is_unset(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Whether a course satisfies every set criterion
    #[must_use]
    pub fn matches(&self, course: &CourseRecord) -> bool {
        FilterField::ALL.iter().all(|field| {
            self.get(*field)
                .is_none_or(|selected| field.matches(course, selected))
        })
    }
}

/// Distinct values observed in a catalog, per filterable field
///
/// Each list keeps first-occurrence order. Level and credit values keep
/// their type, so `3` and `"3"` are separate options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub department: Vec<String>,
    pub level: Vec<FieldValue>,
    pub credits: Vec<FieldValue>,
    pub instructor: Vec<String>,
}

impl FilterOptions {
    /// Option labels for a field, as offered after "All"
    #[must_use]
    pub fn values(&self, field: FilterField) -> Vec<String> {
        match field {
            FilterField::Department => self.department.clone(),
            FilterField::Level => self.level.iter().map(ToString::to_string).collect(),
            FilterField::Credits => self.credits.iter().map(ToString::to_string).collect(),
            FilterField::Instructor => self.instructor.clone(),
        }
    }

    /// Whether the catalog offered no values at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.department.is_empty()
            && self.level.is_empty()
            && self.credits.is_empty()
            && self.instructor.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_unset() {
        let mut criteria = FilterCriteria::new();
        criteria.set(FilterField::Level, Some(String::new()));
        assert_eq!(criteria.get(FilterField::Level), None);
        assert!(criteria.is_unset());
    }

    #[test]
    fn test_builder_sets_fields() {
        let criteria = FilterCriteria::new()
            .with(FilterField::Department, "History")
            .with(FilterField::Credits, "3");
        assert_eq!(criteria.get(FilterField::Department), Some("History"));
        assert_eq!(criteria.get(FilterField::Credits), Some("3"));
        assert_eq!(criteria.get(FilterField::Level), None);
        assert!(!criteria.is_unset());
    }

    #[test]
    fn test_department_match_is_exact() {
        let course = CourseRecord {
            department: "History".to_string(),
            ..CourseRecord::default()
        };
        assert!(FilterField::Department.matches(&course, "History"));
        assert!(!FilterField::Department.matches(&course, "history"));
    }
}
