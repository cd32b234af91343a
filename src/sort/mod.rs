//! Course ordering
//!
//! [`apply_sort`] orders a filtered course list by one of the [`SortKey`]s.
//! Identifier and title keys use [`locale_compare`]; semester keys use
//! [`compare_semester`], which can decline to order a pair, so they run
//! through a stable merge sort that treats such pairs as equal.

mod collate;
mod semester;

pub use collate::locale_compare;
pub use semester::compare_semester;

use crate::course::CourseRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How the course list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Keep the order produced by filtering
    #[default]
    None,
    IdAsc,
    IdDesc,
    TitleAsc,
    TitleDesc,
    SemesterAsc,
    SemesterDesc,
}

impl SortKey {
    /// All keys in the order the sort control cycles through them
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::IdAsc,
        Self::IdDesc,
        Self::TitleAsc,
        Self::TitleDesc,
        Self::SemesterAsc,
        Self::SemesterDesc,
    ];

    /// Machine name, as accepted by `--sort` and the config file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::IdAsc => "id-asc",
            Self::IdDesc => "id-desc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::SemesterAsc => "semester-asc",
            Self::SemesterDesc => "semester-desc",
        }
    }

    /// Label for the sort control
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::IdAsc => "Course ID (A-Z)",
            Self::IdDesc => "Course ID (Z-A)",
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::SemesterAsc => "Semester (oldest first)",
            Self::SemesterDesc => "Semester (newest first)",
        }
    }

    /// The following key, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The preceding key, wrapping around
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<&str> for SortKey {
    /// Unrecognized names map to [`SortKey::None`]
    fn from(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or_default()
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order courses in place by `key`
///
/// Stable for every key; [`SortKey::None`] leaves the list untouched.
pub fn apply_sort(courses: &mut Vec<CourseRecord>, key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::IdAsc => courses.sort_by(|a, b| locale_compare(&a.id, &b.id)),
        SortKey::IdDesc => courses.sort_by(|a, b| locale_compare(&b.id, &a.id)),
        SortKey::TitleAsc => courses.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortKey::TitleDesc => courses.sort_by(|a, b| locale_compare(&b.title, &a.title)),
        SortKey::SemesterAsc => {
            merge_sort_by(courses, |a, b| compare_semester(&a.semester, &b.semester));
        }
        SortKey::SemesterDesc => {
            merge_sort_by(courses, |a, b| compare_semester(&b.semester, &a.semester));
        }
    }
}

/// Stable merge sort for comparators that are not a total order
///
/// An element from the right half only moves ahead of one from the left half
/// when the comparator says `Greater`; `None` keeps the left one first.
fn merge_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    if items.len() < 2 {
        return;
    }
    let sorted = merge_sort(std::mem::take(items), &mut compare);
    *items = sorted;
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    if items.len() < 2 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(l, r) == Some(Ordering::Greater) {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{course_in, sample_courses};

    fn ids(courses: &[CourseRecord]) -> Vec<&str> {
        courses.iter().map(CourseRecord::label).collect()
    }

    fn semesters(courses: &[CourseRecord]) -> Vec<&str> {
        courses.iter().map(|c| c.semester.as_str()).collect()
    }

    #[test]
    fn test_sort_key_names_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from(key.as_str()), key);
        }
        assert_eq!(SortKey::from("price-asc"), SortKey::None);
    }

    #[test]
    fn test_sort_key_cycle() {
        assert_eq!(SortKey::None.next(), SortKey::IdAsc);
        assert_eq!(SortKey::SemesterDesc.next(), SortKey::None);
        assert_eq!(SortKey::None.prev(), SortKey::SemesterDesc);
    }

    #[test]
    fn test_sort_key_serde() {
        let key: SortKey = serde_json::from_str("\"title-desc\"").unwrap();
        assert_eq!(key, SortKey::TitleDesc);
        let unknown: SortKey = serde_json::from_str("\"credits-asc\"").unwrap();
        assert_eq!(unknown, SortKey::None);
    }

    #[test]
    fn test_none_keeps_order() {
        let mut courses = sample_courses();
        let before = courses.clone();
        apply_sort(&mut courses, SortKey::None);
        assert_eq!(courses, before);
    }

    #[test]
    fn test_id_ascending_is_stable_for_duplicates() {
        let mut courses = sample_courses();
        apply_sort(&mut courses, SortKey::IdAsc);
        assert_eq!(ids(&courses), ["CS101", "CS101", "CS201", "HIST210", "MATH101"]);
        assert_eq!(courses[0].title, "Intro to Programming");
        assert_eq!(courses[1].title, "Intro to Programming (Evening)");
    }

    #[test]
    fn test_id_descending_reverses_ascending() {
        let mut asc = vec![
            course_in("b2", "Fall 2023"),
            course_in("A1", "Fall 2023"),
            course_in("c3", "Fall 2023"),
        ];
        let mut desc = asc.clone();
        apply_sort(&mut asc, SortKey::IdAsc);
        apply_sort(&mut desc, SortKey::IdDesc);
        assert_eq!(ids(&asc), ["A1", "b2", "c3"]);
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut courses = sample_courses();
        apply_sort(&mut courses, SortKey::TitleAsc);
        let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "calculus I",
                "Data Structures",
                "Intro to Programming",
                "Intro to Programming (Evening)",
                "Modern History",
            ]
        );
    }

    #[test]
    fn test_semester_ascending() {
        let mut courses = vec![
            course_in("a", "Fall 2024"),
            course_in("b", "Spring 2024"),
            course_in("c", "Fall 2023"),
            course_in("d", "Winter 2024"),
        ];
        apply_sort(&mut courses, SortKey::SemesterAsc);
        assert_eq!(
            semesters(&courses),
            ["Fall 2023", "Winter 2024", "Spring 2024", "Fall 2024"]
        );
    }

    #[test]
    fn test_semester_descending() {
        let mut courses = vec![
            course_in("a", "Spring 2023"),
            course_in("b", "Fall 2023"),
            course_in("c", "Summer 2022"),
        ];
        apply_sort(&mut courses, SortKey::SemesterDesc);
        assert_eq!(semesters(&courses), ["Fall 2023", "Spring 2023", "Summer 2022"]);
    }

    #[test]
    fn test_malformed_semester_does_not_panic() {
        let mut courses = vec![
            course_in("a", "Fall 2024"),
            course_in("b", "Unscheduled"),
            course_in("c", "Fall 2023"),
            course_in("d", "TBD"),
            course_in("e", "Spring 2020"),
        ];
        apply_sort(&mut courses, SortKey::SemesterAsc);
        assert_eq!(courses.len(), 5);
        // entries that never compare keep their relative order
        let b = courses.iter().position(|c| c.id == "b").unwrap();
        let d = courses.iter().position(|c| c.id == "d").unwrap();
        assert!(b < d);
    }

    #[test]
    fn test_equal_semesters_keep_order() {
        let mut courses = vec![
            course_in("first", "Fall 2023"),
            course_in("second", "Fall 2023"),
        ];
        apply_sort(&mut courses, SortKey::SemesterDesc);
        assert_eq!(ids(&courses), ["first", "second"]);
    }
}
