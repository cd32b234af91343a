//! Course records
//!
//! A catalog file is a list of loosely shaped objects. [`RawCourse`] captures
//! whatever an entry provides and [`normalize`] turns it into a
//! [`CourseRecord`] where every field is populated.
//!
//! Two defaulting rules apply:
//!
//! - **Text fields** (`id`, `title`, `department`, `instructor`,
//!   `description`, `semester`) fall back to their default when the value is
//!   missing, `null`, or falsy (`""`, `0`, `false`). Arrays and objects are
//!   truthy and kept as their string form, so `[]` gives an empty title.
//! - **`level` and `credits`** fall back only when missing or `null`, so a
//!   `0` credit course or an empty-string level is kept as given.

mod value;

pub use value::{FieldValue, number_to_string, string_to_number};

use serde::Deserialize;

/// Default identifier for entries without one
pub const DEFAULT_ID: &str = "Unknown ID";
/// Default title
pub const DEFAULT_TITLE: &str = "Untitled";
/// Default department
pub const DEFAULT_DEPARTMENT: &str = "Unknown Department";
/// Placeholder for a missing level or credit value
pub const PLACEHOLDER: &str = "—";
/// Default instructor
pub const DEFAULT_INSTRUCTOR: &str = "TBA";
/// Default description
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
/// Default semester
pub const DEFAULT_SEMESTER: &str = "Unscheduled";

/// A catalog entry as read from the file, before defaults are applied
///
/// Unrecognized keys are ignored. Text fields hold `None` for falsy values,
/// so `Some` text is always kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCourse {
    #[serde(default, deserialize_with = "value::truthy_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "value::truthy_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "value::truthy_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "value::nullable_value")]
    pub level: Option<FieldValue>,
    #[serde(default, deserialize_with = "value::nullable_value")]
    pub credits: Option<FieldValue>,
    #[serde(default, deserialize_with = "value::truthy_text")]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "value::truthy_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "value::truthy_text")]
    pub semester: Option<String>,
}

/// A fully populated catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    /// Course code; used as the list label, not guaranteed unique
    pub id: String,
    pub title: String,
    pub department: String,
    pub level: FieldValue,
    pub credits: FieldValue,
    pub instructor: String,
    pub description: String,
    /// Academic term such as `"Fall 2024"`
    pub semester: String,
}

impl CourseRecord {
    /// Label shown for this course in listings
    #[must_use]
    pub fn label(&self) -> &str {
        &self.id
    }
}

impl Default for CourseRecord {
    fn default() -> Self {
        normalize(RawCourse::default())
    }
}

impl From<RawCourse> for CourseRecord {
    fn from(raw: RawCourse) -> Self {
        normalize(raw)
    }
}

/// Apply field defaults to a raw entry
///
/// Never fails: every field of the result is populated.
#[must_use]
pub fn normalize(raw: RawCourse) -> CourseRecord {
    fn text(value: Option<String>, default: &str) -> String {
        value.unwrap_or_else(|| default.to_string())
    }

    CourseRecord {
        id: text(raw.id, DEFAULT_ID),
        title: text(raw.title, DEFAULT_TITLE),
        department: text(raw.department, DEFAULT_DEPARTMENT),
        level: raw.level.unwrap_or_else(|| FieldValue::text(PLACEHOLDER)),
        credits: raw.credits.unwrap_or_else(|| FieldValue::text(PLACEHOLDER)),
        instructor: text(raw.instructor, DEFAULT_INSTRUCTOR),
        description: text(raw.description, DEFAULT_DESCRIPTION),
        semester: text(raw.semester, DEFAULT_SEMESTER),
    }
}
