//! Detail panel text for a selected course

use crate::course::CourseRecord;

/// The eight detail slots shown for a selected course
///
/// The code and description are shown bare; every other slot carries its
/// label (`"Title: …"`, `"Department: …"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetails {
    pub code: String,
    pub title: String,
    pub department: String,
    pub level: String,
    pub credits: String,
    pub instructor: String,
    pub semester: String,
    pub description: String,
}

impl CourseDetails {
    /// Slots in display order: code, title, department, level, credits,
    /// instructor, semester, description
    #[must_use]
    pub fn lines(&self) -> [&str; 8] {
        [
            &self.code,
            &self.title,
            &self.department,
            &self.level,
            &self.credits,
            &self.instructor,
            &self.semester,
            &self.description,
        ]
    }
}

impl From<&CourseRecord> for CourseDetails {
    fn from(course: &CourseRecord) -> Self {
        Self {
            code: course.id.clone(),
            title: format!("Title: {}", course.title),
            department: format!("Department: {}", course.department),
            level: format!("Level: {}", course.level),
            credits: format!("Credits: {}", course.credits),
            instructor: format!("Instructor: {}", course.instructor),
            semester: format!("Semester: {}", course.semester),
            description: course.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::FieldValue;

    #[test]
    fn test_detail_format() {
        let course = CourseRecord {
            id: "CS101".to_string(),
            title: "Intro".to_string(),
            level: FieldValue::Number(100.0),
            credits: FieldValue::text("3"),
            ..CourseRecord::default()
        };
        let details = CourseDetails::from(&course);
        assert_eq!(
            details.lines(),
            [
                "CS101",
                "Title: Intro",
                "Department: Unknown Department",
                "Level: 100",
                "Credits: 3",
                "Instructor: TBA",
                "Semester: Unscheduled",
                "No description available.",
            ]
        );
    }

    #[test]
    fn test_placeholder_level() {
        let details = CourseDetails::from(&CourseRecord::default());
        assert_eq!(details.level, "Level: —");
        assert_eq!(details.credits, "Credits: —");
    }
}
