//! Output formatting for CLI display
//!
//! This module formats course rows, detail blocks and filter options for the
//! non-interactive commands.

use crate::course::CourseRecord;
use crate::filters::{FilterField, FilterOptions};
use crate::view::CourseDetails;
use colored::Colorize;

/// Format a course as a listing row
///
/// In quiet mode only the identifier is printed.
#[must_use]
pub fn course_row(course: &CourseRecord, quiet: bool) -> String {
    if quiet {
        course.label().to_string()
    } else {
        format!(
            "  {:<12} {} {}",
            course.label().bold(),
            course.title,
            format!("({})", course.semester).dimmed()
        )
    }
}

/// Format the detail block of a course, one slot per line
#[must_use]
pub fn course_details(course: &CourseRecord) -> String {
    let details = CourseDetails::from(course);
    let mut lines = Vec::with_capacity(8);
    lines.push(details.code.bold().cyan().to_string());
    lines.extend(
        details.lines()[1..7]
            .iter()
            .map(|line| format!("  {line}")),
    );
    lines.push(format!("  {}", details.description.italic()));
    lines.join("\n")
}

/// Format the option values of one filter field
#[must_use]
pub fn field_options(field: FilterField, options: &FilterOptions, quiet: bool) -> String {
    let values = options.values(field);
    if quiet {
        return values.join("\n");
    }

    let mut out = format!("{}:", field.label().bold());
    if values.is_empty() {
        out.push_str(&format!("\n  {}", "(none)".dimmed()));
    }
    for value in values {
        out.push_str(&format!("\n  {value}"));
    }
    out
}

/// Summary line printed after a listing
#[must_use]
pub fn listing_summary(shown: usize, total: usize) -> String {
    format!("{shown} of {total} course(s)").dimmed().to_string()
}
