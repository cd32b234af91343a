//! Academic semester ordering
//!
//! Semesters are written `"<Term> <Year>"`, e.g. `"Fall 2023"`. They order by
//! year, then by term within the year: Winter, Spring, Summer, Fall.

use std::cmp::Ordering;

/// Rank of a term within its year
#[must_use]
pub(crate) fn term_rank(term: &str) -> Option<u8> {
    match term {
        "Winter" => Some(1),
        "Spring" => Some(2),
        "Summer" => Some(3),
        "Fall" => Some(4),
        _ => None,
    }
}

/// Compare two semester strings
///
/// Returns `None` when the pair cannot be ordered: a year that does not start
/// with digits, a missing year, or (for equal years) an unknown term. Sorting
/// treats `None` as equal, which leaves such entries where the previous stage
/// put them relative to their neighbours.
///
/// The string is split on single spaces, so `"Fall  2023"` (two spaces) has
/// no year.
#[must_use]
pub fn compare_semester(a: &str, b: &str) -> Option<Ordering> {
    let (term_a, year_a) = split_semester(a);
    let (term_b, year_b) = split_semester(b);

    let year_a = leading_integer(year_a?)?;
    let year_b = leading_integer(year_b?)?;
    if year_a != year_b {
        return year_a.partial_cmp(&year_b);
    }

    Some(term_rank(term_a)?.cmp(&term_rank(term_b)?))
}

fn split_semester(semester: &str) -> (&str, Option<&str>) {
    let mut parts = semester.split(' ');
    let term = parts.next().unwrap_or_default();
    (term, parts.next())
}

/// Parse the integer prefix of a string
///
/// Leading whitespace and a sign are accepted, a `0x` prefix reads hex, and
/// parsing stops at the first non-digit (`"2024b"` is 2024).
fn leading_integer(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: Option<f64> = None;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        value = Some(value.unwrap_or(0.0).mul_add(f64::from(radix), f64::from(digit)));
    }

    value.map(|v| if negative { -v } else { v })
}
