//! Locale-aware string ordering
//!
//! A small multi-level collation in the spirit of the Unicode root locale:
//!
//! 1. **Primary**: case- and accent-insensitive; whitespace sorts before
//!    punctuation, punctuation before digits, digits before letters.
//! 2. **Secondary**: accents (`"resume"` before `"résumé"`).
//! 3. **Tertiary**: case, lowercase first (`"apple"` before `"Apple"`).
//!
//! Remaining ties fall back to code point order so the result is a total
//! order.

use std::cmp::Ordering;

/// Compare two strings for display ordering
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}

fn primary(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (class(c), base_letter(c)))
}

fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn tertiary(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| u8::from(c.is_uppercase()))
}

fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

/// Strip Latin-1 diacritics from a lowercase letter
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
