//! Numeric string normalization.
//!
//! Accepts both `1.234,56` and `1,234.56` styles by trusting position: the
//! last `.` or `,` is the decimal separator, every earlier one is a thousands
//! separator.

use crate::text::{get_only_numbers, SpecialChars};
use std::fmt::Display;

/// Normalizes `value` to digits with at most one `.` decimal separator.
///
/// Returns an empty string when `value` is blank or has no digits.
///
/// ```
/// use formatkit::normalize_number;
///
/// assert_eq!(normalize_number("R$ 1.234,56"), "1234.56");
/// assert_eq!(normalize_number("1,234.56"), "1234.56");
/// assert_eq!(normalize_number("hello"), "");
/// ```
pub fn normalize_number(value: impl Display) -> String {
    let text = value.to_string();
    let filtered = get_only_numbers(&text, SpecialChars::POINT_COMMA);
    canonicalize(&filtered)
}

/// Like [`normalize_number`] but keeps the sign written before the first digit.
///
/// A leading `-` or `+` survives; signs anywhere else are dropped.
pub fn normalize_number_with_signs(value: impl Display) -> String {
    let text = value.to_string();
    let filtered = get_only_numbers(&text, SpecialChars::POINT_COMMA | SpecialChars::SIGNS);

    let sign = filtered
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .filter(|c| matches!(c, '+' | '-'))
        .last();
    let unsigned: String = filtered.chars().filter(|c| !matches!(c, '+' | '-')).collect();

    let number = canonicalize(&unsigned);
    match sign {
        Some(sign) if !number.is_empty() => format!("{}{}", sign, number),
        _ => number,
    }
}

fn canonicalize(filtered: &str) -> String {
    if !filtered.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }

    match filtered.rfind(['.', ',']) {
        None => filtered.to_string(),
        Some(index) => {
            let integer: String = filtered[..index]
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            format!("{}.{}", integer, &filtered[index + 1..])
        }
    }
}
