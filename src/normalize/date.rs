//! Calendar helpers and date normalization.
//!
//! Date strings are read as up to three integer parts separated by `/`, `-`
//! or `.`. Missing parts are filled from a reference day, the part order is
//! guessed from the first part's magnitude, and the result is clamped to a
//! real calendar day.

use crate::value::FormatValue;
use chrono::{Datelike, Local, NaiveDate};

const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const MONTH_DAYS_LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A first part above this value can only be a year.
const MAX_DAY: i32 = 31;

pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, with a zero-based `month_index` (1 = February).
///
/// Returns `None` when `month_index` is not in `0..12`.
pub fn days_in_month(year: i32, month_index: usize) -> Option<u32> {
    let table = if is_leap(year) {
        &MONTH_DAYS_LEAP
    } else {
        &MONTH_DAYS
    };
    table.get(month_index).copied()
}

/// Expands a two-digit year: `< 50` is 20xx, `50..100` is 19xx.
pub fn expand_two_digit_year(year: i32) -> i32 {
    match year {
        y if y < 50 => y + 2000,
        y if y < 100 => y + 1900,
        y => y,
    }
}

/// Normalizes a date to `day/month/year` using today's local date for
/// missing parts.
///
/// ```
/// use formatkit::normalize_date;
///
/// assert_eq!(normalize_date("30/1/2018", false), "30/1/2018");
/// assert_eq!(normalize_date("2018-1-30", true), "30/01/2018");
/// assert_eq!(normalize_date("1/4/80", false), "1/4/1980");
/// assert_eq!(normalize_date("abc", false), "");
/// ```
pub fn normalize_date(value: impl Into<FormatValue>, zero_pad: bool) -> String {
    normalize_date_on(value, zero_pad, Local::now().date_naive())
}

/// Same as [`normalize_date`] with an explicit reference day.
pub fn normalize_date_on(value: impl Into<FormatValue>, zero_pad: bool, today: NaiveDate) -> String {
    match value.into() {
        FormatValue::Empty => String::new(),
        FormatValue::Date(date) => render(date.day(), date.month(), date.year(), zero_pad),
        other => {
            let text = other.to_string();
            match resolve_parts(&text, today) {
                Some((day, month, year)) => {
                    let (day, month) = clamp(day, month, year);
                    render(day, month, year, zero_pad)
                }
                None => String::new(),
            }
        }
    }
}

/// Reads the leading integer of a part, ignoring leading whitespace.
fn leading_int(part: &str) -> Option<i32> {
    let trimmed = part.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Orders raw parts into `(day, month, year)`.
fn resolve_parts(text: &str, today: NaiveDate) -> Option<(i32, i32, i32)> {
    let mut parts = text.split(['/', '-', '.']).map(leading_int);
    let first = parts.next().flatten()?;
    let second = parts.next().flatten();
    let third = parts.next().flatten();

    let today_day = today.day() as i32;
    let today_month = today.month() as i32;
    let year_first = first > MAX_DAY;

    let resolved = match (second, third) {
        (None, None) if year_first => (today_day, today_month, first),
        (None, None) => (first, today_month, today.year()),
        // Missing month: the typed day and year are kept.
        (None, Some(third)) if year_first => (third, today_month, first),
        (None, Some(third)) => (first, today_month, expand_two_digit_year(third)),
        (Some(second), None) if year_first => (today_day, second, first),
        (Some(second), None) => (first, second, today.year()),
        (Some(second), Some(third)) if year_first => (third, second, first),
        (Some(second), Some(third)) => (first, second, expand_two_digit_year(third)),
    };

    tracing::debug!(
        input = text,
        year_first,
        day = resolved.0,
        month = resolved.1,
        year = resolved.2,
        "resolved date parts"
    );

    Some(resolved)
}

fn clamp(day: i32, month: i32, year: i32) -> (u32, u32) {
    let month = month.clamp(1, 12) as u32;
    let last_day = days_in_month(year, month as usize - 1).unwrap_or(31);
    let day = day.clamp(1, last_day as i32) as u32;
    (day, month)
}

fn render(day: u32, month: u32, year: i32, zero_pad: bool) -> String {
    if zero_pad {
        format!("{:02}/{:02}/{}", day, month, year)
    } else {
        format!("{}/{}/{}", day, month, year)
    }
}
