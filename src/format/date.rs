//! `dd/mm/yyyy` date formatting.

use super::mask::mask_value;
use super::ValueFormatter;
use crate::error::FormatResult;
use crate::normalize::normalize_date;
use crate::value::FormatValue;
use chrono::DateTime;

pub const DATE_MASK: &str = "##/##/####";

#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter;

impl DateFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        let value = match value {
            FormatValue::Empty => return String::new(),
            FormatValue::Number(millis) if !millis.is_finite() => return String::new(),
            // Numbers are Unix epoch milliseconds.
            FormatValue::Number(millis) => match DateTime::from_timestamp_millis(*millis as i64) {
                Some(moment) => FormatValue::Date(moment.date_naive()),
                None => return String::new(),
            },
            other => other.clone(),
        };

        let normalized = normalize_date(value, true);
        if normalized.is_empty() {
            return normalized;
        }
        mask_value(&FormatValue::Text(normalized), DATE_MASK, false)
    }
}

impl ValueFormatter for DateFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(self.apply(value))
    }

    fn name(&self) -> &str {
        "date"
    }
}

/// Formats a date string, a date value or epoch milliseconds as `dd/mm/yyyy`.
///
/// ```
/// use formatkit::format_date;
///
/// assert_eq!(format_date("2018-1-30"), "30/01/2018");
/// assert_eq!(format_date("30.1.2018"), "30/01/2018");
/// ```
pub fn format_date(value: impl Into<FormatValue>) -> String {
    DateFormatter::new().apply(&value.into())
}
