//! Numeric patterns (`"0.000,00"`) and pt-BR number styles.
//!
//! In a numeric pattern the last `.` or `,` is the decimal point. Digits to
//! its left are integer slots filled from the right and zero-padded, the
//! other separators there are grouping literals. Digits to its right set the
//! number of rounded fraction digits.

use super::locale::{format_pt_br, round_decimal};
use super::ValueFormatter;
use crate::error::FormatResult;
use crate::normalize::normalize_number_with_signs;
use crate::value::FormatValue;
use once_cell::sync::Lazy;
use regex::Regex;

/// True when `pattern` is made only of digits, `.` and `,`.
pub fn is_numeric_pattern(pattern: &str) -> bool {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.,]+$").expect("Valid regex"));
    PATTERN.is_match(pattern)
}

fn parse_number(value: &FormatValue) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    normalize_number_with_signs(value).parse().ok()
}

#[derive(Debug, Clone)]
pub struct NumericPatternFormatter {
    pattern: String,
}

impl NumericPatternFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        let pattern = self.pattern.as_str();
        let (integer_pattern, decimal) = match pattern.rfind(['.', ',']) {
            Some(index) => (&pattern[..index], Some((&pattern[index..index + 1], &pattern[index + 1..]))),
            None => (pattern, None),
        };
        let decimals = decimal.map_or(0, |(_, slots)| {
            slots.chars().filter(|c| c.is_ascii_digit()).count()
        });

        let Some(parts) = parse_number(value).and_then(|n| round_decimal(n, decimals)) else {
            return String::new();
        };

        let mut out = String::new();
        if parts.negative {
            out.push('-');
        }
        out.push_str(&fill_integer(integer_pattern, &parts.integer));
        if let Some((point, _)) = decimal {
            out.push_str(point);
            out.push_str(&parts.fraction);
        }
        out
    }
}

/// Lays integer digits into the pattern from the right, zero-filling unused
/// slots and prepending digits that do not fit.
fn fill_integer(pattern: &str, integer: &str) -> String {
    let mut digits = integer.chars().rev();
    let mut reversed = String::with_capacity(pattern.len() + integer.len());

    for mark in pattern.chars().rev() {
        if mark.is_ascii_digit() {
            reversed.push(digits.next().unwrap_or('0'));
        } else {
            reversed.push(mark);
        }
    }
    reversed.extend(digits);

    reversed.chars().rev().collect()
}

impl ValueFormatter for NumericPatternFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(self.apply(value))
    }

    fn name(&self) -> &str {
        "numeric-pattern"
    }
}

/// Fixed pt-BR number styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// `1.234`
    Integer,
    /// `1.234,56`
    Decimal,
    /// `12,50%`
    Percent,
}

#[derive(Debug, Clone, Copy)]
pub struct LocaleNumberFormatter {
    style: NumberStyle,
}

impl LocaleNumberFormatter {
    pub fn new(style: NumberStyle) -> Self {
        Self { style }
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        let Some(number) = parse_number(value) else {
            return String::new();
        };
        let rendered = match self.style {
            NumberStyle::Integer => format_pt_br(number, 0),
            NumberStyle::Decimal => format_pt_br(number, 2),
            NumberStyle::Percent => format_pt_br(number, 2).map(|n| format!("{}%", n)),
        };
        rendered.unwrap_or_default()
    }
}

impl ValueFormatter for LocaleNumberFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(self.apply(value))
    }

    fn name(&self) -> &str {
        match self.style {
            NumberStyle::Integer => "integer",
            NumberStyle::Decimal => "decimal",
            NumberStyle::Percent => "percent",
        }
    }
}

/// Formats `value` with a numeric pattern such as `"00"` or `"0.000,00"`.
///
/// ```
/// use formatkit::format_numeric_pattern;
///
/// assert_eq!(format_numeric_pattern(1, "00"), "01");
/// assert_eq!(format_numeric_pattern(1000, "0.000.000,00"), "0.001.000,00");
/// ```
pub fn format_numeric_pattern(value: impl Into<FormatValue>, pattern: &str) -> String {
    NumericPatternFormatter::new(pattern).apply(&value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_patterns() {
        assert_eq!(format_numeric_pattern(1, "00"), "01");
        assert_eq!(format_numeric_pattern(10, "00"), "10");
        assert_eq!(format_numeric_pattern(100, "00"), "100");
        assert_eq!(format_numeric_pattern(100, "0000"), "0100");
    }

    #[test]
    fn test_decimal_patterns() {
        assert_eq!(format_numeric_pattern(1, "00.0"), "01.0");
        assert_eq!(format_numeric_pattern(1, "00,0"), "01,0");
        assert_eq!(format_numeric_pattern(1, "0,0"), "1,0");
        assert_eq!(format_numeric_pattern(1, "000.0"), "001.0");
        assert_eq!(format_numeric_pattern(1.25, "0,0"), "1,3");
    }

    #[test]
    fn test_grouped_patterns() {
        assert_eq!(format_numeric_pattern(1, "0.000.0"), "0.001.0");
        assert_eq!(format_numeric_pattern(1, "0.000,0"), "0.001,0");
        assert_eq!(format_numeric_pattern(1000, "0.000.000,00"), "0.001.000,00");
        assert_eq!(format_numeric_pattern("-12,5", "000,00"), "-012,50");
    }

    #[test]
    fn test_no_number() {
        assert_eq!(format_numeric_pattern("abc", "00"), "");
        assert_eq!(format_numeric_pattern("", "00"), "");
    }

    #[test]
    fn test_is_numeric_pattern() {
        assert!(is_numeric_pattern("0.000,00"));
        assert!(is_numeric_pattern("00"));
        assert!(!is_numeric_pattern("##.##"));
        assert!(!is_numeric_pattern("Valor {00}"));
        assert!(!is_numeric_pattern(""));
    }

    #[test]
    fn test_locale_styles() {
        let value = FormatValue::from("1234,567");
        assert_eq!(LocaleNumberFormatter::new(NumberStyle::Integer).apply(&value), "1.235");
        assert_eq!(LocaleNumberFormatter::new(NumberStyle::Decimal).apply(&value), "1.234,57");
        assert_eq!(
            LocaleNumberFormatter::new(NumberStyle::Percent).apply(&FormatValue::from(12.5)),
            "12,50%"
        );
        assert_eq!(LocaleNumberFormatter::new(NumberStyle::Integer).apply(&FormatValue::from("x")), "");
    }
}
