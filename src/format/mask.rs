//! Mask engine.
//!
//! A mask is a pattern where `#` takes the next input digit and every other
//! character is copied verbatim. Input is reduced to its digits first, so
//! already-formatted values format the same way as raw ones.

use super::ValueFormatter;
use crate::error::{FormatError, FormatResult};
use crate::text::{get_only_numbers, SpecialChars};
use crate::value::FormatValue;

/// Placeholder consumed by one input digit.
pub const MASK_MARK: char = '#';

/// A borrowed mask pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask<'a> {
    pattern: &'a str,
}

impl<'a> Mask<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// Number of `#` placeholders.
    pub fn capacity(&self) -> usize {
        self.pattern.chars().filter(|c| *c == MASK_MARK).count()
    }

    /// Lays `digits` into the pattern.
    ///
    /// Output stops where a `#` has no digit left. When the digits cannot fill
    /// every placeholder, or when `strict_incomplete` is set, output also stops
    /// as soon as the digits run out, so no literal trails the last digit.
    pub fn apply(&self, digits: &str, strict_incomplete: bool) -> String {
        let incomplete = strict_incomplete || digits.chars().count() < self.capacity();
        let mut digits = digits.chars().peekable();
        let mut out = String::with_capacity(self.pattern.len());

        for mark in self.pattern.chars() {
            if incomplete && digits.peek().is_none() {
                break;
            }
            if mark == MASK_MARK {
                match digits.next() {
                    Some(digit) => out.push(digit),
                    None => break,
                }
            } else {
                out.push(mark);
            }
        }

        out
    }
}

/// Applies `pattern` to the digits of `value`.
///
/// # Errors
/// [`FormatError::EmptyMask`] when `pattern` is empty and `value` is not blank.
///
/// ```
/// use formatkit::apply_mask;
///
/// assert_eq!(apply_mask("12345678", "##.###-###", false).unwrap(), "12.345-678");
/// assert_eq!(apply_mask("123", "##.###-###", false).unwrap(), "12.3");
/// ```
pub fn apply_mask(
    value: impl Into<FormatValue>,
    pattern: &str,
    strict_incomplete: bool,
) -> FormatResult<String> {
    let value = value.into();
    if value.is_blank() {
        return Ok(String::new());
    }
    if pattern.is_empty() {
        tracing::warn!(value = %value, "mask is empty");
        return Err(FormatError::EmptyMask {
            value: value.to_string(),
        });
    }
    Ok(mask_value(&value, pattern, strict_incomplete))
}

/// Infallible core used by formatters whose patterns are known non-empty.
pub(crate) fn mask_value(value: &FormatValue, pattern: &str, strict_incomplete: bool) -> String {
    let digits = get_only_numbers(&value.to_string(), SpecialChars::empty());
    Mask::new(pattern).apply(&digits, strict_incomplete)
}

/// Formatter for a free-form mask pattern.
#[derive(Debug, Clone)]
pub struct MaskFormatter {
    pattern: String,
    strict_incomplete: bool,
}

impl MaskFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            strict_incomplete: false,
        }
    }

    /// Never emits literals after the last digit, even for a full value.
    pub fn with_strict_incomplete(mut self, strict: bool) -> Self {
        self.strict_incomplete = strict;
        self
    }
}

impl ValueFormatter for MaskFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        apply_mask(value, &self.pattern, self.strict_incomplete)
    }

    fn name(&self) -> &str {
        "mask"
    }
}
