//! Value formatters and the `format` facade.
//!
//! Every formatter implements [`ValueFormatter`]. [`FormatTag::formatter`]
//! maps a tag to its formatter and [`format`] dispatches through it.

pub mod bytes;
pub mod date;
pub mod document;
pub mod locale;
pub mod mask;
pub mod money;
pub mod numeric;
pub mod tag;
pub mod template;

pub use bytes::{format_bytes, BytesFormatter};
pub use date::{format_date, DateFormatter};
pub use document::{
    format_cep, format_cnpj, format_cpf, format_cpf_cnpj, format_phone, format_zero_pad,
    AdaptiveMaskFormatter, DocumentFormatter,
};
pub use mask::{apply_mask, Mask, MaskFormatter};
pub use money::{format_money, format_money_with_positive_sign, MoneyFormatter};
pub use numeric::{format_numeric_pattern, LocaleNumberFormatter, NumberStyle, NumericPatternFormatter};
pub use tag::FormatTag;
pub use template::{format_template, TemplateFormatter};

use crate::error::FormatResult;
use crate::value::FormatValue;

/// Strategy for turning a value into display text.
pub trait ValueFormatter: Send + Sync {
    /// Formats `value`. Data with nothing to show yields `Ok("")`.
    fn format(&self, value: &FormatValue) -> FormatResult<String>;

    /// Short lowercase name used in logs.
    fn name(&self) -> &str;
}

/// Passes the value's text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

impl ValueFormatter for RawFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(value.to_string())
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Formats `value` according to `tag`.
///
/// Empty input yields an empty string for every tag, and a date value is
/// always formatted as a date whatever the tag.
///
/// # Errors
/// Propagates hard failures from the selected formatter (an invalid money
/// amount, an unsupported tag inside a template).
///
/// ```
/// use formatkit::{format, FormatTag};
///
/// assert_eq!(format("12345678901", &FormatTag::Cpf).unwrap(), "123.456.789-01");
/// assert_eq!(format("", &FormatTag::Money).unwrap(), "");
/// ```
pub fn format(value: impl Into<FormatValue>, tag: &FormatTag) -> FormatResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Ok(String::new());
    }
    if value.as_date().is_some() {
        tracing::debug!(tag = %tag, "date value formatted as date");
        return Ok(DateFormatter::new().apply(&value));
    }

    let formatter = tag.formatter();
    tracing::debug!(tag = %tag, formatter = formatter.name(), "dispatching format");
    formatter.format(&value)
}

/// Resolves `spec` with [`FormatTag::resolve`] and formats `value` with it.
///
/// # Errors
/// [`crate::FormatError::UnsupportedFormat`] for an unrecognized tag, plus
/// everything [`format`] can return.
///
/// ```
/// use formatkit::format_with;
///
/// assert_eq!(format_with(1, "00").unwrap(), "01");
/// assert_eq!(format_with("4236231870", "Telefone {Phone}").unwrap(), "Telefone (42) 3623-1870");
/// assert!(format_with("1", "datetime").is_err());
/// ```
pub fn format_with(value: impl Into<FormatValue>, spec: &str) -> FormatResult<String> {
    let tag = FormatTag::resolve(spec)?;
    format(value, &tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_for_every_tag() {
        for tag in FormatTag::named() {
            assert_eq!(format("", tag).unwrap(), "", "tag {}", tag);
            assert_eq!(format(FormatValue::Empty, tag).unwrap(), "", "tag {}", tag);
        }
    }

    #[test]
    fn test_date_value_overrides_tag() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 30).expect("valid date");
        assert_eq!(format(date, &FormatTag::Cpf).unwrap(), "30/01/2018");
    }

    #[test]
    fn test_raw() {
        assert_eq!(format(" a b ", &FormatTag::Raw).unwrap(), " a b ");
    }

    #[test]
    fn test_no_digits_cpf() {
        assert_eq!(format("abc", &FormatTag::Cpf).unwrap(), "");
    }
}
