//! Brazilian Real currency formatting.

use super::locale::format_pt_br;
use super::ValueFormatter;
use crate::error::{FormatError, FormatResult};
use crate::normalize::normalize_number_with_signs;
use crate::value::FormatValue;

pub const CURRENCY_SYMBOL: &str = "R$";
const MONEY_DECIMALS: usize = 2;

/// Renders values as `R$ 1.234,56`, optionally with `+` on positive amounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneyFormatter {
    positive_sign: bool,
}

impl MoneyFormatter {
    pub fn new(positive_sign: bool) -> Self {
        Self { positive_sign }
    }

    pub fn apply(&self, value: &FormatValue) -> FormatResult<String> {
        if value.is_empty() {
            return Ok(String::new());
        }

        let normalized = normalize_number_with_signs(value);
        let invalid = || {
            tracing::warn!(value = %value, "money value is not a number");
            FormatError::InvalidMoney {
                value: value.to_string(),
            }
        };
        let number: f64 = normalized.parse().map_err(|_| invalid())?;
        let amount = format_pt_br(number, MONEY_DECIMALS).ok_or_else(invalid)?;

        let text = match amount.strip_prefix('-') {
            Some(unsigned) => format!("-{} {}", CURRENCY_SYMBOL, unsigned),
            None => format!("{} {}", CURRENCY_SYMBOL, amount),
        };

        if self.positive_sign && number > 0.0 {
            Ok(format!("+{}", text))
        } else {
            Ok(text)
        }
    }
}

impl ValueFormatter for MoneyFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        self.apply(value)
    }

    fn name(&self) -> &str {
        if self.positive_sign {
            "moneywithpositivesign"
        } else {
            "money"
        }
    }
}

/// Formats `value` as Brazilian Real with two fraction digits.
///
/// # Errors
/// [`FormatError::InvalidMoney`] when `value` has no number in it.
///
/// ```
/// use formatkit::format_money;
///
/// assert_eq!(format_money("1234,195").unwrap(), "R$ 1.234,20");
/// assert_eq!(format_money(-1234.5).unwrap(), "-R$ 1.234,50");
/// assert!(format_money("notanumber").is_err());
/// ```
pub fn format_money(value: impl Into<FormatValue>) -> FormatResult<String> {
    MoneyFormatter::new(false).apply(&value.into())
}

/// Like [`format_money`], prefixing `+` when the amount is above zero.
pub fn format_money_with_positive_sign(value: impl Into<FormatValue>) -> FormatResult<String> {
    MoneyFormatter::new(true).apply(&value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounding() {
        assert_eq!(format_money("1234").unwrap(), "R$ 1.234,00");
        assert_eq!(format_money(1234.111).unwrap(), "R$ 1.234,11");
        assert_eq!(format_money("1234.195").unwrap(), "R$ 1.234,20");
        assert_eq!(format_money("1234,194").unwrap(), "R$ 1.234,19");
    }

    #[test]
    fn test_money_negative() {
        assert_eq!(format_money("-1234,194").unwrap(), "-R$ 1.234,19");
        assert_eq!(format_money("-0,001").unwrap(), "R$ 0,00");
    }

    #[test]
    fn test_money_positive_sign() {
        assert_eq!(
            format_money_with_positive_sign("1234,195").unwrap(),
            "+R$ 1.234,20"
        );
        assert_eq!(
            format_money_with_positive_sign("-1234,195").unwrap(),
            "-R$ 1.234,20"
        );
        assert_eq!(format_money_with_positive_sign(0).unwrap(), "R$ 0,00");
    }

    #[test]
    fn test_money_invalid() {
        assert!(matches!(
            format_money("notanumber"),
            Err(FormatError::InvalidMoney { .. })
        ));
        assert!(format_money(f64::NAN).is_err());
        assert_eq!(format_money("").unwrap(), "");
    }
}
