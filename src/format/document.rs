//! Brazilian document, postal code and phone formatters.
//!
//! All of these are fixed masks over the input digits. CPF-or-CNPJ and phone
//! pick between a short and a long mask by digit count.

use super::mask::mask_value;
use super::ValueFormatter;
use crate::error::FormatResult;
use crate::text::{get_only_numbers, SpecialChars};
use crate::value::FormatValue;

pub const CPF_MASK: &str = "###.###.###-##";
pub const CNPJ_MASK: &str = "##.###.###/####-##";
pub const CEP_MASK: &str = "##.###-###";
pub const PHONE_MASK: &str = "(##) ####-####";
pub const MOBILE_PHONE_MASK: &str = "(##) #####-####";

/// Formatter applying one fixed mask.
#[derive(Debug, Clone, Copy)]
pub struct DocumentFormatter {
    name: &'static str,
    mask: &'static str,
}

impl DocumentFormatter {
    pub const fn cpf() -> Self {
        Self {
            name: "cpf",
            mask: CPF_MASK,
        }
    }

    pub const fn cnpj() -> Self {
        Self {
            name: "cnpj",
            mask: CNPJ_MASK,
        }
    }

    pub const fn cep() -> Self {
        Self {
            name: "cep",
            mask: CEP_MASK,
        }
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        if value.is_empty() {
            return String::new();
        }
        mask_value(value, self.mask, false)
    }
}

impl ValueFormatter for DocumentFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(self.apply(value))
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Formatter choosing the short mask up to `max_short_digits` digits and the
/// long mask above it.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveMaskFormatter {
    name: &'static str,
    short_mask: &'static str,
    long_mask: &'static str,
    max_short_digits: usize,
}

impl AdaptiveMaskFormatter {
    pub const fn cpf_cnpj() -> Self {
        Self {
            name: "cpfcnpj",
            short_mask: CPF_MASK,
            long_mask: CNPJ_MASK,
            max_short_digits: 11,
        }
    }

    pub const fn phone() -> Self {
        Self {
            name: "phone",
            short_mask: PHONE_MASK,
            long_mask: MOBILE_PHONE_MASK,
            max_short_digits: 10,
        }
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        if value.is_empty() {
            return String::new();
        }
        let digits = get_only_numbers(&value.to_string(), SpecialChars::empty());
        let mask = if digits.len() <= self.max_short_digits {
            self.short_mask
        } else {
            self.long_mask
        };
        mask_value(&FormatValue::Text(digits), mask, false)
    }
}

impl ValueFormatter for AdaptiveMaskFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(self.apply(value))
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Formats a CPF as `###.###.###-##`.
///
/// ```
/// assert_eq!(formatkit::format_cpf("12345678901"), "123.456.789-01");
/// ```
pub fn format_cpf(value: impl Into<FormatValue>) -> String {
    DocumentFormatter::cpf().apply(&value.into())
}

/// Formats a CNPJ as `##.###.###/####-##`.
pub fn format_cnpj(value: impl Into<FormatValue>) -> String {
    DocumentFormatter::cnpj().apply(&value.into())
}

/// CPF mask up to 11 digits, CNPJ mask above.
pub fn format_cpf_cnpj(value: impl Into<FormatValue>) -> String {
    AdaptiveMaskFormatter::cpf_cnpj().apply(&value.into())
}

pub fn format_cep(value: impl Into<FormatValue>) -> String {
    DocumentFormatter::cep().apply(&value.into())
}

/// Landline mask up to 10 digits, mobile mask above.
pub fn format_phone(value: impl Into<FormatValue>) -> String {
    AdaptiveMaskFormatter::phone().apply(&value.into())
}

/// Left-pads the digits of `value` with zeros to `length`.
///
/// A zero `length` returns the value's text unchanged; digits already at
/// least `length` long are returned as they are.
pub fn format_zero_pad(value: impl Into<FormatValue>, length: usize) -> String {
    let value = value.into();
    if value.is_empty() {
        return String::new();
    }
    if length == 0 {
        return value.to_string();
    }
    let digits = get_only_numbers(&value.to_string(), SpecialChars::empty());
    let mut out = "0".repeat(length.saturating_sub(digits.len()));
    out.push_str(&digits);
    out
}
