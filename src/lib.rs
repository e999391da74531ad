//! Mask-based value formatting and number/date normalization.
//!
//! This library formats loosely-written values for display in Brazilian
//! front-end applications: taxpayer IDs, postal codes, phone numbers, money,
//! byte sizes and dates. Every operation is a pure string transformation.
//!
//! # Features
//!
//! - **Mask engine**: `#` placeholders filled with input digits, with
//!   truncation of partial values
//! - **Number normalization**: accepts both `1.234,56` and `1,234.56`
//! - **Date normalization**: ambiguous `D/M/Y` and `Y/M/D` strings, two-digit
//!   years, missing parts and calendar clamping
//! - **Domain formatters**: CPF, CNPJ, CEP, phone, money (R$), bytes, dates,
//!   numeric patterns and template text behind one [`format`] facade
//!
//! # Architecture
//!
//! - [`text`]: character-class engine and string predicates
//! - [`normalize`]: number and date normalizers
//! - [`format`]: mask engine, formatters and tag dispatch
//! - [`error`]: hard-failure error type
//!
//! # Quick Start
//!
//! ```
//! use formatkit::{format, format_with, FormatTag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(format("12345678901234", &FormatTag::Cnpj)?, "12.345.678/9012-34");
//! assert_eq!(format("1234,195", &FormatTag::Money)?, "R$ 1.234,20");
//! assert_eq!(format_with(1000, "0.000.000,00")?, "0.001.000,00");
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Normalization
//!
//! ```
//! use formatkit::{normalize_date, normalize_number};
//!
//! assert_eq!(normalize_number("1.234,56"), "1234.56");
//! assert_eq!(normalize_date("2018-1-30", true), "30/01/2018");
//! ```
//!
//! ## Character classes
//!
//! ```
//! use formatkit::text::{get_only_numbers, SpecialChars};
//!
//! let text = "R$ 1.000,00";
//! assert_eq!(get_only_numbers(text, SpecialChars::empty()), "100000");
//! assert_eq!(get_only_numbers(text, SpecialChars::POINT_COMMA), "1.000,00");
//! ```

pub mod error;
pub mod format;
pub mod normalize;
pub mod text;
pub mod value;

pub use error::{FormatError, FormatResult};
pub use format::{
    apply_mask, format, format_bytes, format_cep, format_cnpj, format_cpf, format_cpf_cnpj,
    format_date, format_money, format_money_with_positive_sign, format_numeric_pattern,
    format_phone, format_template, format_with, format_zero_pad, FormatTag, ValueFormatter,
};
pub use normalize::{
    days_in_month, is_leap, normalize_date, normalize_date_on, normalize_number,
    normalize_number_with_signs,
};
pub use value::FormatValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_reexports() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format("12345678", &FormatTag::Cep).unwrap(), "12.345-678");
    }

    #[test]
    fn test_pure_functions_are_thread_safe() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || format_zero_pad(i, 3))
            })
            .collect();
        let results: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("thread completed"))
            .collect();
        assert_eq!(results, vec!["000", "001", "002", "003"]);
    }
}
