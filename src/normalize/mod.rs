//! Normalizers turning loosely-written numbers and dates into one canonical
//! representation.
//!
//! Normalizers never fail: input with nothing sensible to produce yields an
//! empty string.

pub mod date;
pub mod number;

pub use date::{days_in_month, expand_two_digit_year, is_leap, normalize_date, normalize_date_on};
pub use number::{normalize_number, normalize_number_with_signs};
