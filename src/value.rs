//! Input value model.
//!
//! Formatters accept loosely-typed input: free text, a number, or a calendar
//! date. [`FormatValue::Empty`] stands in for an absent value.

use chrono::NaiveDate;
use std::fmt;

/// A value handed to a normalizer or formatter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormatValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl FormatValue {
    /// True for `Empty` and for empty text. Whitespace is not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(_) | Self::Date(_) => false,
        }
    }

    /// True for `Empty` and for text made only of whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            other => other.is_empty(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
            Self::Date(date) => write!(f, "{}", date.format("%d/%m/%Y")),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FormatValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NaiveDate> for FormatValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<&FormatValue> for FormatValue {
    fn from(value: &FormatValue) -> Self {
        value.clone()
    }
}

impl<T: Into<FormatValue>> From<Option<T>> for FormatValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Numeric primitives become [`FormatValue::Number`]. The conversion is a
/// plain `as f64` cast: 64-bit integers above 2^53 lose precision, so pass
/// long digit strings (documents, account numbers) as text.
macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FormatValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
