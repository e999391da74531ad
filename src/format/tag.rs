//! Formatting-type tags.
//!
//! A tag is either a named domain format or a free-form pattern. Free-form
//! strings are classified once, in [`FormatTag::resolve`], with a fixed
//! priority: exact name, numeric pattern, mask, template, then names
//! compared case-insensitively.

use super::bytes::BytesFormatter;
use super::date::DateFormatter;
use super::document::{AdaptiveMaskFormatter, DocumentFormatter};
use super::mask::{MaskFormatter, MASK_MARK};
use super::money::MoneyFormatter;
use super::numeric::{is_numeric_pattern, LocaleNumberFormatter, NumberStyle, NumericPatternFormatter};
use super::template::{is_template, TemplateFormatter};
use super::{RawFormatter, ValueFormatter};
use crate::error::{FormatError, FormatResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Bytes,
    Cep,
    Cnpj,
    Cpf,
    CpfCnpj,
    Date,
    Money,
    MoneyWithPositiveSign,
    Phone,
    /// Value text as-is
    Raw,
    Integer,
    Decimal,
    Percent,
    /// Numeric pattern such as `"0.000,00"`
    NumericPattern(String),
    /// Mask such as `"##/##"`
    Mask(String),
    /// Template such as `"Valor {00}"`
    Template(String),
}

static NAMED: [FormatTag; 13] = [
    FormatTag::Bytes,
    FormatTag::Cep,
    FormatTag::Cnpj,
    FormatTag::Cpf,
    FormatTag::CpfCnpj,
    FormatTag::Date,
    FormatTag::Money,
    FormatTag::MoneyWithPositiveSign,
    FormatTag::Phone,
    FormatTag::Raw,
    FormatTag::Integer,
    FormatTag::Decimal,
    FormatTag::Percent,
];

impl FormatTag {
    /// All named tags, in declaration order.
    pub fn named() -> &'static [FormatTag] {
        &NAMED
    }

    /// Lowercase name of a named tag, or the pattern text of a free-form one.
    pub fn name(&self) -> &str {
        match self {
            Self::Bytes => "bytes",
            Self::Cep => "cep",
            Self::Cnpj => "cnpj",
            Self::Cpf => "cpf",
            Self::CpfCnpj => "cpfcnpj",
            Self::Date => "date",
            Self::Money => "money",
            Self::MoneyWithPositiveSign => "moneywithpositivesign",
            Self::Phone => "phone",
            Self::Raw => "none",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Percent => "percent",
            Self::NumericPattern(pattern) | Self::Mask(pattern) | Self::Template(pattern) => {
                pattern
            }
        }
    }

    /// Classifies a tag string.
    ///
    /// # Errors
    /// [`FormatError::UnsupportedFormat`] when nothing matches.
    pub fn resolve(spec: &str) -> FormatResult<Self> {
        if let Some(tag) = NAMED.iter().find(|tag| tag.name() == spec) {
            return Ok(tag.clone());
        }
        if is_numeric_pattern(spec) {
            return Ok(Self::NumericPattern(spec.to_string()));
        }
        if spec.contains(MASK_MARK) {
            return Ok(Self::Mask(spec.to_string()));
        }
        if is_template(spec) {
            return Ok(Self::Template(spec.to_string()));
        }
        let lowered = spec.trim().to_lowercase();
        NAMED
            .iter()
            .find(|tag| tag.name() == lowered)
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(tag = spec, "unsupported formatting type");
                FormatError::UnsupportedFormat {
                    tag: spec.to_string(),
                }
            })
    }

    /// Builds the formatter this tag selects.
    pub fn formatter(&self) -> Box<dyn ValueFormatter> {
        match self {
            Self::Bytes => Box::new(BytesFormatter::new()),
            Self::Cep => Box::new(DocumentFormatter::cep()),
            Self::Cnpj => Box::new(DocumentFormatter::cnpj()),
            Self::Cpf => Box::new(DocumentFormatter::cpf()),
            Self::CpfCnpj => Box::new(AdaptiveMaskFormatter::cpf_cnpj()),
            Self::Date => Box::new(DateFormatter::new()),
            Self::Money => Box::new(MoneyFormatter::new(false)),
            Self::MoneyWithPositiveSign => Box::new(MoneyFormatter::new(true)),
            Self::Phone => Box::new(AdaptiveMaskFormatter::phone()),
            Self::Raw => Box::new(RawFormatter),
            Self::Integer => Box::new(LocaleNumberFormatter::new(NumberStyle::Integer)),
            Self::Decimal => Box::new(LocaleNumberFormatter::new(NumberStyle::Decimal)),
            Self::Percent => Box::new(LocaleNumberFormatter::new(NumberStyle::Percent)),
            Self::NumericPattern(pattern) => Box::new(NumericPatternFormatter::new(pattern.as_str())),
            Self::Mask(pattern) => Box::new(MaskFormatter::new(pattern.as_str())),
            Self::Template(template) => Box::new(TemplateFormatter::new(template.as_str())),
        }
    }
}

impl FromStr for FormatTag {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
