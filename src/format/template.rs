//! Template text such as `"Valor {00}"` or `"Telefone {Phone}"`.
//!
//! The first `{...}` placeholder is replaced by the value formatted with the
//! tag written inside it. An empty placeholder inserts the value unformatted.

use super::tag::FormatTag;
use super::ValueFormatter;
use crate::error::{FormatError, FormatResult};
use crate::value::FormatValue;
use once_cell::sync::Lazy;
use regex::Regex;

fn placeholder() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("Valid regex"));
    &PATTERN
}

/// True when `template` contains a `{...}` placeholder.
pub fn is_template(template: &str) -> bool {
    placeholder().is_match(template)
}

#[derive(Debug, Clone)]
pub struct TemplateFormatter {
    template: String,
}

impl TemplateFormatter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn apply(&self, value: &FormatValue) -> FormatResult<String> {
        let caps = placeholder()
            .captures(&self.template)
            .ok_or_else(|| FormatError::PatternError {
                pattern: self.template.clone(),
                reason: "template has no {...} placeholder".to_string(),
            })?;
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            return Ok(self.template.clone());
        };

        let token = token.as_str().trim();
        let replacement = if token.is_empty() {
            value.to_string()
        } else {
            let tag: FormatTag = token.parse()?;
            super::format(value, &tag)?
        };

        let mut out = String::with_capacity(self.template.len() + replacement.len());
        out.push_str(&self.template[..whole.start()]);
        out.push_str(&replacement);
        out.push_str(&self.template[whole.end()..]);
        Ok(out)
    }
}

impl ValueFormatter for TemplateFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        self.apply(value)
    }

    fn name(&self) -> &str {
        "template"
    }
}

/// Formats `value` into the placeholder of `template`.
///
/// # Errors
/// Fails when the template has no placeholder, names an unsupported tag, or
/// the nested format fails.
///
/// ```
/// use formatkit::format_template;
///
/// assert_eq!(format_template("4236231870", "Telefone {Phone}").unwrap(), "Telefone (42) 3623-1870");
/// ```
pub fn format_template(value: impl Into<FormatValue>, template: &str) -> FormatResult<String> {
    TemplateFormatter::new(template).apply(&value.into())
}
