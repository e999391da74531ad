//! Human-readable byte sizes.

use super::locale::round_decimal;
use super::ValueFormatter;
use crate::error::FormatResult;
use crate::normalize::normalize_number;
use crate::value::FormatValue;

const UNIT: f64 = 1024.0;
const SCALED_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

#[derive(Debug, Clone, Copy, Default)]
pub struct BytesFormatter;

impl BytesFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, value: &FormatValue) -> String {
        let Ok(bytes) = normalize_number(value).parse::<f64>() else {
            return String::new();
        };

        if bytes < UNIT {
            return render(bytes, 0, "bytes");
        }

        let mut scaled = bytes / UNIT;
        let mut unit = 0;
        while scaled >= UNIT && unit < SCALED_UNITS.len() - 1 {
            scaled /= UNIT;
            unit += 1;
        }
        render(scaled, 1, SCALED_UNITS[unit])
    }
}

fn render(value: f64, decimals: usize, unit: &str) -> String {
    match round_decimal(value, decimals) {
        Some(parts) if decimals > 0 => format!("{}.{} {}", parts.integer, parts.fraction, unit),
        Some(parts) => format!("{} {}", parts.integer, unit),
        None => String::new(),
    }
}

impl ValueFormatter for BytesFormatter {
    fn format(&self, value: &FormatValue) -> FormatResult<String> {
        Ok(self.apply(value))
    }

    fn name(&self) -> &str {
        "bytes"
    }
}

/// Formats a byte count with the largest unit that keeps it under 1024.
///
/// ```
/// use formatkit::format_bytes;
///
/// assert_eq!(format_bytes(1023), "1023 bytes");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(value: impl Into<FormatValue>) -> String {
    BytesFormatter::new().apply(&value.into())
}
