//! Decimal rounding and Brazilian Portuguese number rendering.
//!
//! Rounding works on the shortest decimal text of an `f64`, not on its binary
//! value, so `1234.195` rounds to `1234.20` the way a person reading the
//! number expects.

/// Rounded, sign-separated decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

/// Rounds `value` half away from zero to `decimals` fraction digits.
///
/// Returns `None` for NaN and infinities. A value that rounds to zero is
/// never negative.
pub fn round_decimal(value: f64, decimals: usize) -> Option<DecimalParts> {
    if !value.is_finite() {
        return None;
    }

    let text = format!("{}", value.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = integer.bytes().collect();
    let kept = fraction.len().min(decimals);
    digits.extend(fraction[..kept].bytes());
    digits.resize(integer.len() + decimals, b'0');

    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        increment(&mut digits);
    }

    let split = digits.len() - decimals;
    let integer = String::from_utf8_lossy(&digits[..split]).into_owned();
    let fraction = String::from_utf8_lossy(&digits[split..]).into_owned();
    let is_zero = digits.iter().all(|d| *d == b'0');

    Some(DecimalParts {
        negative: value < 0.0 && !is_zero,
        integer,
        fraction,
    })
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Inserts `separator` between every group of three integer digits.
pub fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Renders `value` the pt-BR way: `.` groups thousands, `,` marks decimals.
pub fn format_pt_br(value: f64, decimals: usize) -> Option<String> {
    let parts = round_decimal(value, decimals)?;
    let mut out = String::new();
    if parts.negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&parts.integer, '.'));
    if decimals > 0 {
        out.push(',');
        out.push_str(&parts.fraction);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(value: f64, decimals: usize) -> String {
        let parts = round_decimal(value, decimals).expect("finite value");
        let sign = if parts.negative { "-" } else { "" };
        if decimals == 0 {
            format!("{}{}", sign, parts.integer)
        } else {
            format!("{}{}.{}", sign, parts.integer, parts.fraction)
        }
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(rounded(1234.195, 2), "1234.20");
        assert_eq!(rounded(1234.194, 2), "1234.19");
        assert_eq!(rounded(-1234.195, 2), "-1234.20");
        assert_eq!(rounded(0.5, 0), "1");
        assert_eq!(rounded(2.5, 0), "3");
    }

    #[test]
    fn test_round_carries() {
        assert_eq!(rounded(9.999, 2), "10.00");
        assert_eq!(rounded(99.5, 0), "100");
    }

    #[test]
    fn test_round_pads() {
        assert_eq!(rounded(1.0, 2), "1.00");
        assert_eq!(rounded(1234.0, 0), "1234");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(rounded(-0.001, 2), "0.00");
    }

    #[test]
    fn test_non_finite() {
        assert!(round_decimal(f64::NAN, 2).is_none());
        assert!(round_decimal(f64::INFINITY, 2).is_none());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_format_pt_br() {
        assert_eq!(format_pt_br(1234.5, 2).as_deref(), Some("1.234,50"));
        assert_eq!(format_pt_br(-1234.0, 0).as_deref(), Some("-1.234"));
    }
}
