//! Custom assertions for formatting tests.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

#![allow(dead_code)]

use formatkit::{format, FormatResult, FormatTag};

/// Asserts that formatting `value` with `tag` yields `expected`.
///
/// # Panics
/// Panics if formatting fails or produces different text.
pub fn assert_formats(value: &str, tag: &FormatTag, expected: &str) {
    let actual = format(value, tag)
        .unwrap_or_else(|e| panic!("Formatting '{}' as '{}' failed: {}", value, tag, e));
    assert_eq!(
        actual, expected,
        "Formatting '{}' as '{}' should give '{}'",
        value, tag, expected
    );
}

/// Asserts that a formatter is idempotent on `value`.
///
/// # Panics
/// Panics if formatting the formatted text changes it again.
pub fn assert_idempotent<F>(formatter: F, value: &str)
where
    F: Fn(&str) -> String,
{
    let once = formatter(value);
    let twice = formatter(&once);
    assert_eq!(once, twice, "Formatting '{}' twice should be stable", value);
}

/// Asserts that a fallible operation failed.
///
/// # Panics
/// Panics if `result` is `Ok`.
pub fn assert_fails(result: FormatResult<String>, context: &str) {
    assert!(
        result.is_err(),
        "{} should fail but produced '{}'",
        context,
        result.unwrap_or_default()
    );
}
