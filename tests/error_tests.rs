//! Error handling tests.
//!
//! Covers every error variant's message and the operations that raise them.

use formatkit::error::{FormatError, FormatResult};
use formatkit::{apply_mask, format_money, format_template, format_with, FormatTag};
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

#[test]
fn test_empty_mask_display() {
    let err = apply_mask("123", "", false).unwrap_err();
    assert!(matches!(err, FormatError::EmptyMask { .. }));
    assert_eq!(err.to_string(), "Mask cannot be null or empty (value '123')");
}

#[test]
fn test_invalid_money_display() {
    let err = format_money("abc").unwrap_err();
    assert!(matches!(err, FormatError::InvalidMoney { ref value } if value == "abc"));
    assert!(err.to_string().contains("'abc'"));
}

#[test]
fn test_unsupported_format_display() {
    for tag in ["datetime", "time", "margin"] {
        let err = format_with("1", tag).unwrap_err();
        assert_eq!(err.to_string(), format!("Formatting type '{}' not supported", tag));
    }
}

#[test]
fn test_unsupported_tag_inside_template() {
    let err = format_template("1", "Value {datetime}").unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedFormat { ref tag } if tag == "datetime"));
}

#[test]
fn test_template_without_placeholder() {
    let err = format_template("1", "no placeholder").unwrap_err();
    assert!(matches!(err, FormatError::PatternError { .. }));
    assert!(err.to_string().contains("placeholder"));
}

#[test]
fn test_money_error_propagates_through_template() {
    let result = format_template("abc", "Total: {money}");
    assert!(matches!(result, Err(FormatError::InvalidMoney { .. })));
}

#[test]
fn test_io_error_display_and_source() {
    let err = FormatError::Io {
        path: PathBuf::from("/data/values.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
    };

    let display = err.to_string();
    assert!(display.contains("/data/values.txt"));
    assert!(display.contains("IO error"));
    assert!(display.contains("file not found"));
    assert!(err.source().is_some());
}

#[test]
fn test_other_variants_have_no_source() {
    let err = FormatError::UnsupportedFormat {
        tag: "x".to_string(),
    };
    assert!(err.source().is_none());
}

#[test]
fn test_regex_error_conversion() {
    let regex_err = regex::Regex::new("(").unwrap_err();
    let err: FormatError = regex_err.into();
    assert!(matches!(err, FormatError::PatternError { .. }));
}

#[test]
fn test_result_alias_with_question_mark() {
    fn resolve_both(a: &str, b: &str) -> FormatResult<(FormatTag, FormatTag)> {
        Ok((FormatTag::resolve(a)?, FormatTag::resolve(b)?))
    }

    assert!(resolve_both("cpf", "money").is_ok());
    assert!(resolve_both("cpf", "datetime").is_err());
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FormatError>();
}
