//! Tests for the character-class helpers used to sanitize input.

use formatkit::text::{
    get_only_letters, get_only_numbers, is_null_or_white_space, is_only_numbers,
    remove_special_chars, remove_white_space, CharClass, CharsCategory, SpecialChars,
};

const SAMPLE: &str = "{\"'Hello'\"}, <hello>ºª & [World] + 123,00 * -123° + (5%) R$ 1.000,00";

#[test]
fn test_letters_only() {
    assert_eq!(get_only_letters(SAMPLE, SpecialChars::empty()), "HellohelloWorldR");
}

#[test]
fn test_letters_with_quotes_and_white_space() {
    assert_eq!(
        get_only_letters("'Olá' Mundo", SpecialChars::QUOTES | SpecialChars::WHITE_SPACES),
        "'Ol' Mundo"
    );
}

#[test]
fn test_numbers_with_operators() {
    assert_eq!(
        get_only_numbers("(5%) * 2 = 10", SpecialChars::OPERATORS),
        "5%*2=10"
    );
}

#[test]
fn test_numbers_with_special_symbols() {
    assert_eq!(get_only_numbers("-123° 4ºª", SpecialChars::SPECIAL_SYMBOLS), "123°4ºª");
}

#[test]
fn test_remove_with_replacement() {
    assert_eq!(
        remove_special_chars("a.b,c;d", SpecialChars::PUNCTUATIONS, " "),
        "a b c d"
    );
    assert_eq!(
        remove_special_chars("C:\\temp|x", SpecialChars::SYMBOLS, ""),
        "C:tempx"
    );
}

#[test]
fn test_class_combinations() {
    let class = CharClass::new(
        CharsCategory::LettersAndNumbers,
        SpecialChars::DASH | SpecialChars::UNDERSCORE,
    );
    assert!(class.is_full_match("snake_case-and-kebab-123"));
    assert!(!class.is_full_match("with space"));
}

#[test]
fn test_sanitized_documents_are_numeric() {
    for document in ["123.456.789-01", "12.345.678/9012-34", "(12) 3456-7890"] {
        let digits = get_only_numbers(document, SpecialChars::empty());
        assert!(is_only_numbers(&digits, SpecialChars::empty()), "'{}'", document);
    }
}

#[test]
fn test_white_space_helpers() {
    assert_eq!(remove_white_space(" 1 2\t3\n"), "123");
    assert!(is_null_or_white_space(None));
    assert!(!is_null_or_white_space(Some("x")));
}
