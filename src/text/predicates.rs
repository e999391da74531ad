//! String predicates and extraction helpers built on [`CharClass`].

use super::chars::{CharClass, CharsCategory, SpecialChars};

pub fn is_null_or_empty(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

pub fn is_null_or_white_space(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// True iff `text` is exactly one ASCII letter.
pub fn is_letter(text: &str) -> bool {
    single_char(text).is_some_and(|c| c.is_ascii_alphabetic())
}

/// True iff `text` is exactly one ASCII digit.
pub fn is_number(text: &str) -> bool {
    single_char(text).is_some_and(|c| c.is_ascii_digit())
}

pub fn is_letter_or_number(text: &str) -> bool {
    single_char(text).is_some_and(|c| c.is_ascii_alphanumeric())
}

/// Counts non-overlapping occurrences of `word` in `text`.
///
/// An empty `word` never matches.
pub fn count_occurrences(text: &str, word: &str, ignore_case: bool) -> usize {
    if text.is_empty() || word.is_empty() {
        return 0;
    }
    if ignore_case {
        text.to_lowercase().matches(&word.to_lowercase()).count()
    } else {
        text.matches(word).count()
    }
}

pub fn remove_white_space(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keeps ASCII digits plus any character from `specials`.
pub fn get_only_numbers(text: &str, specials: SpecialChars) -> String {
    CharClass::new(CharsCategory::Numbers, specials).extract(text, "")
}

pub fn get_only_letters(text: &str, specials: SpecialChars) -> String {
    CharClass::new(CharsCategory::Letters, specials).extract(text, "")
}

pub fn get_only_letters_and_numbers(text: &str, specials: SpecialChars) -> String {
    CharClass::new(CharsCategory::LettersAndNumbers, specials).extract(text, "")
}

/// Removes every character from `specials`, replacing it with `replacement`.
pub fn remove_special_chars(text: &str, specials: SpecialChars, replacement: &str) -> String {
    CharClass::new(CharsCategory::None, specials).strip(text, replacement)
}

pub fn is_only_numbers(text: &str, specials: SpecialChars) -> bool {
    CharClass::new(CharsCategory::Numbers, specials).is_full_match(text)
}

pub fn is_only_letters(text: &str, specials: SpecialChars) -> bool {
    CharClass::new(CharsCategory::Letters, specials).is_full_match(text)
}

pub fn is_only_letters_and_numbers(text: &str, specials: SpecialChars) -> bool {
    CharClass::new(CharsCategory::LettersAndNumbers, specials).is_full_match(text)
}
