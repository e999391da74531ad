//! Text primitives shared by the normalizers and formatters.
//!
//! This module contains the character-class engine and the small string
//! predicates used for "is this value absent" gating.

pub mod chars;
pub mod predicates;

pub use chars::{CharClass, CharsCategory, SpecialChars};
pub use predicates::{
    count_occurrences, get_only_letters, get_only_letters_and_numbers, get_only_numbers,
    is_letter, is_letter_or_number, is_null_or_empty, is_null_or_white_space, is_number,
    is_only_letters, is_only_letters_and_numbers, is_only_numbers, remove_special_chars,
    remove_white_space,
};
