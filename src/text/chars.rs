//! Character-class engine.
//!
//! A [`CharClass`] is a base class (digits, letters, both or nothing) widened
//! by a set of [`SpecialChars`] categories. It backs every `get_only_*`,
//! `is_only_*` and `remove_special_chars` helper.

use bitflags::bitflags;

bitflags! {
    /// Groups of punctuation-like characters that can widen a [`CharClass`].
    ///
    /// Flags combine with `|`; `SpecialChars::empty()` adds nothing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpecialChars: u32 {
        const WHITE_SPACES = 1 << 0;
        const PUNCTUATIONS = 1 << 1;
        const OPERATORS = 1 << 2;
        const SYMBOLS = 1 << 3;
        const BRACKETS = 1 << 4;
        const QUOTES = 1 << 5;
        const SPECIAL_SYMBOLS = 1 << 6;
        const UNDERSCORE = 1 << 7;
        const DASH = 1 << 8;
        /// Only `.` and `,`, the two decimal/thousands separators.
        const POINT_COMMA = 1 << 9;
        /// Only `+` and `-`.
        const SIGNS = 1 << 10;
    }
}

const PUNCTUATIONS: &str = ".,;:!?";
const OPERATORS: &str = "+-*/%=";
const BRACKETS: &str = "()[]{}<>";
const SYMBOLS: &str = "~^\\/|@#$&";
const QUOTES: &str = "\"'`";
const SPECIAL_SYMBOLS: &str = "°ºª§";
const POINT_COMMA: &str = ".,";
const SIGNS: &str = "+-";

impl SpecialChars {
    /// Returns true if `c` is contributed by any flag in this set.
    pub fn matches(self, c: char) -> bool {
        (self.contains(Self::WHITE_SPACES) && c.is_whitespace())
            || (self.contains(Self::PUNCTUATIONS) && PUNCTUATIONS.contains(c))
            || (self.contains(Self::OPERATORS) && OPERATORS.contains(c))
            || (self.contains(Self::SYMBOLS) && SYMBOLS.contains(c))
            || (self.contains(Self::BRACKETS) && BRACKETS.contains(c))
            || (self.contains(Self::QUOTES) && QUOTES.contains(c))
            || (self.contains(Self::SPECIAL_SYMBOLS) && SPECIAL_SYMBOLS.contains(c))
            || (self.contains(Self::UNDERSCORE) && c == '_')
            || (self.contains(Self::DASH) && c == '-')
            || (self.contains(Self::POINT_COMMA) && POINT_COMMA.contains(c))
            || (self.contains(Self::SIGNS) && SIGNS.contains(c))
    }
}

impl Default for SpecialChars {
    fn default() -> Self {
        Self::empty()
    }
}

/// Base character class a [`CharClass`] starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharsCategory {
    #[default]
    None,
    Numbers,
    Letters,
    LettersAndNumbers,
}

impl CharsCategory {
    fn matches(self, c: char) -> bool {
        match self {
            Self::None => false,
            Self::Numbers => c.is_ascii_digit(),
            Self::Letters => c.is_ascii_alphabetic(),
            Self::LettersAndNumbers => c.is_ascii_alphanumeric(),
        }
    }
}

/// Allowed character set: a base category plus special-character groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClass {
    pub base: CharsCategory,
    pub specials: SpecialChars,
}

impl CharClass {
    pub fn new(base: CharsCategory, specials: SpecialChars) -> Self {
        Self { base, specials }
    }

    /// ASCII digits plus the given groups.
    pub fn numbers(specials: SpecialChars) -> Self {
        Self::new(CharsCategory::Numbers, specials)
    }

    pub fn contains(&self, c: char) -> bool {
        self.base.matches(c) || self.specials.matches(c)
    }

    /// Replaces every character outside the class with `replacement`.
    pub fn extract(&self, text: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if self.contains(c) {
                out.push(c);
            } else {
                out.push_str(replacement);
            }
        }
        out
    }

    /// Replaces every character inside the class with `replacement`.
    pub fn strip(&self, text: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if self.contains(c) {
                out.push_str(replacement);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// True iff `text` is non-empty and every character belongs to the class.
    pub fn is_full_match(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| self.contains(c))
    }
}
