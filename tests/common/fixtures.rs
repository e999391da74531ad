//! Test fixtures shared across integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

/// Builds a date that is known to be valid.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Reference "today" used by date tests that must not depend on the clock.
pub fn reference_day() -> NaiveDate {
    date(2024, 6, 15)
}

/// Inputs that must never make a formatter panic.
pub fn hostile_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "\n\r\t".to_string(),
        "a".to_string(),
        "abc".to_string(),
        "🔢📱☎️".to_string(),
        "日本語 123".to_string(),
        "...,,,".to_string(),
        "+-+-".to_string(),
        "////".to_string(),
        "{}{}{".to_string(),
        "9".repeat(400),
        "1.".repeat(200),
        "-0,0".to_string(),
        "99/99/99".to_string(),
        "0/0/0".to_string(),
        "R$ -1.234.567,891".to_string(),
        "12.345.678/9012-34".to_string(),
    ]
}

/// CPF, CNPJ, CEP and phone samples already in their formatted shape.
pub fn formatted_documents() -> Vec<&'static str> {
    vec![
        "123.456.789-01",
        "12.345.678/9012-34",
        "12.345-678",
        "(12) 3456-7890",
        "(12) 34567-8901",
    ]
}
