//! Input validation for wallet operations
//!
//! Recipient names are restricted to letters (including accented Latin
//! vowels, ü and ñ) and whitespace. Amounts arrive as text and are parsed at
//! the input boundary; anything that is not a plain finite number becomes
//! `None`, which the operations report as an invalid amount.

use rust_decimal::Decimal;
use std::str::FromStr;

const ACCENTED_LETTERS: &str = "áéíóúÁÉÍÓÚüÜñÑ";

/// Whether `c` may appear in a recipient name
pub fn is_recipient_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || ACCENTED_LETTERS.contains(c)
}

/// Strip every character not allowed in a recipient name
///
/// Intended for live input sanitizing; [`is_valid_recipient`] remains the
/// authoritative check on submit.
pub fn sanitize_recipient(input: &str) -> String {
    input.chars().filter(|&c| is_recipient_char(c)).collect()
}

/// Whether `input` is a non-empty recipient made only of allowed characters
pub fn is_valid_recipient(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_recipient_char)
}

/// Parse a user-entered amount
///
/// Accepts plain decimal notation with an optional sign and a `,` or `.`
/// decimal separator. Returns `None` for empty, malformed, `NaN` or
/// infinite input. Sign and magnitude are not checked here.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(',', ".");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}
