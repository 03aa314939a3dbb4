use crate::errors::{EstimationError, Result};
use crate::format::{group_thousands, to_persian_digits};

/// first Persian-Arabic digit glyph, U+06F0
const PERSIAN_ZERO: char = '\u{06F0}';
/// last Persian-Arabic digit glyph, U+06F9
const PERSIAN_NINE: char = '\u{06F9}';

/// parse a raw amount string into whole toman
///
/// accepts Latin digits, Persian-Arabic digits, and comma group separators
/// in any mix; anything else fails with `InvalidAmount`
pub fn normalize_amount(input: &str) -> Result<u64> {
    let invalid = || EstimationError::InvalidAmount {
        input: input.to_string(),
    };

    let mut digits = String::with_capacity(input.len());
    for c in input.trim().chars() {
        match c {
            ',' => continue,
            '0'..='9' => digits.push(c),
            PERSIAN_ZERO..=PERSIAN_NINE => {
                // glyph offset from U+06F0 is the digit value
                let value = c as u32 - PERSIAN_ZERO as u32;
                digits.push(char::from_digit(value, 10).ok_or_else(invalid)?);
            }
            _ => return Err(invalid()),
        }
    }

    if digits.is_empty() {
        return Err(invalid());
    }
    digits.parse::<u64>().map_err(|_| invalid())
}

/// clean a text-field value for echo-back into the input
///
/// keeps only digit characters, then re-renders the amount as comma-grouped
/// Persian digits; empty when nothing numeric (or too large to hold) remains
pub fn sanitize_amount_input(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || (PERSIAN_ZERO..=PERSIAN_NINE).contains(c))
        .collect();

    match normalize_amount(&digits) {
        Ok(value) => to_persian_digits(&group_thousands(value)),
        Err(_) => String::new(),
    }
}
