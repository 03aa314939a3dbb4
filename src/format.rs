use crate::decimal::Money;
use crate::normalize::normalize_amount;
use crate::types::CurrencyUnit;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// replace every ASCII digit with its Persian-Arabic glyph
///
/// non-digit characters (group separators included) pass through untouched
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// render an integer with comma group separators every three digits
pub fn group_thousands(n: impl Into<u128>) -> String {
    let digits = n.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// format a toman amount as grouped Persian digits in the requested unit
pub fn format_currency(amount: u64, unit: CurrencyUnit) -> String {
    to_persian_digits(&group_thousands(unit.scale(amount)))
}

/// format a raw text-field value; anything non-numeric renders as "۰"
pub fn format_currency_input(input: &str, unit: CurrencyUnit) -> String {
    match normalize_amount(input) {
        Ok(amount) => format_currency(amount, unit),
        Err(_) => to_persian_digits("0"),
    }
}

/// format a computed figure, floored to a whole toman first
///
/// negative values render as "۰", matching the blank-input fallback
pub fn format_money(amount: Money, unit: CurrencyUnit) -> String {
    match amount.to_u64() {
        Some(value) => format_currency(value, unit),
        None => to_persian_digits("0"),
    }
}
