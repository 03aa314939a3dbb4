use crate::errors::{EstimationError, Result};
use crate::normalize::normalize_amount;
use crate::types::CurrencyUnit;

/// magnitude words, one per base-1000 group, low to high
const MAGNITUDES: [&str; 5] = ["", "هزار", "میلیون", "میلیارد", "ترلیون"];

const ONES: [&str; 10] = [
    "", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه",
];

/// 10 through 19 are irregular and never composed from tens + ones
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

const TENS: [&str; 10] = [
    "", "ده", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

const CONNECTOR: &str = " و ";

/// smallest display value with no word form, one past the ترلیون groups
pub const MAX_EXPRESSIBLE: u128 = 1_000_000_000_000_000;

/// words for a single 0..=999 group, hundreds/tens/ones cascade
fn group_to_words(n: u32) -> String {
    let h = (n / 100) as usize;
    let t = ((n % 100) / 10) as usize;
    let o = (n % 10) as usize;

    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if h > 0 {
        parts.push(HUNDREDS[h]);
    }
    if t == 1 {
        parts.push(TEENS[o]);
    } else {
        if t > 1 {
            parts.push(TENS[t]);
        }
        if o > 0 {
            parts.push(ONES[o]);
        }
    }
    parts.join(CONNECTOR)
}

/// render a toman amount as a Persian amount expression in the given unit
///
/// zero renders as the empty string; amounts at or past `MAX_EXPRESSIBLE`
/// after unit conversion fail with `UnsupportedMagnitude`
pub fn amount_to_words(amount: u64, unit: CurrencyUnit) -> Result<String> {
    let scaled = unit.scale(amount);
    if scaled == 0 {
        return Ok(String::new());
    }
    if scaled >= MAX_EXPRESSIBLE {
        return Err(EstimationError::UnsupportedMagnitude { amount: scaled });
    }

    // collect nonzero base-1000 groups low to high, then emit high to low
    let mut groups: Vec<String> = Vec::new();
    let mut rest = scaled;
    let mut magnitude = 0;
    while rest > 0 {
        let group = (rest % 1000) as u32;
        if group > 0 {
            let mut words = group_to_words(group);
            if !MAGNITUDES[magnitude].is_empty() {
                words.push(' ');
                words.push_str(MAGNITUDES[magnitude]);
            }
            groups.push(words);
        }
        rest /= 1000;
        magnitude += 1;
    }
    groups.reverse();

    let mut out = groups.join(CONNECTOR);
    out.push(' ');
    out.push_str(unit.word());
    Ok(out)
}

/// words for a raw text-field value; blank, invalid, zero, and oversized
/// amounts all render as the empty string
pub fn words_for_input(input: &str, unit: CurrencyUnit) -> String {
    match normalize_amount(input) {
        Ok(amount) => amount_to_words(amount, unit).unwrap_or_default(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toman(amount: u64) -> String {
        amount_to_words(amount, CurrencyUnit::Toman).unwrap()
    }

    #[test]
    fn test_zero_and_blank_render_nothing() {
        assert_eq!(toman(0), "");
        assert_eq!(words_for_input("", CurrencyUnit::Toman), "");
        assert_eq!(words_for_input("abc", CurrencyUnit::Toman), "");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(toman(1), "یک تومان");
        assert_eq!(toman(9), "نه تومان");
    }

    #[test]
    fn test_teens_are_irregular() {
        assert_eq!(toman(10), "ده تومان");
        assert_eq!(toman(11), "یازده تومان");
        assert_eq!(toman(15), "پانزده تومان");
        assert_eq!(toman(19), "نوزده تومان");
        assert_eq!(toman(110), "صد و ده تومان");
        assert_eq!(toman(315), "سیصد و پانزده تومان");
    }

    #[test]
    fn test_tens_compose_with_connector() {
        assert_eq!(toman(20), "بیست تومان");
        assert_eq!(toman(21), "بیست و یک تومان");
        assert_eq!(toman(99), "نود و نه تومان");
        assert_eq!(toman(345), "سیصد و چهل و پنج تومان");
    }

    #[test]
    fn test_thousand_grouping_grammar() {
        assert_eq!(toman(1370), "یک هزار و سیصد و هفتاد تومان");
        assert_eq!(toman(1000), "یک هزار تومان");
        assert_eq!(toman(2001), "دو هزار و یک تومان");
    }

    #[test]
    fn test_skipped_zero_groups() {
        assert_eq!(toman(10_000_000), "ده میلیون تومان");
        assert_eq!(toman(1_000_001), "یک میلیون و یک تومان");
        assert_eq!(toman(5_000_000_000), "پنج میلیارد تومان");
    }

    #[test]
    fn test_trillion_magnitude() {
        assert_eq!(toman(1_000_000_000_000), "یک ترلیون تومان");
        assert_eq!(
            toman(999_999_999_999_999),
            "نهصد و نود و نه ترلیون و نهصد و نود و نه میلیارد و \
             نهصد و نود و نه میلیون و نهصد و نود و نه هزار و \
             نهصد و نود و نه تومان"
        );
    }

    #[test]
    fn test_rial_scales_before_wording() {
        assert_eq!(
            amount_to_words(1370, CurrencyUnit::Rial).unwrap(),
            "سیزده هزار و هفتصد ریال"
        );
    }

    #[test]
    fn test_unsupported_magnitude() {
        assert!(matches!(
            amount_to_words(1_000_000_000_000_000, CurrencyUnit::Toman),
            Err(EstimationError::UnsupportedMagnitude { .. })
        ));
        // fits in toman, overflows the table once scaled to rial
        assert!(matches!(
            amount_to_words(100_000_000_000_000, CurrencyUnit::Rial),
            Err(EstimationError::UnsupportedMagnitude { .. })
        ));
        assert_eq!(
            words_for_input("1000000000000000", CurrencyUnit::Toman),
            ""
        );
    }
}
