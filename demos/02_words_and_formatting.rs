/// currency formatting and amount-in-words rendering
use facility_estimation::{
    amount_to_words, format_currency, normalize_amount, to_persian_digits, CurrencyUnit,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // normalization accepts Persian digits, Latin digits, and commas
    let amount = normalize_amount("۱,۳۷۰")?;
    assert_eq!(amount, 1370);

    // toman is the storage unit; rial display is a fixed x10 conversion
    println!("toman: {}", format_currency(amount, CurrencyUnit::Toman));
    println!("rial:  {}", format_currency(amount, CurrencyUnit::Rial));

    println!("words (toman): {}", amount_to_words(amount, CurrencyUnit::Toman)?);
    println!("words (rial):  {}", amount_to_words(amount, CurrencyUnit::Rial)?);

    // digit glyph mapping is a leaf helper on its own
    println!("glyphs: {}", to_persian_digits("0123456789"));

    Ok(())
}
