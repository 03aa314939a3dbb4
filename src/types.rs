use serde::{Deserialize, Serialize};

/// currency unit for display
///
/// amounts are stored in toman throughout; rial is a fixed x10 display
/// conversion, not an exchange rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyUnit {
    #[default]
    Toman,
    Rial,
}

impl CurrencyUnit {
    /// multiplier applied to a toman amount before rendering
    pub fn factor(&self) -> u128 {
        match self {
            CurrencyUnit::Toman => 1,
            CurrencyUnit::Rial => 10,
        }
    }

    /// unit word appended to amounts in words
    pub fn word(&self) -> &'static str {
        match self {
            CurrencyUnit::Toman => "تومان",
            CurrencyUnit::Rial => "ریال",
        }
    }

    /// scale a toman amount into this unit for display
    pub fn scale(&self, amount: u64) -> u128 {
        amount as u128 * self.factor()
    }
}
