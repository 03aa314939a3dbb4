pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod normalize;
pub mod schedule;
pub mod types;
pub mod words;

// re-export key types
pub use config::{EstimationConfig, RateSchedule, RateTier};
pub use decimal::{Money, Rate};
pub use errors::{EstimationError, Result};
pub use format::{
    format_currency, format_currency_input, format_money, group_thousands, to_persian_digits,
};
pub use normalize::{normalize_amount, sanitize_amount_input};
pub use schedule::{EstimationRow, ScheduleCalculator};
pub use types::CurrencyUnit;
pub use words::{amount_to_words, words_for_input, MAX_EXPRESSIBLE};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
