use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::EstimationConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::normalize::normalize_amount;

/// one estimation table row, derived per offered tenor
///
/// all monetary fields are already floored to whole toman; profit and payout
/// always sum back to the total repayment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationRow {
    pub tenor_months: u32,
    pub total_repayment: Money,
    pub discount_rate: Rate,
    pub profit_amount: Money,
    pub net_payout: Money,
    pub monthly_installment_12: Money,
    pub monthly_installment_10_adjusted: Money,
}

impl EstimationRow {
    /// get json representation of the row
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// computes the per-tenor estimation table from a base monthly amount
///
/// stateless and deterministic; recomputing on every input change is safe
#[derive(Debug, Clone)]
pub struct ScheduleCalculator {
    config: EstimationConfig,
}

impl ScheduleCalculator {
    /// build a calculator over a validated configuration
    pub fn new(config: EstimationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// calculator with the product's standard tenors and rates
    pub fn standard() -> Self {
        Self {
            config: EstimationConfig::default(),
        }
    }

    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// one row per configured tenor; non-positive base yields an empty table,
    /// which the caller reads as "awaiting input" rather than an error
    pub fn compute_schedule(&self, base_amount: Money) -> Vec<EstimationRow> {
        if !base_amount.is_positive() {
            return Vec::new();
        }

        self.config
            .tenor_months
            .iter()
            .map(|&months| self.compute_row(base_amount, months))
            .collect()
    }

    /// schedule for a raw text-field value; invalid input yields an empty table
    pub fn schedule_for_input(&self, input: &str) -> Vec<EstimationRow> {
        match normalize_amount(input) {
            Ok(amount) => self.compute_schedule(Money::from(amount)),
            Err(_) => Vec::new(),
        }
    }

    /// get json representation of the full table
    pub fn schedule_json(&self, base_amount: Money) -> String {
        let rows = self.compute_schedule(base_amount);
        serde_json::to_string_pretty(&rows).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    fn compute_row(&self, base_amount: Money, months: u32) -> EstimationRow {
        let total = base_amount * months;
        let rate = self.config.rates.rate_for(months);

        // profit is floored first and payout taken by subtraction, so the
        // two always reconcile against the total exactly
        let total_floored = total.floor();
        let profit = (total * rate.as_decimal()).floor();
        let net_payout = total_floored - profit;

        let installment_12 = (total / dec!(12)).floor();
        // TODO: confirm with product whether this column should simply be
        // total / 10; the published sheet divides the twelve-month figure by
        // ten and re-annualizes, and that form is kept verbatim here
        let installment_10_adjusted = (total / dec!(12) / dec!(10) * dec!(12)).floor();

        EstimationRow {
            tenor_months: months,
            total_repayment: total_floored,
            discount_rate: rate,
            profit_amount: profit,
            net_payout,
            monthly_installment_12: installment_12,
            monthly_installment_10_adjusted: installment_10_adjusted,
        }
    }
}

impl Default for ScheduleCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row_for(base: i64, months: u32) -> EstimationRow {
        let calc = ScheduleCalculator::standard();
        calc.compute_schedule(Money::from_major(base))
            .into_iter()
            .find(|row| row.tenor_months == months)
            .expect("tenor not offered")
    }

    #[test]
    fn test_empty_for_zero_and_negative() {
        let calc = ScheduleCalculator::standard();
        assert!(calc.compute_schedule(Money::ZERO).is_empty());
        assert!(calc.compute_schedule(Money::from_major(-5)).is_empty());
    }

    #[test]
    fn test_empty_for_invalid_input() {
        let calc = ScheduleCalculator::standard();
        assert!(calc.schedule_for_input("").is_empty());
        assert!(calc.schedule_for_input("abc").is_empty());
        assert!(calc.schedule_for_input("12x").is_empty());
    }

    #[test]
    fn test_one_row_per_tenor_in_order() {
        let calc = ScheduleCalculator::standard();
        let rows = calc.compute_schedule(Money::from_major(1_000_000));
        let tenors: Vec<u32> = rows.iter().map(|r| r.tenor_months).collect();
        assert_eq!(tenors, vec![1, 6, 10, 12, 18, 22, 24]);
    }

    #[test]
    fn test_ten_million_over_twelve_months() {
        let row = row_for(10_000_000, 12);
        assert_eq!(row.total_repayment, Money::from_major(120_000_000));
        assert_eq!(row.discount_rate, Rate::from_decimal(dec!(0.23)));
        assert_eq!(row.profit_amount, Money::from_major(27_600_000));
        assert_eq!(row.net_payout, Money::from_major(92_400_000));
        assert_eq!(row.monthly_installment_12, Money::from_major(10_000_000));
        assert_eq!(
            row.monthly_installment_10_adjusted,
            Money::from_major(12_000_000)
        );
    }

    #[test]
    fn test_ten_million_over_twenty_four_months() {
        let row = row_for(10_000_000, 24);
        assert_eq!(row.total_repayment, Money::from_major(240_000_000));
        assert_eq!(row.discount_rate, Rate::from_decimal(dec!(0.46)));
        assert_eq!(row.profit_amount, Money::from_major(110_400_000));
        assert_eq!(row.net_payout, Money::from_major(129_600_000));
    }

    #[test]
    fn test_middle_tier_applies() {
        let row = row_for(10_000_000, 18);
        assert_eq!(row.discount_rate, Rate::from_decimal(dec!(0.345)));
        assert_eq!(row.profit_amount, Money::from_major(62_100_000));
        assert_eq!(row.net_payout, Money::from_major(117_900_000));
    }

    #[test]
    fn test_total_is_exact_product() {
        let calc = ScheduleCalculator::standard();
        for base in [1i64, 7, 999, 123_456, 10_000_000] {
            for row in calc.compute_schedule(Money::from_major(base)) {
                assert_eq!(
                    row.total_repayment,
                    Money::from_major(base) * row.tenor_months
                );
            }
        }
    }

    #[test]
    fn test_profit_and_payout_reconcile() {
        let calc = ScheduleCalculator::standard();
        for base in [1i64, 7, 333, 999_999, 10_000_001] {
            for row in calc.compute_schedule(Money::from_major(base)) {
                assert_eq!(
                    row.profit_amount + row.net_payout,
                    row.total_repayment,
                    "tenor {}",
                    row.tenor_months
                );
            }
        }
    }

    #[test]
    fn test_schedule_from_persian_input() {
        let calc = ScheduleCalculator::standard();
        let rows = calc.schedule_for_input("۱۰,۰۰۰,۰۰۰");
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3].total_repayment, Money::from_major(120_000_000));
    }

    #[test]
    fn test_custom_config() {
        let config = EstimationConfig::new(
            vec![3, 9],
            crate::config::RateSchedule::standard(),
        )
        .unwrap();
        let calc = ScheduleCalculator::new(config).unwrap();
        let rows = calc.compute_schedule(Money::from_major(100));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].total_repayment, Money::from_major(900));
    }
}
