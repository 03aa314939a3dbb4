use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{EstimationError, Result};

/// one tier of the discount schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// inclusive upper bound in months, None only on the final open tier
    pub max_months: Option<u32>,
    pub rate: Rate,
}

impl RateTier {
    pub fn up_to(max_months: u32, rate: Rate) -> Self {
        Self {
            max_months: Some(max_months),
            rate,
        }
    }

    pub fn above(rate: Rate) -> Self {
        Self {
            max_months: None,
            rate,
        }
    }

    fn contains(&self, months: u32) -> bool {
        match self.max_months {
            Some(max) => months <= max,
            None => true,
        }
    }
}

/// tiered discount schedule over tenor length
///
/// tiers are contiguous and strictly increasing in both bound and rate, so
/// exactly one tier applies to any tenor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    tiers: Vec<RateTier>,
}

impl RateSchedule {
    pub fn new(tiers: Vec<RateTier>) -> Result<Self> {
        let schedule = Self { tiers };
        schedule.validate()?;
        Ok(schedule)
    }

    /// the product's standard schedule
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RateTier::up_to(12, Rate::from_decimal(dec!(0.23))),
                RateTier::up_to(18, Rate::from_decimal(dec!(0.345))),
                RateTier::above(Rate::from_decimal(dec!(0.46))),
            ],
        }
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// rate for a tenor; tiers are checked in ascending order and the final
    /// tier is open, so the first match is the only match
    pub fn rate_for(&self, months: u32) -> Rate {
        self.tiers
            .iter()
            .find(|tier| tier.contains(months))
            .map(|tier| tier.rate)
            .unwrap_or(Rate::ZERO)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| EstimationError::InvalidConfiguration {
            message: message.to_string(),
        };

        let Some((last, bounded)) = self.tiers.split_last() else {
            return Err(invalid("rate schedule has no tiers"));
        };
        if last.max_months.is_some() {
            return Err(invalid("final tier must be open-ended"));
        }

        let mut previous_max: Option<u32> = None;
        let mut previous_rate: Option<Rate> = None;
        for tier in bounded {
            let Some(max) = tier.max_months else {
                return Err(invalid("only the final tier may be open-ended"));
            };
            if max == 0 {
                return Err(invalid("tier bound must be at least one month"));
            }
            if previous_max.is_some_and(|p| max <= p) {
                return Err(invalid("tier bounds must be strictly increasing"));
            }
            previous_max = Some(max);

            if previous_rate.is_some_and(|p| tier.rate <= p) {
                return Err(invalid("tier rates must be strictly increasing"));
            }
            previous_rate = Some(tier.rate);
        }
        if previous_rate.is_some_and(|p| last.rate <= p) {
            return Err(invalid("tier rates must be strictly increasing"));
        }
        Ok(())
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// estimation configuration: the offered tenor set plus the rate schedule
///
/// an explicit value passed to the calculator, never process-global state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// tenor options in months, rendered in this order
    pub tenor_months: Vec<u32>,
    pub rates: RateSchedule,
}

impl EstimationConfig {
    pub fn new(tenor_months: Vec<u32>, rates: RateSchedule) -> Result<Self> {
        let config = Self {
            tenor_months,
            rates,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tenor_months.is_empty() {
            return Err(EstimationError::InvalidConfiguration {
                message: "no tenor options".to_string(),
            });
        }
        if self.tenor_months.iter().any(|&m| m == 0) {
            return Err(EstimationError::InvalidConfiguration {
                message: "tenor must be at least one month".to_string(),
            });
        }
        self.rates.validate()
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            tenor_months: vec![1, 6, 10, 12, 18, 22, 24],
            rates: RateSchedule::standard(),
        }
    }
}
