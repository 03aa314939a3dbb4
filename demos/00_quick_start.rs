/// quick start - minimal example to get started
use facility_estimation::{CurrencyUnit, Money, ScheduleCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // standard tenors and discount tiers
    let calculator = ScheduleCalculator::standard();

    // estimate a 10,000,000 toman base amount
    let rows = calculator.compute_schedule(Money::from_major(10_000_000));

    for row in &rows {
        println!(
            "{} months: total {}, payout {}",
            row.tenor_months,
            facility_estimation::format_money(row.total_repayment, CurrencyUnit::Toman),
            facility_estimation::format_money(row.net_payout, CurrencyUnit::Toman),
        );
    }

    Ok(())
}
