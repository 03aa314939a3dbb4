/// full estimation table from raw field input, as the console renders it
use facility_estimation::{
    format_money, sanitize_amount_input, words_for_input, CurrencyUnit, ScheduleCalculator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a value as typed: Persian digits mixed with commas
    let field_value = "۱۰,۰۰۰,۰۰۰";

    println!("input echo: {}", sanitize_amount_input(field_value));
    println!(
        "in words:   {}",
        words_for_input(field_value, CurrencyUnit::Toman)
    );
    println!();

    let calculator = ScheduleCalculator::standard();
    let unit = CurrencyUnit::Toman;

    println!("tenor | total | 12-month | 10-month | payout | profit");
    for row in calculator.schedule_for_input(field_value) {
        println!(
            "{:>5} | {} | {} | {} | {} | {}",
            row.tenor_months,
            format_money(row.total_repayment, unit),
            format_money(row.monthly_installment_12, unit),
            format_money(row.monthly_installment_10_adjusted, unit),
            format_money(row.net_payout, unit),
            format_money(row.profit_amount, unit),
        );
    }

    // nothing typed yet: the table is simply empty
    assert!(calculator.schedule_for_input("").is_empty());

    Ok(())
}
