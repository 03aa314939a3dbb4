/// serialize the estimation table to json
use facility_estimation::{Money, ScheduleCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = ScheduleCalculator::standard();

    // full table as pretty json
    println!("{}", calculator.schedule_json(Money::from_major(10_000_000)));

    // a single row round-trips through serde
    let rows = calculator.compute_schedule(Money::from_major(10_000_000));
    let encoded = rows[0].json();
    let decoded: facility_estimation::EstimationRow = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, rows[0]);

    Ok(())
}
