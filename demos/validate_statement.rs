//! Bank statement validation example

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use reconciliation_core::utils::MemorySource;
use reconciliation_core::{Checkpoint, Movement, Reason, Reconciler};
use std::str::FromStr;

fn day(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Reconciliation Core - Statement Validation Example\n");

    // 1. A clean statement: movements plus the checkpoints bounding them
    println!("📋 Loading July statement...");
    let source = MemorySource::new();
    source.push_movement(Movement::new(
        1,
        day(7, 1),
        "SALARY ACME CORP".to_string(),
        dec("2500.00"),
    ));
    source.push_movement(Movement::new(
        2,
        day(7, 3),
        "RENT".to_string(),
        dec("-700.00"),
    ));
    source.push_movement(Movement::new(
        3,
        day(7, 10),
        "GROCERIES".to_string(),
        dec("-84.37"),
    ));
    source.push_checkpoint(Checkpoint::new(day(7, 1), dec("1000.00")));
    source.push_checkpoint(Checkpoint::new(day(7, 15), dec("2715.63")));

    let reconciler = Reconciler::new(source.clone());
    let report = reconciler.run().await?;
    println!("  ✅ Verdict: {}", report.message);

    // 2. The same statement after a buggy import: the rent shows up twice
    //    and a stray August movement slips in
    println!("\n💥 Re-importing with two defects...");
    source.push_movement(Movement::new(
        4,
        day(7, 3),
        "RENT".to_string(),
        dec("-700.00"),
    ));
    source.push_movement(Movement::new(
        5,
        day(8, 2),
        "GYM MEMBERSHIP".to_string(),
        dec("-29.99"),
    ));

    let report = reconciler.run().await?;
    println!("  Verdict: {}", report.message);

    for reason in report.reasons.as_deref().unwrap_or_default() {
        match reason {
            Reason::Duplicate { message, details } => {
                println!("  ❌ Movement {}: {}", details.movement_id, message);
            }
            Reason::OutOfBounds { message, details } => {
                println!("  ❌ Movement {}: {}", details.movement_id, message);
            }
            Reason::BalanceMismatch { message, details } => {
                println!(
                    "  ❌ Between {} and {}: expected €{}, calculated €{} ({})",
                    details.balance_start_date.date(),
                    details.balance_end_date.date(),
                    details.expected_final_balance,
                    details.calculated_final_balance,
                    message
                );
            }
            Reason::Unverifiable { message } => {
                println!("  ❌ {}", message);
            }
        }
    }

    // 3. The JSON a transport layer would return
    println!("\n📤 Response body:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
