//! Validate a JSON statement read from standard input
//!
//! Usage: cargo run --example validate_json < statement.json

use reconciliation_core::{ReconciliationEngine, ValidationRequest};
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;

    let request: ValidationRequest = serde_json::from_str(&body)?;
    let report = ReconciliationEngine::new().validate_request(&request);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
