//! Shared fixtures for integration tests.
//!
//! Report rows are built as JSON, the way they arrive from the report API.

#![allow(dead_code)]

use ledgerview::models::{SeriesPoint, Slice};
use serde_json::{json, Value};

/// Install the test subscriber once; later calls are no-ops.
pub fn init() {
    ledgerview::logging::init_tracing("ledgerview=debug");
}

/// Spending-by-category rows with duplicate amounts and a row missing `amount`.
pub fn category_rows() -> Vec<Value> {
    vec![
        json!({"name": "Rent", "amount": 1500.0, "pct": 70.1}),
        json!({"name": "Gas", "amount": 65.0, "pct": 3.0}),
        json!({"name": "groceries", "amount": "420.50", "pct": 19.7}),
        json!({"name": "Gas", "amount": 65.0, "pct": 3.0, "note": "second fill-up"}),
        json!({"name": "Uncategorized", "pct": 4.2}),
    ]
}

pub fn name_of(row: &Value) -> &str {
    row["name"].as_str().unwrap_or("")
}

/// Monthly net worth that dips below zero mid-year.
pub fn net_worth_series(months: usize) -> Vec<SeriesPoint> {
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    (0..months)
        .map(|i| {
            let label = format!("{} {}", MONTHS[i % 12], 2023 + i / 12);
            let value = (i as f64 - 4.0) * 1250.0;
            SeriesPoint::new(&label, value)
        })
        .collect()
}

pub fn income_slices() -> Vec<Slice> {
    vec![
        Slice::new("Salary", 5200.0, 65.0),
        Slice::new("Freelance", 1600.0, 20.0),
        Slice::new("Dividends", 800.0, 10.0),
        Slice::new("Interest", 400.0, 5.0),
    ]
}
