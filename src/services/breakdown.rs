use std::collections::HashMap;

use crate::filters::sanitize;
use crate::models::Slice;

/// Group `(label, amount)` rows into pie slices with their share of the total.
///
/// Shares are rounded to one decimal and are all zero when the total is not
/// positive. Slices come back largest first, ties broken by label.
pub fn build_breakdown<S: AsRef<str>>(items: &[(S, f64)]) -> Vec<Slice> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for (label, amount) in items {
        *totals.entry(label.as_ref()).or_insert(0.0) += sanitize(*amount);
    }

    let total: f64 = totals.values().sum();

    let mut result: Vec<Slice> = totals
        .into_iter()
        .map(|(label, amount)| {
            let pct = if total > 0.0 {
                round_to_tenth(amount / total * 100.0)
            } else {
                0.0
            };
            Slice::new(label, amount, pct)
        })
        .collect();

    result.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.label.cmp(&b.label))
    });

    tracing::debug!(
        "Grouped {} rows into {} slices totalling {}",
        items.len(),
        result.len(),
        total
    );

    result
}

fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
