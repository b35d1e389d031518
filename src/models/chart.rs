use serde::{Deserialize, Serialize};

/// One wedge of a percentage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    #[serde(alias = "name")]
    pub label: String,
    pub amount: f64,
    /// Share of the report total, 0..=100.
    #[serde(alias = "pct")]
    pub percent_of_total: f64,
}

impl Slice {
    pub fn new(label: &str, amount: f64, percent_of_total: f64) -> Self {
        Self {
            label: label.to_string(),
            amount,
            percent_of_total,
        }
    }
}

/// A labelled value on a time axis. Callers supply points in axis order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// A pixel position inside a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
