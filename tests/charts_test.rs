//! Integration tests for pie and line chart geometry.

mod common;

use common::{income_slices, net_worth_series};
use ledgerview::models::{SeriesPoint, Slice};
use ledgerview::services::breakdown::build_breakdown;
use ledgerview::services::line_chart::build_line_chart_with;
use ledgerview::services::pie::{build_pie_slices_with, PieConfig, PieShape};
use ledgerview::{build_line_chart, build_pie_slices, ReportError};

/// Test that a full breakdown sweeps the whole circle.
#[test]
fn test_pie_covers_full_circle() {
    common::init();
    let slices = income_slices();
    let arcs = build_pie_slices(&slices).expect("valid slices");

    assert_eq!(arcs.len(), slices.len());
    let total_span: f64 = arcs.iter().map(|a| a.span).sum();
    assert!((total_span - 360.0).abs() <= 0.36, "span was {}", total_span);
    assert!(arcs
        .iter()
        .all(|a| matches!(a.shape, PieShape::Arc { .. })));
}

/// Test that rounded shares adding up to 99.9 are drawn without correction.
#[test]
fn test_pie_tolerates_rounding_drift() {
    let slices = vec![
        Slice::new("A", 1.0, 33.3),
        Slice::new("B", 1.0, 33.3),
        Slice::new("C", 1.0, 33.3),
    ];
    let arcs = build_pie_slices(&slices).unwrap();
    let end = arcs.last().map(|a| a.start_angle + a.span).unwrap();
    assert!((end - 269.64).abs() < 1e-6);
}

/// Test that one income source renders as a circle, not a zero-length arc.
#[test]
fn test_single_source_pie_is_circle() {
    let arcs = build_pie_slices(&[Slice::new("Salary", 5200.0, 100.0)]).unwrap();
    assert!(matches!(arcs[0].shape, PieShape::Circle { radius, .. } if radius == 120.0));
}

/// Test that server-side breakdowns feed straight into the pie.
#[test]
fn test_breakdown_to_pie() {
    common::init();
    let rows = vec![
        ("Groceries", 320.0),
        ("Rent", 1200.0),
        ("Groceries", 80.0),
        ("Utilities", 100.0),
    ];
    let slices = build_breakdown(&rows);
    assert_eq!(slices[0].label, "Rent");

    let config = PieConfig {
        radius: 50.0,
        ..PieConfig::default()
    };
    let arcs = build_pie_slices_with(&slices, &config).unwrap();
    assert_eq!(arcs.len(), 3);
    assert!(matches!(arcs[0].shape, PieShape::Arc { large_arc: true, .. }));
    assert_eq!(arcs[1].color, "#16a34a");
}

/// Test that refunds (negative slices) are refused.
#[test]
fn test_negative_slice_is_an_error() {
    let slices = vec![Slice::new("Salary", 100.0, 110.0), Slice::new("Refund", -10.0, -10.0)];
    let err = build_pie_slices(&slices).unwrap_err();
    assert!(matches!(err, ReportError::InvalidSlice { .. }));
    assert!(err.to_string().contains("Refund"));
}

/// Test that two positive points still put zero on the axis.
#[test]
fn test_line_includes_zero() {
    let points = vec![SeriesPoint::new("Jan", 10.0), SeriesPoint::new("Feb", 25.0)];
    let chart = build_line_chart(&points, 590.0, 260.0);
    assert_eq!(chart.min_value, 0.0);
    assert_eq!(chart.max_value, 25.0);
    assert_eq!(chart.grid_lines.len(), 6);
    assert_eq!(chart.grid_lines[0].label, "$0");
}

/// Test a two-year net worth series: baseline drawn, labels thinned, last
/// month always labelled.
#[test]
fn test_net_worth_two_years() {
    common::init();
    let points = net_worth_series(25);
    let chart = build_line_chart(&points, 600.0, 300.0);

    assert_eq!(chart.points.len(), 25);
    assert!(chart.min_value < 0.0 && chart.max_value > 0.0);
    let baseline = chart.zero_baseline.expect("range straddles zero");
    assert!(baseline > 0.0 && baseline < 300.0);

    let indices: Vec<usize> = chart.x_labels.iter().map(|l| l.index).collect();
    assert_eq!(indices, vec![0, 3, 6, 9, 12, 15, 18, 21, 24]);
    assert_eq!(chart.x_labels[0].text, "Jan 23");
    assert_eq!(chart.x_labels.last().unwrap().text, "Jan 25");

    // Higher values sit higher on screen
    assert!(chart.points[24].y < chart.points[0].y);
}

/// Test that thinning keeps an off-step last month.
#[test]
fn test_last_label_off_step() {
    let chart = build_line_chart(&net_worth_series(14), 600.0, 300.0);
    let indices: Vec<usize> = chart.x_labels.iter().map(|l| l.index).collect();
    assert_eq!(indices.last(), Some(&13));
    assert!(indices.contains(&12));
}

/// Test a configured canvas with euro grid labels.
#[test]
fn test_configured_line_chart() {
    let config = ledgerview::config::Config::from_json(
        r#"{"money": {"currency": "EUR", "locale": "de-DE"}, "line": {"max_x_labels": 4}}"#,
    )
    .unwrap();
    let points: Vec<SeriesPoint> = (0..8)
        .map(|i| SeriesPoint::new(&format!("M{}", i), 1000.0 * i as f64))
        .collect();

    let chart = build_line_chart_with(&points, &config.line, &config.money).unwrap();

    assert_eq!(chart.grid_lines.last().unwrap().label, "\u{20ac}7.000");
    let indices: Vec<usize> = chart.x_labels.iter().map(|l| l.index).collect();
    assert_eq!(indices, vec![0, 2, 4, 6, 7]);
    assert_eq!(chart.points[0].x, config.line.pad_left);
}

/// Test that chart layouts serialize for the rendering layer.
#[test]
fn test_layouts_serialize() {
    let arcs = build_pie_slices(&income_slices()).unwrap();
    let json = serde_json::to_value(&arcs).unwrap();
    assert_eq!(json[0]["shape"]["kind"], "arc");
    assert_eq!(json[0]["label"], "Salary");

    let chart = build_line_chart(&net_worth_series(3), 100.0, 100.0);
    let json = serde_json::to_value(&chart).unwrap();
    assert!(json["zero_baseline"].is_null());
    assert_eq!(json["points"].as_array().map(|p| p.len()), Some(3));
}
