//! Integration tests for money formatting and variance display.

mod common;

use ledgerview::filters::{format_percent_delta, format_whole_amount};
use ledgerview::models::VarianceTone;
use ledgerview::{classify, format_amount, variance, AmountClass, MoneyFormat};

/// Test that the minus sign appears exactly for negative amounts.
#[test]
fn test_sign_matches_value() {
    for amount in [-1_000_000.0, -12.5, -0.01, 0.0, 0.01, 12.5, 1_000_000.0] {
        let formatted = format_amount(amount);
        assert_eq!(
            formatted.starts_with('-'),
            amount < 0.0,
            "{} formatted as {}",
            amount,
            formatted
        );
        assert!(formatted.trim_start_matches('-').starts_with('$'));
    }
    assert_eq!(format_amount(-0.0), format_amount(0.0));
}

/// Test report totals as the views show them.
#[test]
fn test_report_totals() {
    assert_eq!(format_amount(1500.0), "$1,500.00");
    assert_eq!(format_amount(-65.0), "-$65.00");
    assert_eq!(format_amount(1234567.5), "$1,234,567.50");
    assert_eq!(format_whole_amount(-2499.5), "-$2,500");
}

/// Test the other currencies a household might track.
#[test]
fn test_other_currencies() {
    assert_eq!(MoneyFormat::new("GBP", "en-GB").format(-42.0), "-\u{00a3}42.00");
    assert_eq!(MoneyFormat::new("EUR", "fr-FR").format(1234.5), "\u{20ac}1.234,50");
    assert_eq!(MoneyFormat::new("XYZ", "en-US").format(1.0), "$1.00");
}

/// Test month-over-month spending comparison end to end.
#[test]
fn test_spending_comparison_row() {
    common::init();
    let v = variance(1380.0, 1200.0);

    assert_eq!(format_amount(v.dollar_delta), "$180.00");
    assert_eq!(format_percent_delta(v.percent_delta), "+15.0%");
    assert_eq!(v.class(), AmountClass::Positive);
    assert_eq!(
        VarianceTone::for_spending(v.dollar_delta),
        VarianceTone::Unfavorable
    );
}

/// Test a category with no spending last month.
#[test]
fn test_new_category_has_no_percent() {
    let v = variance(50.0, 0.0);
    assert_eq!(v.dollar_delta, 50.0);
    assert!(v.percent_delta.is_none());
    assert_eq!(format_percent_delta(v.percent_delta), "\u{2014}");
}

/// Test that classification is total.
#[test]
fn test_classify_is_total() {
    assert_eq!(classify(f64::NAN), AmountClass::Neutral);
    assert_eq!(classify(f64::INFINITY), AmountClass::Neutral);
    assert_eq!(classify(f64::MIN_POSITIVE), AmountClass::Positive);
    assert_eq!(classify(-f64::MIN_POSITIVE), AmountClass::Negative);
}
