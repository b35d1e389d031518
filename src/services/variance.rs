use crate::filters::sanitize;
use crate::models::{SeriesPoint, Variance};

/// Dollar and percent change of `current` against `baseline`.
///
/// The percent change is relative to the magnitude of the baseline, so a
/// move from -200 to -100 is +50%. A zero baseline yields no percentage.
pub fn variance(current: f64, baseline: f64) -> Variance {
    let current = sanitize(current);
    let baseline = sanitize(baseline);
    let dollar_delta = current - baseline;

    let percent_delta = if baseline == 0.0 {
        None
    } else {
        Some(dollar_delta / baseline.abs() * 100.0).filter(|p| p.is_finite())
    };

    Variance {
        dollar_delta: sanitize(dollar_delta),
        percent_delta,
    }
}

/// Change of each point from the one before it; the first point has none.
pub fn series_changes(points: &[SeriesPoint]) -> Vec<Option<f64>> {
    std::iter::once(None)
        .chain(
            points
                .windows(2)
                .map(|pair| Some(sanitize(pair[1].value) - sanitize(pair[0].value))),
        )
        .take(points.len())
        .collect()
}
