//! Time-series line chart layout: axis scaling, grid lines, zero baseline and
//! x-axis label thinning.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::filters::{sanitize, MoneyFormat};
use crate::models::SeriesPoint;

pub const DEFAULT_MAX_X_LABELS: usize = 12;
pub const DEFAULT_GRID_DIVISIONS: usize = 5;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Canvas and axis settings for line charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
    pub max_x_labels: usize,
    pub grid_divisions: usize,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 350.0,
            pad_left: 80.0,
            pad_right: 30.0,
            pad_top: 30.0,
            pad_bottom: 60.0,
            max_x_labels: DEFAULT_MAX_X_LABELS,
            grid_divisions: DEFAULT_GRID_DIVISIONS,
        }
    }
}

impl LineChartConfig {
    pub fn plot_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.pad_top - self.pad_bottom
    }

    pub fn validate(&self) -> ReportResult<()> {
        let pads = [self.pad_left, self.pad_right, self.pad_top, self.pad_bottom];
        if pads.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(ReportError::InvalidDimensions(
                "chart padding must be finite and non-negative".into(),
            ));
        }
        let (w, h) = (self.plot_width(), self.plot_height());
        if !(w.is_finite() && w > 0.0 && h.is_finite() && h > 0.0) {
            return Err(ReportError::InvalidDimensions(format!(
                "plot area must be positive, got {}x{}",
                w, h
            )));
        }
        if self.max_x_labels == 0 {
            return Err(ReportError::Config("max_x_labels must be at least 1".into()));
        }
        if self.grid_divisions == 0 {
            return Err(ReportError::Config(
                "grid_divisions must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub index: usize,
    pub x: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartLayout {
    pub min_value: f64,
    pub max_value: f64,
    pub points: Vec<PlottedPoint>,
    pub grid_lines: Vec<GridLine>,
    /// Y coordinate of the zero line, present only when the range straddles zero.
    pub zero_baseline: Option<f64>,
    pub x_labels: Vec<AxisLabel>,
}

impl LineChartLayout {
    /// Point list in SVG polyline form, e.g. `"0,10 50,20"`.
    pub fn polyline_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lay out `points` in a plot area of the given size, with its origin at the
/// top-left corner of the plot.
pub fn build_line_chart(
    points: &[SeriesPoint],
    plot_width: f64,
    plot_height: f64,
) -> LineChartLayout {
    let frame = Frame {
        left: 0.0,
        top: 0.0,
        width: non_negative(plot_width),
        height: non_negative(plot_height),
        max_labels: DEFAULT_MAX_X_LABELS,
        grid_divisions: DEFAULT_GRID_DIVISIONS,
    };
    layout(points, &frame, &MoneyFormat::default())
}

/// Lay out `points` on a full canvas, offsetting coordinates by the padding.
pub fn build_line_chart_with(
    points: &[SeriesPoint],
    config: &LineChartConfig,
    money: &MoneyFormat,
) -> ReportResult<LineChartLayout> {
    config.validate()?;
    let frame = Frame {
        left: config.pad_left,
        top: config.pad_top,
        width: config.plot_width(),
        height: config.plot_height(),
        max_labels: config.max_x_labels,
        grid_divisions: config.grid_divisions,
    };
    Ok(layout(points, &frame, money))
}

struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    max_labels: usize,
    grid_divisions: usize,
}

fn layout(points: &[SeriesPoint], frame: &Frame, money: &MoneyFormat) -> LineChartLayout {
    if points.is_empty() {
        return LineChartLayout::default();
    }

    if points.iter().any(|p| !p.value.is_finite()) {
        tracing::warn!("Line chart input contains non-finite values; plotting them as zero");
    }
    let values: Vec<f64> = points.iter().map(|p| sanitize(p.value)).collect();

    let min_value = values.iter().copied().fold(0.0_f64, f64::min);
    let max_value = values.iter().copied().fold(0.0_f64, f64::max);
    let range = if max_value - min_value == 0.0 {
        1.0
    } else {
        max_value - min_value
    };

    let n = points.len();
    let x_pos = |i: usize| {
        if n == 1 {
            frame.left + frame.width / 2.0
        } else {
            frame.left + (i as f64 / (n - 1) as f64) * frame.width
        }
    };
    let y_pos = |v: f64| frame.top + frame.height - ((v - min_value) / range) * frame.height;

    let plotted = points
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (p, &v))| PlottedPoint {
            label: p.label.clone(),
            value: v,
            x: x_pos(i),
            y: y_pos(v),
        })
        .collect();

    let divisions = frame.grid_divisions.max(1);
    let grid_lines = (0..=divisions)
        .map(|i| {
            let value = min_value + range * i as f64 / divisions as f64;
            GridLine {
                value,
                y: y_pos(value),
                label: money.format_whole(value),
            }
        })
        .collect();

    let zero_baseline = (min_value < 0.0 && max_value > 0.0).then(|| y_pos(0.0));

    let x_labels = label_indices(n, frame.max_labels)
        .into_iter()
        .map(|i| AxisLabel {
            index: i,
            x: x_pos(i),
            text: short_month_label(&points[i].label),
        })
        .collect();

    tracing::debug!(
        "Built line chart with {} points, range {}..{}",
        n,
        min_value,
        max_value
    );

    LineChartLayout {
        min_value,
        max_value,
        points: plotted,
        grid_lines,
        zero_baseline,
        x_labels,
    }
}

/// Indices of points that get an x-axis label. Every point is labelled up to
/// `max_labels`; past that every `ceil(n / max_labels)`-th point is, and the
/// last point always is.
pub fn label_indices(n: usize, max_labels: usize) -> Vec<usize> {
    let max_labels = max_labels.max(1);
    if n <= max_labels {
        return (0..n).collect();
    }

    let step = n.div_ceil(max_labels);
    (0..n).filter(|&i| i % step == 0 || i == n - 1).collect()
}

/// Shorten a `"January 2024"` style label to `"Jan 24"`. Labels that are not
/// a month name followed by a four-digit year are returned unchanged.
pub fn short_month_label(label: &str) -> String {
    let mut parts = label.split_whitespace();
    let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
        return label.to_string();
    };

    let is_year = year.len() == 4 && year.chars().all(|c| c.is_ascii_digit());
    let abbreviation = MONTH_ABBREVIATIONS.iter().find(|abbr| {
        month.len() >= 3
            && month.is_char_boundary(3)
            && month[..3].eq_ignore_ascii_case(abbr)
    });

    match abbreviation {
        Some(abbr) if is_year => format!("{} {}", abbr, &year[2..]),
        _ => label.to_string(),
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
