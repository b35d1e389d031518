//! Pie chart geometry for percentage breakdowns.
//!
//! Slices are laid out clockwise starting at 12 o'clock. Colors come from a
//! fixed palette by slice position, so reordering the input recolors it.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::models::{Point, Slice};

pub const DEFAULT_PALETTE: [&str; 10] = [
    "#2563eb", "#16a34a", "#dc2626", "#f59e0b", "#8b5cf6", "#06b6d4", "#ec4899", "#84cc16",
    "#f97316", "#6366f1",
];

/// Angle of the first slice's leading edge, in degrees (12 o'clock).
pub const START_ANGLE_DEG: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub palette: Vec<String>,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            center_x: 150.0,
            center_y: 150.0,
            radius: 120.0,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl PieConfig {
    pub fn validate(&self) -> ReportResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ReportError::InvalidDimensions(format!(
                "pie radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(ReportError::InvalidDimensions(
                "pie center must be finite".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ReportError::Config("pie palette is empty".into()));
        }
        Ok(())
    }

    fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    fn point_at(&self, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(
            self.center_x + self.radius * rad.cos(),
            self.center_y + self.radius * rad.sin(),
        )
    }
}

/// Drawable primitive for one slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PieShape {
    /// One slice covers the whole pie; an arc from a point back to itself
    /// would render as nothing.
    Circle { center: Point, radius: f64 },
    Arc {
        center: Point,
        radius: f64,
        start: Point,
        end: Point,
        large_arc: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    pub label: String,
    pub amount: f64,
    pub percent_of_total: f64,
    /// Degrees, clockwise from 3 o'clock.
    pub start_angle: f64,
    pub span: f64,
    pub color_index: usize,
    pub color: String,
    pub shape: PieShape,
}

impl ArcDescriptor {
    /// SVG path data for the wedge.
    pub fn path_data(&self) -> String {
        match &self.shape {
            PieShape::Circle { center, radius } => format!(
                "M{},{} a{r},{r} 0 1,0 {d},0 a{r},{r} 0 1,0 -{d},0 Z",
                center.x - radius,
                center.y,
                r = radius,
                d = radius * 2.0
            ),
            PieShape::Arc {
                center,
                radius,
                start,
                end,
                large_arc,
            } => format!(
                "M{},{} L{},{} A{r},{r} 0 {},1 {},{} Z",
                center.x,
                center.y,
                start.x,
                start.y,
                u8::from(*large_arc),
                end.x,
                end.y,
                r = radius
            ),
        }
    }
}

/// Lay out `slices` on the default 300x300 canvas.
pub fn build_pie_slices(slices: &[Slice]) -> ReportResult<Vec<ArcDescriptor>> {
    build_pie_slices_with(slices, &PieConfig::default())
}

/// Lay out `slices` in input order.
///
/// Negative or non-finite amounts and percentages are rejected rather than
/// drawn as malformed arcs. Angle drift across many slices is not corrected.
pub fn build_pie_slices_with(
    slices: &[Slice],
    config: &PieConfig,
) -> ReportResult<Vec<ArcDescriptor>> {
    config.validate()?;
    for slice in slices {
        validate_slice(slice)?;
    }

    let single = slices.len() == 1;
    let mut start_angle = START_ANGLE_DEG;
    let mut arcs = Vec::with_capacity(slices.len());

    for (i, slice) in slices.iter().enumerate() {
        let span = slice.percent_of_total / 100.0 * 360.0;
        let color_index = i % config.palette.len();

        let shape = if single || span >= 360.0 {
            PieShape::Circle {
                center: config.center(),
                radius: config.radius,
            }
        } else {
            PieShape::Arc {
                center: config.center(),
                radius: config.radius,
                start: config.point_at(start_angle),
                end: config.point_at(start_angle + span),
                large_arc: span > 180.0,
            }
        };

        arcs.push(ArcDescriptor {
            label: slice.label.clone(),
            amount: slice.amount,
            percent_of_total: slice.percent_of_total,
            start_angle,
            span,
            color_index,
            color: config.palette[color_index].clone(),
            shape,
        });

        start_angle += span;
    }

    tracing::debug!(
        "Built pie with {} slices covering {:.2} degrees",
        arcs.len(),
        start_angle - START_ANGLE_DEG
    );

    Ok(arcs)
}

fn validate_slice(slice: &Slice) -> ReportResult<()> {
    if !slice.amount.is_finite() || !slice.percent_of_total.is_finite() {
        return Err(ReportError::invalid_slice(
            &slice.label,
            "amount and percentage must be finite",
        ));
    }
    if slice.amount < 0.0 || slice.percent_of_total < 0.0 {
        return Err(ReportError::invalid_slice(
            &slice.label,
            format!(
                "negative values cannot be drawn (amount {}, {}%)",
                slice.amount, slice.percent_of_total
            ),
        ));
    }
    Ok(())
}
