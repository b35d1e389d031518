pub mod breakdown;
pub mod line_chart;
pub mod pie;
pub mod variance;

pub use breakdown::build_breakdown;
pub use line_chart::{build_line_chart, build_line_chart_with, LineChartConfig, LineChartLayout};
pub use pie::{build_pie_slices, build_pie_slices_with, ArcDescriptor, PieConfig, PieShape};
pub use variance::{series_changes, variance};
