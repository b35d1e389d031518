pub mod config;
pub mod error;
pub mod filters;
pub mod logging;
pub mod models;
pub mod services;
pub mod sort_utils;

pub use error::{ReportError, ReportResult};
pub use filters::{classify, format_amount, AmountClass, MoneyFormat};
pub use models::{FieldAccess, FieldValue, SeriesPoint, Slice, Variance};
pub use services::{build_line_chart, build_pie_slices, variance};
pub use sort_utils::{next_sort_state, sort_records, sort_records_by, SortDirection, SortState};

/// Library version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
