pub mod chart;
pub mod record;
pub mod variance;

pub use chart::{Point, SeriesPoint, Slice};
pub use record::{FieldAccess, FieldValue};
pub use variance::{Variance, VarianceTone};
