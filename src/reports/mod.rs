//! Analytics reports for kakeibo
//!
//! Pure read-side aggregations over the expense collection. Nothing in
//! this module mutates state or touches storage.

pub mod dashboard;
pub mod heatmap;
pub mod trends;

pub use dashboard::{BurnRate, DashboardSummary};
pub use heatmap::HeatmapWeek;
pub use trends::{CategorySummary, WeekBucket};
