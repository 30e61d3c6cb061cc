//! Series-level analysis: trend report and recommendations

mod recommendation;
mod report;

pub use recommendation::{recommend, MonitoringFrequency, Priority, Recommendation, Stakeholder};
pub use report::{analyze_series, TrendReport};
