//! Statistical analysis of index series
//!
//! - **summary**: mean, spread and range of a series
//! - **trend**: least-squares trend direction and strength
//! - **anomaly**: z-score outliers and moving-window change points
//! - **seasonal**: per-month profile, peak and low season

pub mod anomaly;
pub mod seasonal;
pub mod summary;
pub mod trend;

pub use anomaly::{
    detect_anomalies, detect_change_points, Anomaly, AnomalyDirection, AnomalySeverity,
    ChangePoint, PointChange,
};
pub use seasonal::{seasonal_patterns, MonthlyStats, SeasonalPatterns};
pub use summary::{describe, index_range, mean, std_dev, SeriesStatistics};
pub use trend::{analyze_trend, linear_fit, LinearFit, TrendAnalysis, TrendDirection, TrendStrength};
