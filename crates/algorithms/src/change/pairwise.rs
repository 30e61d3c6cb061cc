//! Change between two individual measurements

use serde::{Deserialize, Serialize};
use fratlas_core::Thresholds;

use crate::imagery::{assess_health, HealthAssessment};
use crate::round_to;

/// How large the change is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    Stable,
    GradualChange,
    RapidChange,
}

/// Which way the index moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Improvement,
    Degradation,
    Stable,
}

impl Direction {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Improvement => "Vegetation health is improving",
            Self::Degradation => "Vegetation health is declining",
            Self::Stable => "Vegetation health is stable",
        }
    }
}

/// Statistical significance of the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Low,
    Moderate,
    High,
}

/// Alert level raised by a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    None,
    Low,
    Medium,
    High,
}

/// Result of [`compare_pair`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseChange {
    /// `after - before`, rounded to 3 decimals
    pub change_value: f64,
    /// Change per day, rounded to 6 decimals
    pub change_rate_per_day: f64,
    pub change_type: Magnitude,
    pub direction: Direction,
    pub significance: Significance,
    pub trend_description: String,
    pub alert_level: AlertLevel,
    pub time_period_days: i64,
    pub before_analysis: HealthAssessment,
    pub after_analysis: HealthAssessment,
}

/// Compare two measurements taken `days` apart.
///
/// - `|change| < 0.05` stable, `< 0.15` gradual, else rapid
/// - alert HIGH when the drop exceeds 0.1 and lands below the alert
///   threshold, MEDIUM below -0.05, LOW below -0.02
pub fn compare_pair(before: f64, after: f64, days: i64, thresholds: &Thresholds) -> PairwiseChange {
    let change = after - before;
    let rate = if days > 0 { change / days as f64 } else { 0.0 };

    let (change_type, significance) = if change.abs() < 0.05 {
        (Magnitude::Stable, Significance::Low)
    } else if change.abs() < 0.15 {
        (Magnitude::GradualChange, Significance::Moderate)
    } else {
        (Magnitude::RapidChange, Significance::High)
    };

    let direction = if change > 0.0 {
        Direction::Improvement
    } else if change < 0.0 {
        Direction::Degradation
    } else {
        Direction::Stable
    };

    let alert_level = if change < -0.1 && after < thresholds.alert {
        AlertLevel::High
    } else if change < -0.05 {
        AlertLevel::Medium
    } else if change < -0.02 {
        AlertLevel::Low
    } else {
        AlertLevel::None
    };

    PairwiseChange {
        change_value: round_to(change, 3),
        change_rate_per_day: round_to(rate, 6),
        change_type,
        direction,
        significance,
        trend_description: direction.description().to_string(),
        alert_level,
        time_period_days: days,
        before_analysis: assess_health(before, thresholds),
        after_analysis: assess_health(after, thresholds),
    }
}
