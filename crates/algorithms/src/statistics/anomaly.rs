//! Outliers and change points

use serde::{Deserialize, Serialize};

use super::summary::mean;
use crate::round_to;

/// Default z-score above which a reading is anomalous.
pub const ANOMALY_Z: f64 = 2.0;
/// z-score above which an anomaly is extreme.
pub const EXTREME_Z: f64 = 3.0;
/// Minimum shift in window means for a change point.
pub const CHANGE_POINT_MAGNITUDE: f64 = 0.1;
const MAX_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyDirection {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalySeverity {
    Moderate,
    Extreme,
}

/// A reading far from the series mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    /// Position in the series
    pub position: usize,
    pub index_value: f64,
    pub z_score: f64,
    pub anomaly_type: AnomalyDirection,
    pub severity: AnomalySeverity,
}

/// Flag readings whose population z-score exceeds `threshold`.
///
/// A zero standard deviation yields no anomalies.
pub fn detect_anomalies(values: &[f64], mean: f64, std_dev: f64, threshold: f64) -> Vec<Anomaly> {
    if std_dev <= 0.0 {
        return Vec::new();
    }
    values
        .iter()
        .enumerate()
        .filter_map(|(position, &v)| {
            let z = (v - mean).abs() / std_dev;
            if z <= threshold {
                return None;
            }
            Some(Anomaly {
                position,
                index_value: round_to(v, 3),
                z_score: round_to(z, 2),
                anomaly_type: if v > mean {
                    AnomalyDirection::High
                } else {
                    AnomalyDirection::Low
                },
                severity: if z > EXTREME_Z {
                    AnomalySeverity::Extreme
                } else {
                    AnomalySeverity::Moderate
                },
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointChange {
    Increase,
    Decrease,
}

/// A position where the local mean shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePoint {
    pub position: usize,
    pub change_magnitude: f64,
    pub change_type: PointChange,
    pub before_mean: f64,
    pub after_mean: f64,
}

/// Moving-window change points.
///
/// With `w = min(5, n / 3)`, every position `i` in `[w, n - w)` compares the
/// mean of the `w` readings before it with the `w` readings from it onward.
/// Shifts above 0.1 are reported. Fewer than three readings give none.
pub fn detect_change_points(values: &[f64]) -> Vec<ChangePoint> {
    let n = values.len();
    if n < 3 {
        return Vec::new();
    }
    let w = MAX_WINDOW.min(n / 3);

    let mut points = Vec::new();
    for i in w..(n - w) {
        let (Some(before), Some(after)) = (mean(&values[i - w..i]), mean(&values[i..i + w])) else {
            continue;
        };
        let magnitude = (after - before).abs();
        if magnitude > CHANGE_POINT_MAGNITUDE {
            points.push(ChangePoint {
                position: i,
                change_magnitude: round_to(magnitude, 3),
                change_type: if after > before {
                    PointChange::Increase
                } else {
                    PointChange::Decrease
                },
                before_mean: round_to(before, 3),
                after_mean: round_to(after, 3),
            });
        }
    }
    points
}
