//! Threshold and deforestation alerts

use serde::{Deserialize, Serialize};
use fratlas_core::{Severity, Thresholds, TimeSeries};

use crate::round_to;

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Deforestation,
    VegetationDegradation,
}

/// Severity of a single-reading alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    Medium,
}

/// Alert raised by a single reading crossing a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub confidence: f64,
    pub index_value: f64,
    pub threshold: f64,
}

/// Raise an alert when a single reading falls below the alert or critical
/// threshold.
pub fn threshold_alert(index: f64, thresholds: &Thresholds) -> Option<ThresholdAlert> {
    if index < thresholds.critical {
        Some(ThresholdAlert {
            kind: AlertKind::Deforestation,
            severity: AlertSeverity::Critical,
            confidence: 0.95,
            index_value: index,
            threshold: thresholds.critical,
        })
    } else if index < thresholds.alert {
        Some(ThresholdAlert {
            kind: AlertKind::VegetationDegradation,
            severity: AlertSeverity::Medium,
            confidence: 0.85,
            index_value: index,
            threshold: thresholds.alert,
        })
    } else {
        None
    }
}

/// Whole-series deforestation alert comparing the latest reading to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeforestationAlert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub baseline: f64,
    pub current: f64,
    /// Drop from baseline in percent, rounded to 1 decimal
    pub drop_percent: f64,
    pub confidence: f64,
}

/// Fires only when the latest reading is below the alert threshold;
/// HIGH when it has lost more than half of the baseline, else MEDIUM.
pub fn deforestation_alert(series: &TimeSeries, thresholds: &Thresholds) -> Option<DeforestationAlert> {
    if series.len() < 2 {
        return None;
    }
    let baseline = series.first()?.index();
    let current = series.last()?.index();

    if current >= thresholds.alert {
        return None;
    }

    let drop = (baseline - current) / baseline * 100.0;

    Some(DeforestationAlert {
        kind: AlertKind::Deforestation,
        severity: if drop > 50.0 { Severity::High } else { Severity::Medium },
        baseline,
        current,
        drop_percent: round_to(drop, 1),
        confidence: 0.85,
    })
}
