//! Vegetation health assessment
//!
//! Finer-grained than [`Classification`](fratlas_core::Classification):
//! five statuses with a score and a field recommendation.

use serde::{Deserialize, Serialize};
use fratlas_core::Thresholds;

use crate::round_to;

/// Boundary between "moderate" and "degraded" health.
pub const MODERATE_THRESHOLD: f64 = 0.4;

/// Health status, healthiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Moderate,
    Degraded,
    Critical,
    SeverelyDegraded,
}

impl HealthStatus {
    /// Score on a 0-100 scale.
    pub fn score(&self) -> u8 {
        match self {
            Self::Healthy => 100,
            Self::Moderate => 70,
            Self::Degraded => 40,
            Self::Critical => 20,
            Self::SeverelyDegraded => 5,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Healthy => "Continue monitoring. Vegetation is in excellent condition.",
            Self::Moderate => {
                "Monitor closely. Vegetation health is moderate, watch for declining trends."
            }
            Self::Degraded => {
                "Alert: Vegetation is degraded. Investigate potential causes and implement conservation measures."
            }
            Self::Critical => {
                "Critical: Severe vegetation loss detected. Immediate intervention required."
            }
            Self::SeverelyDegraded => {
                "Emergency: Extreme vegetation loss. Urgent conservation action needed."
            }
        }
    }

    /// Critical and severely degraded land needs immediate field action.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical | Self::SeverelyDegraded)
    }
}

/// Result of [`assess_health`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    pub status: HealthStatus,
    pub health_score: u8,
    /// Index rounded to 3 decimals
    pub index_value: f64,
    pub recommendation: String,
    pub thresholds: Thresholds,
}

/// Assess vegetation health for an index value.
///
/// Evaluated high-to-low: `≥ healthy`, `≥ 0.4`, `≥ alert`, `≥ critical`, else
/// severely degraded.
pub fn assess_health(index: f64, thresholds: &Thresholds) -> HealthAssessment {
    let status = if index >= thresholds.healthy {
        HealthStatus::Healthy
    } else if index >= MODERATE_THRESHOLD {
        HealthStatus::Moderate
    } else if index >= thresholds.alert {
        HealthStatus::Degraded
    } else if index >= thresholds.critical {
        HealthStatus::Critical
    } else {
        HealthStatus::SeverelyDegraded
    };

    HealthAssessment {
        status,
        health_score: status.score(),
        index_value: round_to(index, 3),
        recommendation: status.recommendation().to_string(),
        thresholds: *thresholds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tiers() {
        let t = Thresholds::default();
        let cases = [
            (0.6, HealthStatus::Healthy),
            (0.45, HealthStatus::Moderate),
            (0.4, HealthStatus::Moderate),
            (0.35, HealthStatus::Degraded),
            (0.3, HealthStatus::Degraded),
            (0.2, HealthStatus::Critical),
            (0.05, HealthStatus::SeverelyDegraded),
        ];
        for (index, expected) in cases {
            assert_eq!(assess_health(index, &t).status, expected, "index {}", index);
        }
    }

    #[test]
    fn carries_score_and_rounded_value() {
        let a = assess_health(0.123456, &Thresholds::default());
        assert_eq!(a.health_score, 20);
        assert_eq!(a.index_value, 0.123);
        assert!(a.recommendation.starts_with("Critical"));
        assert!(a.status.is_critical());
    }

    #[test]
    fn serializes_snake_case_status() {
        let a = assess_health(0.0, &Thresholds::default());
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["status"], "severely_degraded");
        assert_eq!(v["healthScore"], 5);
    }
}
