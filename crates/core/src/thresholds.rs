//! Vegetation-index threshold configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lower bound of the "healthy" tier.
pub const HEALTHY_THRESHOLD: f64 = 0.6;
/// Lower bound of the "moderate" tier; below it vegetation needs attention.
pub const ALERT_THRESHOLD: f64 = 0.3;
/// Lower bound of the "sparse" tier; below it the ground is bare soil or water.
pub const CRITICAL_THRESHOLD: f64 = 0.1;

/// Classification boundaries, evaluated high-to-low and inclusive on the
/// lower bound of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub healthy: f64,
    pub alert: f64,
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            healthy: HEALTHY_THRESHOLD,
            alert: ALERT_THRESHOLD,
            critical: CRITICAL_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Build a threshold set, rejecting non-finite or misordered boundaries.
    pub fn new(healthy: f64, alert: f64, critical: f64) -> Result<Self> {
        let t = Self {
            healthy,
            alert,
            critical,
        };
        t.validate()?;
        Ok(t)
    }

    /// Boundaries must be finite and strictly ordered `critical < alert < healthy`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("healthy", self.healthy),
            ("alert", self.alert),
            ("critical", self.critical),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter {
                    name,
                    value: value.to_string(),
                    reason: "must be finite".into(),
                });
            }
        }
        if !(self.critical < self.alert && self.alert < self.healthy) {
            return Err(Error::InvalidParameter {
                name: "thresholds",
                value: format!(
                    "critical={}, alert={}, healthy={}",
                    self.critical, self.alert, self.healthy
                ),
                reason: "must satisfy critical < alert < healthy".into(),
            });
        }
        Ok(())
    }
}
