//! Detected degradation events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of change. Only degradation is detected today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Degradation,
}

/// Severity tier of a degradation event, from its percentage drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// `> 50%` is HIGH, `> 25%` is MEDIUM, anything else LOW.
    pub fn from_percent(percent: f64) -> Self {
        if percent > 50.0 {
            Self::High
        } else if percent > 25.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// A single degradation event relative to the series baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub date: NaiveDate,
    pub change_type: ChangeType,
    pub severity: Severity,
    /// `baseline - current`, rounded to 3 decimals
    pub absolute_change: f64,
    /// Drop relative to the baseline in percent, rounded to 1 decimal
    pub percent_change: f64,
    /// Index of the sample immediately before this one
    pub previous_index: f64,
    pub current_index: f64,
}
