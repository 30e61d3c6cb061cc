//! Discrete vegetation-health categories

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::thresholds::Thresholds;

/// Health category derived purely from an index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Healthy,
    Moderate,
    Sparse,
    Bare,
}

impl Classification {
    /// All categories, healthiest first.
    pub const ALL: &[Classification] = &[Self::Healthy, Self::Moderate, Self::Sparse, Self::Bare];

    /// Classify `index` against the default boundaries.
    pub fn from_index(index: f64) -> Self {
        Self::with_thresholds(index, &Thresholds::default())
    }

    /// Classify `index` against explicit boundaries, high-to-low, each tier
    /// inclusive on its lower bound. NaN falls through to `Bare`.
    pub fn with_thresholds(index: f64, thresholds: &Thresholds) -> Self {
        if index >= thresholds.healthy {
            Self::Healthy
        } else if index >= thresholds.alert {
            Self::Moderate
        } else if index >= thresholds.critical {
            Self::Sparse
        } else {
            Self::Bare
        }
    }

    /// Long-form label used in dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy Vegetation",
            Self::Moderate => "Moderate Vegetation",
            Self::Sparse => "Sparse Vegetation",
            Self::Bare => "Bare Soil/Water",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
