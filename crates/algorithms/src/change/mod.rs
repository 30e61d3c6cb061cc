//! Change detection
//!
//! - Detection: fixed-baseline degradation events over a series
//! - Pairwise: change between two measurements
//! - Alerts: threshold and whole-series deforestation alerts

mod alerts;
mod detection;
mod pairwise;

pub use alerts::{
    deforestation_alert, threshold_alert, AlertKind, AlertSeverity, DeforestationAlert, ThresholdAlert,
};
pub use detection::{detect_changes, ChangeDetection, ChangeDetectionParams};
pub use pairwise::{
    compare_pair, AlertLevel, Direction, Magnitude, PairwiseChange, Significance,
};
