//! Vegetation-index algorithms
//!
//! - Index: scalar NDVI and band-grid NDVI
//! - Classify: four-category health classification
//! - Health: five-status assessment with recommendations

mod classify;
mod health;
mod indices;

pub use classify::{class_counts, classify, classify_grid, classify_with};
pub use health::{assess_health, HealthAssessment, HealthStatus, MODERATE_THRESHOLD};
pub use indices::{compute_index, ndvi_grid, normalized_difference};
