//! # FRA Atlas Algorithms
//!
//! Vegetation-index analysis for FRA Atlas forest-rights claims.
//!
//! ## Available Algorithm Categories
//!
//! - **imagery**: NDVI from band values or band grids, classification, health assessment
//! - **timeseries**: seeded synthesis of degrading, seasonal index series
//! - **change**: fixed-baseline degradation events, pairwise change, alerts
//! - **statistics**: summary, trend, anomalies, change points, seasonal profile
//! - **analysis**: trend report and recommendations
//! - **export**: the JSON analysis bundle
//!
//! [`NdviCalculator`] bundles thresholds and parameters behind one handle;
//! every operation is also available as a free function.

mod maybe_rayon;

pub mod analysis;
pub mod calculator;
pub mod change;
pub mod config;
pub mod export;
pub mod imagery;
pub mod statistics;
pub mod timeseries;

pub use calculator::NdviCalculator;
pub use config::AnalysisConfig;

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analysis::{analyze_series, recommend, Recommendation, TrendReport};
    pub use crate::change::{
        compare_pair, deforestation_alert, detect_changes, threshold_alert, ChangeDetection,
        ChangeDetectionParams,
    };
    pub use crate::export::{build_bundle, export_analysis, AnalysisBundle, ExportOptions};
    pub use crate::imagery::{
        assess_health, classify, classify_grid, classify_with, compute_index, ndvi_grid,
        normalized_difference, HealthAssessment,
    };
    pub use crate::timeseries::{
        generate, ConstantSource, EntropySource, GeneratorParams, RandomSource, SeededSource,
        SeriesGeneration, SeriesGenerator,
    };
    pub use crate::{AnalysisConfig, NdviCalculator};
    pub use fratlas_colormap::color_for;
    pub use fratlas_core::prelude::*;
}
