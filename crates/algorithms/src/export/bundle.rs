//! Serializable analysis bundle
//!
//! Packages a series, its detected changes and summary statistics into the
//! JSON document consumed by the map overlay and the dashboard table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use fratlas_core::io::to_json_bytes;
use fratlas_core::{ChangeEvent, Classification, Error, Result, Thresholds, TimeSeries};

use crate::statistics::index_range;

pub const ANALYSIS_TYPE: &str = "NDVI_Trend_Analysis";
pub const BUNDLE_VERSION: &str = "1.0";
pub const BUNDLE_SOURCE: &str = "FRA_Atlas_MVP";
pub const DEFAULT_FILENAME: &str = "ndvi_analysis.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    pub analysis_type: String,
    pub version: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexRange {
    pub min: f64,
    pub max: f64,
    /// First sample's index
    pub baseline: f64,
    /// Last sample's index
    pub current: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_data_points: usize,
    pub date_range: DateRange,
    pub index_range: IndexRange,
    pub alerts_generated: usize,
    pub health_status: Classification,
}

/// The complete, self-describing result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBundle {
    pub metadata: Metadata,
    pub summary: Summary,
    pub time_series: TimeSeries,
    pub detected_changes: Vec<ChangeEvent>,
    pub thresholds: Thresholds,
}

impl AnalysisBundle {
    /// Pretty-printed JSON bytes of the bundle.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        to_json_bytes(self)
    }
}

/// Options for [`export_analysis`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Produce a downloadable JSON payload alongside the bundle
    pub download: bool,
    /// Suggested file name for the payload
    pub filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            download: false,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// A serialized bundle ready to be saved by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Output of [`export_analysis`].
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub bundle: AnalysisBundle,
    pub download: Option<Download>,
}

/// Build a bundle stamped with the current time.
///
/// Fails with `Error::InsufficientData` on an empty series.
pub fn build_bundle(
    series: &TimeSeries,
    changes: &[ChangeEvent],
    thresholds: &Thresholds,
) -> Result<AnalysisBundle> {
    build_bundle_at(series, changes, thresholds, Utc::now())
}

/// Build a bundle with an explicit generation timestamp.
pub fn build_bundle_at(
    series: &TimeSeries,
    changes: &[ChangeEvent],
    thresholds: &Thresholds,
    generated_at: DateTime<Utc>,
) -> Result<AnalysisBundle> {
    let insufficient = || Error::InsufficientData {
        required: 1,
        actual: series.len(),
    };
    let first = series.first().ok_or_else(insufficient)?;
    let last = series.last().ok_or_else(insufficient)?;
    let (min, max) = index_range(series).ok_or_else(insufficient)?;

    let summary = Summary {
        total_data_points: series.len(),
        date_range: DateRange {
            start: first.date(),
            end: last.date(),
        },
        index_range: IndexRange {
            min,
            max,
            baseline: first.index(),
            current: last.index(),
        },
        alerts_generated: changes.len(),
        health_status: Classification::with_thresholds(last.index(), thresholds),
    };

    debug!(
        samples = summary.total_data_points,
        alerts = summary.alerts_generated,
        health = ?summary.health_status,
        "bundle built"
    );

    Ok(AnalysisBundle {
        metadata: Metadata {
            generated_at,
            analysis_type: ANALYSIS_TYPE.to_string(),
            version: BUNDLE_VERSION.to_string(),
            source: BUNDLE_SOURCE.to_string(),
        },
        summary,
        time_series: series.clone(),
        detected_changes: changes.to_vec(),
        thresholds: *thresholds,
    })
}

/// Build a bundle and, when `options.download` is set, serialize it to a
/// JSON payload for the caller to save.
pub fn export_analysis(
    series: &TimeSeries,
    changes: &[ChangeEvent],
    thresholds: &Thresholds,
    options: &ExportOptions,
) -> Result<Export> {
    let bundle = build_bundle(series, changes, thresholds)?;
    let download = if options.download {
        Some(Download {
            filename: options.filename.clone(),
            bytes: bundle.to_json_bytes()?,
        })
    } else {
        None
    };
    Ok(Export { bundle, download })
}
