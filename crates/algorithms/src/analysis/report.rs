//! Comprehensive trend report for one series

use serde::{Deserialize, Serialize};
use tracing::debug;
use fratlas_core::{Error, Result, Thresholds, TimeSeries};

use crate::change::{compare_pair, PairwiseChange};
use crate::imagery::{assess_health, HealthAssessment};
use crate::round_to;
use crate::statistics::{
    analyze_trend, describe, detect_anomalies, detect_change_points, seasonal_patterns, Anomaly,
    ChangePoint, SeasonalPatterns, SeriesStatistics, TrendAnalysis,
};
use crate::statistics::anomaly::ANOMALY_Z;

/// Everything known about a series' health and trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    /// Statistics with mean, spread and range rounded to 3 decimals
    pub statistics: SeriesStatistics,
    pub trend_analysis: TrendAnalysis,
    /// Health of the mean index, rounded to 3 decimals
    pub health_assessment: HealthAssessment,
    pub anomalies: Vec<Anomaly>,
    pub change_points: Vec<ChangePoint>,
    pub seasonal_patterns: Option<SeasonalPatterns>,
    /// Change between the last two samples
    pub latest_change: PairwiseChange,
}

/// Analyze a series of at least two samples.
pub fn analyze_series(series: &TimeSeries, thresholds: &Thresholds) -> Result<TrendReport> {
    let samples = series.samples();
    if samples.len() < 2 {
        return Err(Error::InsufficientData {
            required: 2,
            actual: samples.len(),
        });
    }

    let raw = describe(series)?;
    let values = series.indices();

    let trend_analysis = analyze_trend(&values).ok_or(Error::InsufficientData {
        required: 2,
        actual: values.len(),
    })?;
    let anomalies = detect_anomalies(&values, raw.mean, raw.std_dev, ANOMALY_Z);
    let change_points = detect_change_points(&values);

    let (prev, last) = (&samples[samples.len() - 2], &samples[samples.len() - 1]);
    let latest_change = compare_pair(
        prev.index(),
        last.index(),
        (last.date() - prev.date()).num_days(),
        thresholds,
    );

    debug!(
        samples = samples.len(),
        anomalies = anomalies.len(),
        change_points = change_points.len(),
        "series analyzed"
    );

    Ok(TrendReport {
        health_assessment: assess_health(round_to(raw.mean, 3), thresholds),
        statistics: SeriesStatistics {
            mean: round_to(raw.mean, 3),
            std_dev: round_to(raw.std_dev, 3),
            min: round_to(raw.min, 3),
            max: round_to(raw.max, 3),
            ..raw
        },
        trend_analysis,
        anomalies,
        change_points,
        seasonal_patterns: seasonal_patterns(series),
        latest_change,
    })
}
