//! Calendar-month vegetation profile

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use fratlas_core::TimeSeries;

use super::summary::{mean, std_dev};
use crate::round_to;

/// Fewest samples for which a seasonal profile is meaningful.
pub const MIN_SEASONAL_SAMPLES: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// Seasonal profile keyed by calendar month (1 = January)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPatterns {
    pub monthly: BTreeMap<u32, MonthlyStats>,
    pub peak_month: u32,
    pub lowest_month: u32,
    /// Peak-month mean minus lowest-month mean
    pub seasonal_variation: f64,
}

/// Group samples by calendar month. `None` below twelve samples.
///
/// Ties for peak or low season go to the earlier month.
pub fn seasonal_patterns(series: &TimeSeries) -> Option<SeasonalPatterns> {
    if series.len() < MIN_SEASONAL_SAMPLES {
        return None;
    }

    let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for s in series {
        by_month.entry(s.date().month()).or_default().push(s.index());
    }

    let monthly: BTreeMap<u32, MonthlyStats> = by_month
        .iter()
        .filter_map(|(&month, values)| {
            Some((
                month,
                MonthlyStats {
                    mean: round_to(mean(values)?, 3),
                    std_dev: round_to(std_dev(values)?, 3),
                    count: values.len(),
                },
            ))
        })
        .collect();

    let mut peak: Option<(u32, f64)> = None;
    let mut low: Option<(u32, f64)> = None;
    for (&month, stats) in &monthly {
        if peak.map_or(true, |(_, m)| stats.mean > m) {
            peak = Some((month, stats.mean));
        }
        if low.map_or(true, |(_, m)| stats.mean < m) {
            low = Some((month, stats.mean));
        }
    }
    let (peak_month, peak_mean) = peak?;
    let (lowest_month, low_mean) = low?;

    Some(SeasonalPatterns {
        monthly,
        peak_month,
        lowest_month,
        seasonal_variation: round_to(peak_mean - low_mean, 3),
    })
}
