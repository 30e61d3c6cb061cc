//! Descriptive statistics over a series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use fratlas_core::{Error, Result, TimeSeries};

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation; `None` for an empty slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

/// `(min, max)` index over the series; `None` when empty.
pub fn index_range(series: &TimeSeries) -> Option<(f64, f64)> {
    if series.is_empty() {
        return None;
    }
    let (min, max) = series
        .iter()
        .map(|s| s.index())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    Some((min, max))
}

/// Descriptive statistics for a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStatistics {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Describe a non-empty series.
pub fn describe(series: &TimeSeries) -> Result<SeriesStatistics> {
    let insufficient = || Error::InsufficientData {
        required: 1,
        actual: series.len(),
    };
    let values = series.indices();
    let (start, end) = series.date_range().ok_or_else(insufficient)?;
    let (min, max) = index_range(series).ok_or_else(insufficient)?;

    Ok(SeriesStatistics {
        count: values.len(),
        mean: mean(&values).ok_or_else(insufficient)?,
        std_dev: std_dev(&values).ok_or_else(insufficient)?,
        min,
        max,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        TimeSeries::from_values(start, 10, values, 0.9).unwrap()
    }

    #[test]
    fn basic_stats() {
        let s = describe(&series(&[0.2, 0.4, 0.4, 0.4, 0.5, 0.5, 0.7, 0.9])).unwrap();
        assert_eq!(s.count, 8);
        assert!((s.mean - 0.5).abs() < 1e-12);
        assert!((s.std_dev - 0.2).abs() < 1e-12);
        assert_eq!(s.min, 0.2);
        assert_eq!(s.max, 0.9);
        assert_eq!(s.end, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
    }

    #[test]
    fn empty_is_insufficient() {
        let err = describe(&series(&[])).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { required: 1, actual: 0 }));
        assert!(index_range(&series(&[])).is_none());
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn range_of_single() {
        assert_eq!(index_range(&series(&[0.4])), Some((0.4, 0.4)));
    }
}
