//! Least-squares trend over sample position

use serde::{Deserialize, Serialize};

use crate::round_to;

/// Slopes smaller than this (per sample) count as flat.
pub const STABLE_SLOPE: f64 = 0.001;
/// Slopes larger than this (per sample) count as strong.
pub const STRONG_SLOPE: f64 = 0.01;

/// `y = slope * x + intercept` with `x` the sample position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Ordinary least-squares fit of `values` against `0, 1, 2, ...`.
///
/// Returns `None` for fewer than two values.
pub fn linear_fit(values: &[f64]) -> Option<LinearFit> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / nf;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Stable,
    Improving,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrength {
    Weak,
    Strong,
}

/// Direction and strength of the overall trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub overall_trend: TrendDirection,
    /// Slope per sample, rounded to 6 decimals
    pub trend_slope: f64,
    pub trend_strength: TrendStrength,
}

/// Classify the least-squares slope of `values`.
pub fn analyze_trend(values: &[f64]) -> Option<TrendAnalysis> {
    let fit = linear_fit(values)?;
    let slope = fit.slope;

    let overall_trend = if slope.abs() < STABLE_SLOPE {
        TrendDirection::Stable
    } else if slope > 0.0 {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    };
    let trend_strength = if slope.abs() > STRONG_SLOPE {
        TrendStrength::Strong
    } else {
        TrendStrength::Weak
    };

    Some(TrendAnalysis {
        overall_trend,
        trend_slope: round_to(slope, 6),
        trend_strength,
    })
}
