//! Fixed-baseline degradation detection
//!
//! Every sample after the first is compared against the *first* sample of
//! the series, never against a rolling reference. An event is emitted when
//! the drop from that baseline exceeds the alert threshold.

use serde::{Deserialize, Serialize};
use tracing::debug;
use fratlas_core::{Algorithm, ChangeEvent, ChangeType, Error, Result, Severity, TimeSeries};

use crate::round_to;

/// Tolerance applied when comparing a drop against the threshold, so a drop
/// that equals the threshold up to float rounding does not count as exceeding it.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// Parameters for change detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeDetectionParams {
    /// Minimum drop from baseline that raises an event (default: 0.15)
    pub alert_threshold: f64,
}

impl Default for ChangeDetectionParams {
    fn default() -> Self {
        Self {
            alert_threshold: 0.15,
        }
    }
}

impl ChangeDetectionParams {
    pub fn validate(&self) -> Result<()> {
        if !self.alert_threshold.is_finite() || self.alert_threshold < 0.0 {
            return Err(Error::InvalidParameter {
                name: "alert_threshold",
                value: self.alert_threshold.to_string(),
                reason: "must be finite and non-negative".into(),
            });
        }
        Ok(())
    }
}

/// Detect degradation events against the first sample of `series`.
///
/// For each sample `i ≥ 1`:
/// - `absolute = baseline - index[i]`
/// - `percent = absolute / baseline * 100`
/// - emit when `absolute` exceeds `alert_threshold` by more than `1e-9`,
///   severity HIGH above 50%, MEDIUM above 25%, else LOW
///
/// A drop equal to the threshold up to that tolerance does not emit, so
/// 0.75 -> 0.60 at threshold 0.15 is not an event. Samples keep the index
/// at or above `INDEX_MIN`, so the baseline is never zero.
///
/// Series with fewer than two samples produce no events. Output order
/// matches input order; adjacent events are not merged.
pub fn detect_changes(series: &TimeSeries, alert_threshold: f64) -> Result<Vec<ChangeEvent>> {
    let params = ChangeDetectionParams { alert_threshold };
    params.validate()?;

    let samples = series.samples();
    if samples.len() < 2 {
        return Ok(Vec::new());
    }

    let baseline = samples[0].index();
    let mut events = Vec::new();

    for pair in samples.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        let absolute = baseline - current.index();
        if absolute - alert_threshold <= THRESHOLD_TOLERANCE {
            continue;
        }

        let percent = absolute / baseline * 100.0;

        events.push(ChangeEvent {
            date: current.date(),
            change_type: ChangeType::Degradation,
            severity: Severity::from_percent(percent),
            absolute_change: round_to(absolute, 3),
            percent_change: round_to(percent, 1),
            previous_index: previous.index(),
            current_index: current.index(),
        });
    }

    debug!(
        samples = samples.len(),
        events = events.len(),
        baseline,
        alert_threshold,
        "change detection finished"
    );
    Ok(events)
}

/// Fixed-baseline change detection as an [`Algorithm`].
pub struct ChangeDetection;

impl Algorithm for ChangeDetection {
    type Input = TimeSeries;
    type Output = Vec<ChangeEvent>;
    type Params = ChangeDetectionParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "ChangeDetection"
    }

    fn description(&self) -> &'static str {
        "Detect vegetation-index drops against the first sample of a series"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        detect_changes(&input, params.alert_threshold)
    }
}
