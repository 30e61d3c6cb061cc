//! Synthetic vegetation-index time series
//!
//! Models a forest plot losing canopy at a steady monthly rate, with an
//! annual seasonal cycle and uniform measurement noise:
//!
//! ```text
//! trend    = baseline - rate * (day / 30)
//! seasonal = 0.1 * sin(2π * day / 365)
//! noise    = (u - 0.5) * 0.1
//! index    = round3(clamp(trend + seasonal + noise, 0.05, 0.95))
//! ```

use std::f64::consts::PI;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use fratlas_core::series::{days_between, parse_date_range};
use fratlas_core::{Algorithm, Error, Result, Sample, TimeSeries};

use super::random::RandomSource;
use crate::round_to;

pub use fratlas_core::series::{CONFIDENCE_MAX, CONFIDENCE_MIN, INDEX_MAX, INDEX_MIN};

const SEASONAL_AMPLITUDE: f64 = 0.1;
const NOISE_AMPLITUDE: f64 = 0.1;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Parameters for series generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Index lost per 30-day month (default: 0.02)
    pub degradation_rate: f64,
    /// Index at day zero before seasonality and noise (default: 0.75)
    pub baseline: f64,
    /// Calendar days between samples (default: 10)
    pub step_days: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            degradation_rate: 0.02,
            baseline: 0.75,
            step_days: 10,
        }
    }
}

impl GeneratorParams {
    pub fn with_rate(degradation_rate: f64) -> Self {
        Self {
            degradation_rate,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.degradation_rate.is_finite() || self.degradation_rate < 0.0 {
            return Err(Error::InvalidParameter {
                name: "degradation_rate",
                value: self.degradation_rate.to_string(),
                reason: "must be finite and non-negative".into(),
            });
        }
        if !self.baseline.is_finite() {
            return Err(Error::InvalidParameter {
                name: "baseline",
                value: self.baseline.to_string(),
                reason: "must be finite".into(),
            });
        }
        if self.step_days == 0 {
            return Err(Error::InvalidParameter {
                name: "step_days",
                value: "0".into(),
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

/// Generator holding its parameters.
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    params: GeneratorParams,
}

impl SeriesGenerator {
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generate samples every `step_days` from `start` up to and including
    /// `end` when it lands on a step.
    ///
    /// Each step draws twice from `rng`: first the noise, then the confidence.
    pub fn generate<R: RandomSource>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        mut rng: R,
    ) -> Result<TimeSeries> {
        self.params.validate()?;
        if end < start {
            return Err(Error::InvalidInput(format!(
                "end date {} precedes start date {}",
                end, start
            )));
        }

        let total_days = days_between(start, end);
        let step = i64::from(self.params.step_days);
        let mut samples = Vec::with_capacity((total_days / step + 1) as usize);

        let mut day = 0i64;
        while day <= total_days {
            let date = start
                .checked_add_days(Days::new(day as u64))
                .ok_or_else(|| Error::InvalidInput(format!("date overflow at day {}", day)))?;

            let index = self.index_at(day as f64, rng.next_f64());
            let confidence =
                (CONFIDENCE_MIN + rng.next_f64() * 0.1).clamp(CONFIDENCE_MIN, CONFIDENCE_MAX);

            samples.push(Sample::new(date, index, confidence)?);
            day += step;
        }

        debug!(
            samples = samples.len(),
            start = %start,
            end = %end,
            rate = self.params.degradation_rate,
            "generated series"
        );
        TimeSeries::new(samples)
    }

    /// Deterministic trend plus seasonal term at `day`, before noise.
    pub fn expected_index(&self, day: f64) -> f64 {
        let months_elapsed = day / DAYS_PER_MONTH;
        let trend = self.params.baseline - self.params.degradation_rate * months_elapsed;
        let seasonal = SEASONAL_AMPLITUDE * (2.0 * PI * day / DAYS_PER_YEAR).sin();
        trend + seasonal
    }

    fn index_at(&self, day: f64, draw: f64) -> f64 {
        let noise = (draw - 0.5) * NOISE_AMPLITUDE;
        round_to((self.expected_index(day) + noise).clamp(INDEX_MIN, INDEX_MAX), 3)
    }
}

/// Generate a series between two ISO 8601 dates.
///
/// Malformed dates or an end date before the start fail with
/// `Error::InvalidInput`; no partial series is returned.
pub fn generate<R: RandomSource>(
    start: &str,
    end: &str,
    degradation_rate: f64,
    rng: R,
) -> Result<TimeSeries> {
    let (start, end) = parse_date_range(start, end)?;
    SeriesGenerator::new(GeneratorParams::with_rate(degradation_rate)).generate(start, end, rng)
}

/// Input for the [`SeriesGeneration`] algorithm: a date window and a seed.
#[derive(Debug, Clone, Copy)]
pub struct GenerationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub seed: u64,
}

/// Seeded series generation as an [`Algorithm`].
pub struct SeriesGeneration;

impl Algorithm for SeriesGeneration {
    type Input = GenerationWindow;
    type Output = TimeSeries;
    type Params = GeneratorParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "SeriesGeneration"
    }

    fn description(&self) -> &'static str {
        "Synthesize a degrading, seasonal vegetation-index series every few days"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        SeriesGenerator::new(params).generate(
            input.start,
            input.end,
            super::random::SeededSource::new(input.seed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeseries::random::{ConstantSource, SeededSource};
    use fratlas_core::Classification;

    #[test]
    fn ten_day_window_gives_two_samples() {
        let ts = generate("2025-01-01", "2025-01-11", 0.0, ConstantSource(0.5)).unwrap();
        assert_eq!(ts.len(), 2);
        assert_eq!(ts.samples()[0].index(), 0.75);
        // 0.75 + 0.1 * sin(2π·10/365) = 0.76713 → 0.767
        assert_eq!(ts.samples()[1].index(), 0.767);
        assert_eq!(ts.samples()[1].date(), NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
        assert_eq!(ts.samples()[0].confidence(), 0.9);
    }

    #[test]
    fn constant_source_is_bit_reproducible() {
        let a = generate("2025-01-01", "2025-09-15", 0.0, ConstantSource(0.5)).unwrap();
        let b = generate("2025-01-01", "2025-09-15", 0.0, ConstantSource(0.5)).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.index().to_bits(), y.index().to_bits());
        }
    }

    #[test]
    fn sample_count_follows_step() {
        let count = |end: &str| generate("2025-01-01", end, 0.02, ConstantSource(0.5)).unwrap().len();
        assert_eq!(count("2025-01-01"), 1);
        assert_eq!(count("2025-01-10"), 1);
        assert_eq!(count("2025-01-11"), 2);
        assert_eq!(count("2025-01-16"), 2);
        // 257 days
        assert_eq!(count("2025-09-15"), 26);
    }

    #[test]
    fn dates_are_ten_days_apart() {
        let ts = generate("2024-02-20", "2024-03-31", 0.02, SeededSource::new(1)).unwrap();
        for pair in ts.samples().windows(2) {
            assert_eq!((pair[1].date() - pair[0].date()).num_days(), 10);
        }
    }

    #[test]
    fn invalid_dates() {
        assert!(matches!(
            generate("2025-02-01", "2025-01-01", 0.02, ConstantSource(0.5)),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            generate("2025/01/01", "2025-02-01", 0.02, ConstantSource(0.5)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_rate_rejected() {
        assert!(matches!(
            generate("2025-01-01", "2025-02-01", -0.1, ConstantSource(0.5)),
            Err(Error::InvalidParameter { name: "degradation_rate", .. })
        ));
    }

    #[test]
    fn steep_degradation_clamps_to_floor() {
        let ts = generate("2025-01-01", "2027-01-01", 0.5, ConstantSource(0.5)).unwrap();
        let last = ts.last().unwrap();
        assert_eq!(last.index(), INDEX_MIN);
        assert_eq!(last.classification(), Classification::Bare);
    }

    #[test]
    fn classification_matches_stored_index() {
        let ts = generate("2025-01-01", "2026-12-31", 0.03, SeededSource::new(99)).unwrap();
        for s in &ts {
            assert_eq!(s.classification(), Classification::from_index(s.index()));
        }
    }

    #[test]
    fn algorithm_trait_is_seeded() {
        let window = GenerationWindow {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            seed: 3,
        };
        let a = SeriesGeneration.execute_default(window).unwrap();
        let b = SeriesGeneration.execute_default(window).unwrap();
        assert_eq!(a, b);
        assert_eq!(SeriesGeneration.name(), "SeriesGeneration");
    }
}
