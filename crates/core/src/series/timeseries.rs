//! Ordered sequence of samples

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};

use super::Sample;
use crate::error::{Error, Result};

/// Samples strictly increasing by date.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Sample>")]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    /// Build a series, rejecting out-of-order or duplicate dates.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        for pair in samples.windows(2) {
            if pair[1].date() <= pair[0].date() {
                return Err(Error::InvalidInput(format!(
                    "series dates must be strictly increasing: {} follows {}",
                    pair[1].date(),
                    pair[0].date()
                )));
            }
        }
        Ok(Self { samples })
    }

    /// Build a series from raw index values spaced `step_days` apart.
    pub fn from_values(
        start: NaiveDate,
        step_days: u64,
        values: &[f64],
        confidence: f64,
    ) -> Result<Self> {
        if step_days == 0 {
            return Err(Error::InvalidParameter {
                name: "step_days",
                value: "0".into(),
                reason: "must be positive".into(),
            });
        }
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let date = start
                    .checked_add_days(Days::new(i as u64 * step_days))
                    .ok_or_else(|| Error::InvalidInput("date out of range".into()))?;
                Sample::new(date, v, confidence)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Index values in series order.
    pub fn indices(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::index).collect()
    }

    /// `(first, last)` sample dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date(), self.last()?.date()))
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for TimeSeries {
    type Error = Error;

    fn try_from(samples: Vec<Sample>) -> Result<Self> {
        Self::new(samples)
    }
}

impl Serialize for TimeSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.samples)
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
