//! One dated vegetation-index measurement

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Classification;
use crate::error::{Error, Result};

/// Lowest index a sample may carry.
pub const INDEX_MIN: f64 = 0.05;
/// Highest index a sample may carry.
pub const INDEX_MAX: f64 = 0.95;
/// Lowest confidence a sample may carry.
pub const CONFIDENCE_MIN: f64 = 0.85;
/// Highest confidence a sample may carry.
pub const CONFIDENCE_MAX: f64 = 0.95;

/// A dated index value. The classification is always derived from the
/// index against the default boundaries and cannot be set independently,
/// so a sample reads back from JSON exactly as it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SampleRecord")]
pub struct Sample {
    date: NaiveDate,
    index: f64,
    classification: Classification,
    confidence: f64,
}

/// Wire form of a sample; any incoming classification is recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleRecord {
    date: NaiveDate,
    index: f64,
    confidence: f64,
}

impl TryFrom<SampleRecord> for Sample {
    type Error = Error;

    fn try_from(r: SampleRecord) -> Result<Self> {
        Sample::new(r.date, r.index, r.confidence)
    }
}

impl Sample {
    /// Create a sample.
    ///
    /// The index must lie in `[INDEX_MIN, INDEX_MAX]` and the confidence in
    /// `[CONFIDENCE_MIN, CONFIDENCE_MAX]`; anything else (NaN included) is
    /// `Error::InvalidInput`.
    pub fn new(date: NaiveDate, index: f64, confidence: f64) -> Result<Self> {
        if !(INDEX_MIN..=INDEX_MAX).contains(&index) {
            return Err(Error::InvalidInput(format!(
                "index on {} outside [{}, {}]: {}",
                date, INDEX_MIN, INDEX_MAX, index
            )));
        }
        if !(CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&confidence) {
            return Err(Error::InvalidInput(format!(
                "confidence on {} outside [{}, {}]: {}",
                date, CONFIDENCE_MIN, CONFIDENCE_MAX, confidence
            )));
        }
        Ok(Self {
            date,
            index,
            classification: Classification::from_index(index),
            confidence,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn index(&self) -> f64 {
        self.index
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn classification_follows_index() {
        let s = Sample::new(day(1), 0.61, 0.9).unwrap();
        assert_eq!(s.classification(), Classification::Healthy);
        let s = Sample::new(day(1), 0.05, 0.9).unwrap();
        assert_eq!(s.classification(), Classification::Bare);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Sample::new(day(1), f64::NAN, 0.9).is_err());
        assert!(Sample::new(day(1), 0.0, 0.9).is_err());
        assert!(Sample::new(day(1), 0.96, 0.9).is_err());
        assert!(Sample::new(day(1), 0.5, 1.0).is_err());
        assert!(Sample::new(day(1), 0.5, 0.8).is_err());
        assert!(Sample::new(day(1), 0.95, 0.85).is_ok());
        assert!(matches!(
            Sample::new(day(1), -0.2, 0.9),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn json_roundtrip_recomputes_classification() {
        let json = r#"{"date":"2025-01-01","index":0.25,"classification":"Healthy","confidence":0.9}"#;
        let s: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(s.classification(), Classification::Sparse);

        let out = serde_json::to_value(&s).unwrap();
        assert_eq!(out["classification"], "Sparse");
        assert_eq!(out["date"], "2025-01-01");

        let back: Sample = serde_json::from_value(out).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn json_requires_confidence_in_range() {
        assert!(serde_json::from_str::<Sample>(r#"{"date":"2025-01-01","index":0.7}"#).is_err());
        let json = r#"{"date":"2025-01-01","index":0.7,"confidence":1.0}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
        let json = r#"{"date":"2025-01-01","index":1.2,"confidence":0.9}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
    }
}
