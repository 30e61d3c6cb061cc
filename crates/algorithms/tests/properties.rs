//! Randomized properties of the index, generator, detector and exporter.

use chrono::NaiveDate;
use proptest::prelude::*;
use fratlas_algorithms::change::detect_changes;
use fratlas_algorithms::export::build_bundle;
use fratlas_algorithms::imagery::{classify, compute_index};
use fratlas_algorithms::timeseries::{
    GeneratorParams, SeededSource, SeriesGenerator, CONFIDENCE_MAX, CONFIDENCE_MIN, INDEX_MAX,
    INDEX_MIN,
};
use fratlas_colormap::{color_for, ColorTier};
use fratlas_core::{Classification, Thresholds, TimeSeries};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(offset)
}

fn rank(c: Classification) -> usize {
    Classification::ALL.iter().position(|x| *x == c).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn generated_samples_stay_in_bounds(
        seed in any::<u64>(),
        rate in 0.0f64..0.2,
        span in 0u64..400,
    ) {
        let (start, end) = (day(0), day(span));
        let ts = SeriesGenerator::new(GeneratorParams::with_rate(rate))
            .generate(start, end, SeededSource::new(seed))
            .unwrap();

        prop_assert_eq!(ts.len() as u64, span / 10 + 1);
        prop_assert_eq!(ts.first().unwrap().date(), start);
        for (i, s) in ts.iter().enumerate() {
            prop_assert!((INDEX_MIN..=INDEX_MAX).contains(&s.index()));
            prop_assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&s.confidence()));
            prop_assert_eq!(s.classification(), classify(s.index()));
            prop_assert_eq!(s.date(), day(i as u64 * 10));
            prop_assert!(s.date() <= end);
        }
    }

    #[test]
    fn same_seed_same_series(seed in any::<u64>()) {
        let gen = SeriesGenerator::default();
        let a = gen.generate(day(0), day(120), SeededSource::new(seed)).unwrap();
        let b = gen.generate(day(0), day(120), SeededSource::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn classification_is_total(index in any::<f64>()) {
        let c = classify(index);
        prop_assert!(Classification::ALL.contains(&c));
        prop_assert!(ColorTier::ALL.iter().any(|t| t.hex() == color_for(index)));
    }

    #[test]
    fn classification_is_monotonic(a in -1.0f64..1.0, b in -1.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify(hi)) <= rank(classify(lo)));
    }

    #[test]
    fn index_is_bounded_for_reflectances(nir in 0.0f64..1.0, red in 0.0f64..1.0) {
        let v = compute_index(nir, red);
        prop_assert!((-1.0..=1.0).contains(&v));
    }

    #[test]
    fn bundle_range_is_exact(values in prop::collection::vec(0.05f64..=0.95, 1..80)) {
        let ts = TimeSeries::from_values(day(0), 10, &values, 0.9).unwrap();
        let bundle = build_bundle(&ts, &[], &Thresholds::default()).unwrap();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(bundle.summary.index_range.min, min);
        prop_assert_eq!(bundle.summary.index_range.max, max);
        prop_assert_eq!(bundle.summary.index_range.baseline, values[0]);
        prop_assert_eq!(bundle.summary.index_range.current, values[values.len() - 1]);
    }

    #[test]
    fn events_exceed_threshold(
        values in prop::collection::vec(0.05f64..0.95, 0..60),
        threshold in 0.0f64..0.5,
    ) {
        let ts = TimeSeries::from_values(day(0), 10, &values, 0.9).unwrap();
        let events = detect_changes(&ts, threshold).unwrap();
        prop_assert!(events.len() <= values.len().saturating_sub(1));

        let mut last_date = None;
        for e in &events {
            prop_assert!(e.date > day(0));
            prop_assert!(values[0] - e.current_index > threshold);
            prop_assert!(Some(e.date) > last_date);
            last_date = Some(e.date);
        }
    }
}
