//! End-to-end: generate or load a series, detect changes, analyze, export.

use std::io::Write;

use fratlas_algorithms::export::{AnalysisBundle, ExportOptions};
use fratlas_algorithms::timeseries::{generate, SeededSource};
use fratlas_algorithms::{AnalysisConfig, NdviCalculator};
use fratlas_core::io::{read_json, write_json};
use fratlas_core::series::parse_date;
use fratlas_core::{Classification, Severity, Thresholds, TimeSeries};

fn fixed_series() -> TimeSeries {
    TimeSeries::from_values(
        parse_date("2025-01-01").unwrap(),
        10,
        &[0.75, 0.70, 0.60, 0.55, 0.40],
        0.9,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Fixed series
// ---------------------------------------------------------------------------

#[test]
fn fixed_series_events_and_bundle() {
    let calc = NdviCalculator::default();
    let ts = fixed_series();

    let changes = calc.detect_changes(&ts).unwrap();
    // 0.60 sits on the threshold (drop 0.15) and does not trigger
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].date, parse_date("2025-01-31").unwrap());
    assert_eq!(changes[0].absolute_change, 0.2);
    assert_eq!(changes[0].percent_change, 26.7);
    assert_eq!(changes[0].previous_index, 0.60);
    assert_eq!(changes[1].absolute_change, 0.35);
    assert_eq!(changes[1].percent_change, 46.7);
    assert!(changes.iter().all(|c| c.severity == Severity::Medium));

    let bundle = calc.build_bundle(&ts, &changes).unwrap();
    assert_eq!(bundle.summary.alerts_generated, 2);
    assert_eq!(bundle.summary.health_status, Classification::Moderate);
    assert_eq!(bundle.summary.index_range.min, 0.40);
    assert_eq!(bundle.summary.index_range.max, 0.75);

    let alert = calc.deforestation_alert(&ts);
    assert!(alert.is_none(), "0.40 is above the alert threshold");
}

#[test]
fn bundle_survives_file_round_trip() {
    let calc = NdviCalculator::default();
    let ts = fixed_series();
    let changes = calc.detect_changes(&ts).unwrap();
    let bundle = calc.build_bundle(&ts, &changes).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.json");
    write_json(&bundle, &path).unwrap();
    let back: AnalysisBundle = read_json(&path).unwrap();
    assert_eq!(back, bundle);
}

#[test]
fn download_payload_matches_bundle_except_timestamp() {
    let calc = NdviCalculator::default();
    let ts = fixed_series();
    let changes = calc.detect_changes(&ts).unwrap();
    let opts = ExportOptions {
        download: true,
        filename: "claim.json".into(),
    };

    let a = calc.export(&ts, &changes, &opts).unwrap();
    let b = calc.export(&ts, &changes, &opts).unwrap();
    let mut x: serde_json::Value = serde_json::from_slice(&a.download.unwrap().bytes).unwrap();
    let mut y: serde_json::Value = serde_json::from_slice(&b.download.unwrap().bytes).unwrap();
    x["metadata"]["generatedAt"] = serde_json::Value::Null;
    y["metadata"]["generatedAt"] = serde_json::Value::Null;
    assert_eq!(x, y);
}

// ---------------------------------------------------------------------------
// Generated series
// ---------------------------------------------------------------------------

#[test]
fn generated_series_pipeline() {
    let ts = generate("2025-01-01", "2025-09-15", 0.02, SeededSource::new(42)).unwrap();
    assert_eq!(ts.len(), 26);

    let calc = NdviCalculator::default();
    let changes = calc.detect_changes(&ts).unwrap();
    let baseline = ts.first().unwrap().index();
    for c in &changes {
        assert!(baseline - c.current_index > 0.15);
    }

    let export = calc.export(&ts, &changes, &ExportOptions::default()).unwrap();
    assert!(export.download.is_none());
    assert_eq!(export.bundle.time_series, ts);
    assert_eq!(export.bundle.detected_changes, changes);
}

#[test]
fn config_file_drives_calculator() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[thresholds]\nhealthy = 0.7\nalert = 0.4\ncritical = 0.2").unwrap();
    writeln!(f, "[detection]\nalert_threshold = 0.3").unwrap();

    let config = AnalysisConfig::load(f.path()).unwrap();
    let calc = NdviCalculator::from_config(&config).unwrap();
    let ts = fixed_series();

    let changes = calc.detect_changes(&ts).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].current_index, 0.40);

    assert_eq!(calc.classify(0.65), Classification::Moderate);
    let bundle = calc.build_bundle(&ts, &changes).unwrap();
    assert_eq!(bundle.thresholds.healthy, 0.7);
    assert_eq!(bundle.summary.health_status, Classification::Moderate);
}

#[test]
fn custom_threshold_bundle_survives_a_file_roundtrip() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[thresholds]\nhealthy = 0.8\nalert = 0.5\ncritical = 0.2").unwrap();
    let config = AnalysisConfig::load(f.path()).unwrap();
    let calc = NdviCalculator::from_config(&config).unwrap();

    let ts = calc
        .generate("2025-01-01", "2025-06-30", 0.02, SeededSource::new(11))
        .unwrap();
    let changes = calc.detect_changes(&ts).unwrap();
    let bundle = calc.build_bundle(&ts, &changes).unwrap();
    // samples keep the default boundaries; only the summary uses the config
    assert_eq!(bundle.time_series.samples()[0].classification(), Classification::Healthy);
    assert_eq!(bundle.summary.health_status, calc.classify(ts.last().unwrap().index()));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.json");
    write_json(&bundle, &path).unwrap();
    let back: AnalysisBundle = read_json(&path).unwrap();
    assert_eq!(back, bundle);
    assert_eq!(back.thresholds.healthy, 0.8);
}

#[test]
fn misordered_config_thresholds_are_rejected() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[thresholds]\nhealthy = 0.2\nalert = 0.4\ncritical = 0.1").unwrap();
    assert!(AnalysisConfig::load(f.path()).is_err());

    let config = AnalysisConfig {
        thresholds: Thresholds { healthy: 0.2, alert: 0.4, critical: 0.1 },
        ..AnalysisConfig::default()
    };
    assert!(NdviCalculator::from_config(&config).is_err());
}

#[test]
fn series_file_loads_and_reclassifies() {
    let json = r#"[
        {"date": "2025-03-01", "index": 0.72, "classification": "Bare", "confidence": 0.9},
        {"date": "2025-03-11", "index": 0.08, "confidence": 0.88}
    ]"#;
    let ts: TimeSeries = serde_json::from_str(json).unwrap();
    assert_eq!(ts.samples()[0].classification(), Classification::Healthy);
    assert_eq!(ts.samples()[1].classification(), Classification::Bare);
    assert_eq!(ts.samples()[1].confidence(), 0.88);

    let alert = NdviCalculator::default().deforestation_alert(&ts).unwrap();
    assert_eq!(alert.severity, Severity::High);
}

#[test]
fn series_file_rejects_out_of_range_samples() {
    let no_confidence = r#"[{"date": "2025-03-01", "index": 0.72}]"#;
    assert!(serde_json::from_str::<TimeSeries>(no_confidence).is_err());

    let negative = r#"[{"date": "2025-03-01", "index": -0.3, "confidence": 0.9}]"#;
    assert!(serde_json::from_str::<TimeSeries>(negative).is_err());

    let certain = r#"[{"date": "2025-03-01", "index": 0.72, "confidence": 1.0}]"#;
    assert!(serde_json::from_str::<TimeSeries>(certain).is_err());
}
