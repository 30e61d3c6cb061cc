//! Benchmarks for the analysis pipeline and band-grid NDVI

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fratlas_algorithms::change::detect_changes;
use fratlas_algorithms::export::build_bundle;
use fratlas_algorithms::imagery::ndvi_grid;
use fratlas_algorithms::timeseries::{SeededSource, SeriesGenerator};
use fratlas_core::Thresholds;
use ndarray::Array2;

fn create_band(size: usize, base: f64) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(row, col)| {
        base + ((row * 7 + col * 13) % 200) as f64 / 1000.0
    })
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/generate_detect_export");
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let thresholds = Thresholds::default();
    for years in [1u64, 5, 20] {
        let end = start + chrono::Days::new(years * 365);
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, _| {
            b.iter(|| {
                let ts = SeriesGenerator::default()
                    .generate(start, end, SeededSource::new(42))
                    .unwrap();
                let changes = detect_changes(&ts, 0.15).unwrap();
                build_bundle(black_box(&ts), black_box(&changes), &thresholds).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_ndvi_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("imagery/ndvi_grid");
    for size in [256, 1024, 2048] {
        let nir = create_band(size, 0.4);
        let red = create_band(size, 0.1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| ndvi_grid(black_box(&nir), black_box(&red)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_ndvi_grid);
criterion_main!(benches);
