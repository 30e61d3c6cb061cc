//! Index classification
//!
//! Maps index values onto the four discrete health categories.

use ndarray::Array2;
use fratlas_core::{Classification, Thresholds};

/// Classify an index value against the default boundaries:
/// `≥ 0.6` Healthy, `≥ 0.3` Moderate, `≥ 0.1` Sparse, else Bare.
pub fn classify(index: f64) -> Classification {
    Classification::from_index(index)
}

/// Classify an index value against explicit boundaries.
pub fn classify_with(index: f64, thresholds: &Thresholds) -> Classification {
    Classification::with_thresholds(index, thresholds)
}

/// Classify every cell of an index grid. NaN cells have no category.
pub fn classify_grid(grid: &Array2<f64>, thresholds: &Thresholds) -> Array2<Option<Classification>> {
    grid.mapv(|v| {
        if v.is_nan() {
            None
        } else {
            Some(Classification::with_thresholds(v, thresholds))
        }
    })
}

/// Count cells per category, in `Classification::ALL` order.
pub fn class_counts(classes: &Array2<Option<Classification>>) -> [(Classification, usize); 4] {
    let mut counts = [0usize; 4];
    for class in classes.iter().flatten() {
        let slot = Classification::ALL
            .iter()
            .position(|c| c == class)
            .unwrap_or(3);
        counts[slot] += 1;
    }
    [
        (Classification::Healthy, counts[0]),
        (Classification::Moderate, counts[1]),
        (Classification::Sparse, counts[2]),
        (Classification::Bare, counts[3]),
    ]
}
