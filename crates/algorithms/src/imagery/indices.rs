//! Normalized-difference vegetation index
//!
//! `NDVI = (NIR - Red) / (NIR + Red)`
//!
//! Values range from -1 to 1:
//! - Dense vegetation: 0.6 to 0.9
//! - Sparse vegetation: 0.2 to 0.5
//! - Bare soil: 0.1 to 0.2
//! - Water/clouds: -1.0 to 0.0

use ndarray::Array2;
use crate::maybe_rayon::*;
use fratlas_core::{Error, Result};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Normalized difference of two band values: `(a - b) / (a + b)`.
///
/// Returns `0.0` when `a + b == 0`, where the ratio is undefined.
pub fn normalized_difference(band_a: f64, band_b: f64) -> f64 {
    let sum = band_a + band_b;
    if sum == 0.0 {
        return 0.0;
    }
    (band_a - band_b) / sum
}

/// NDVI from a single near-infrared / red reflectance pair.
///
/// # Arguments
/// * `nir` - Near-infrared reflectance
/// * `red` - Red reflectance
pub fn compute_index(nir: f64, red: f64) -> f64 {
    normalized_difference(nir, red)
}

// ---------------------------------------------------------------------------
// Band grids
// ---------------------------------------------------------------------------

/// NDVI over two co-registered band grids.
///
/// Cells where either band is NaN or the band sum is zero become NaN.
/// Valid cells are clipped to `[-1, 1]`.
pub fn ndvi_grid(nir: &Array2<f64>, red: &Array2<f64>) -> Result<Array2<f64>> {
    check_dimensions(nir, red)?;

    let (rows, cols) = nir.dim();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for col in 0..cols {
                let n = nir[[row, col]];
                let r = red[[row, col]];

                if n.is_nan() || r.is_nan() {
                    continue;
                }

                let sum = n + r;
                if sum.abs() < 1e-10 {
                    continue; // Avoid division by zero
                }

                row_data[col] = ((n - r) / sum).clamp(-1.0, 1.0);
            }
            row_data
        })
        .collect();

    Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))
}

fn check_dimensions(a: &Array2<f64>, b: &Array2<f64>) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(Error::InvalidParameter {
            name: "red",
            value: format!("{:?}", b.dim()),
            reason: format!("shape must match nir {:?}", a.dim()),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn equal_bands_give_zero() {
        for x in [0.001, 0.3, 1.0, 1234.5] {
            assert_eq!(compute_index(x, x), 0.0);
        }
    }

    #[test]
    fn zero_sum_is_zero() {
        assert_eq!(compute_index(0.0, 0.0), 0.0);
        assert_eq!(compute_index(0.5, -0.5), 0.0);
    }

    #[test]
    fn known_value() {
        // (0.5 - 0.1) / (0.5 + 0.1) = 0.6667
        let v = compute_index(0.5, 0.1);
        assert!((v - 2.0 / 3.0).abs() < 1e-12, "got {}", v);
    }

    #[test]
    fn grid_basic() {
        let nir = array![[0.5, 0.3], [0.0, f64::NAN]];
        let red = array![[0.1, 0.3], [0.0, 0.2]];
        let out = ndvi_grid(&nir, &red).unwrap();

        assert!((out[[0, 0]] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(out[[0, 1]], 0.0);
        assert!(out[[1, 0]].is_nan(), "zero sum should be NaN");
        assert!(out[[1, 1]].is_nan(), "NaN input should propagate");
    }

    #[test]
    fn grid_is_clipped() {
        // negative reflectance pushes the raw ratio outside [-1, 1]
        let nir = array![[1.0]];
        let red = array![[-0.5]];
        let out = ndvi_grid(&nir, &red).unwrap();
        assert_eq!(out[[0, 0]], 1.0);
    }

    #[test]
    fn grid_shape_mismatch() {
        let nir = Array2::<f64>::zeros((2, 2));
        let red = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            ndvi_grid(&nir, &red),
            Err(Error::InvalidParameter { name: "red", .. })
        ));
    }
}
