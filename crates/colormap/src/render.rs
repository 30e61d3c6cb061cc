//! Grid and overlay rendering to RGBA pixel buffers.

use fratlas_core::{Thresholds, TimeSeries};
use ndarray::Array2;

use crate::scheme::{evaluate, ColorScheme, ColorTier, Rgb, Rgba};

/// Alpha of the overlay's base fill.
pub const FILL_ALPHA: f64 = 0.7;

/// Fill colour of deforestation patches.
pub const DEFORESTATION_COLOR: Rgba = Rgba::new(244, 67, 54, 0.8);

/// Index used for the base fill when a series has no samples.
const EMPTY_SERIES_INDEX: f64 = 0.5;

/// A rectangle given as fractions of the canvas width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Patches drawn when the latest index is below the alert threshold.
pub const DEFORESTATION_PATCHES: [Patch; 3] = [
    Patch { x: 0.3, y: 0.4, w: 0.4, h: 0.2 },
    Patch { x: 0.6, y: 0.7, w: 0.2, h: 0.15 },
    Patch { x: 0.15, y: 0.75, w: 0.25, h: 0.125 },
];

/// Parameters for grid rendering.
#[derive(Debug, Clone)]
pub struct ColormapParams {
    pub scheme: ColorScheme,
    /// Value mapped to the start of the scheme. Values below are clamped.
    pub min: f64,
    /// Value mapped to the end of the scheme. Values above are clamped.
    pub max: f64,
    /// Color for NaN cells (RGBA). Default: fully transparent.
    pub nodata_color: [u8; 4],
}

impl ColormapParams {
    /// Scheme over the vegetation range `[0, 1]`.
    pub fn new(scheme: ColorScheme) -> Self {
        Self::with_range(scheme, 0.0, 1.0)
    }

    pub fn with_range(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self {
            scheme,
            min,
            max,
            nodata_color: [0, 0, 0, 0],
        }
    }
}

/// Convert an index grid to an RGBA pixel buffer.
///
/// Returns `rows * cols * 4` bytes in row-major order. NaN cells get
/// `params.nodata_color`. `Tiers` ignores the range and colours raw values.
pub fn grid_to_rgba(grid: &Array2<f64>, params: &ColormapParams) -> Vec<u8> {
    let range = params.max - params.min;
    let inv_range = if range.abs() > f64::EPSILON {
        1.0 / range
    } else {
        1.0
    };

    let mut rgba = Vec::with_capacity(grid.len() * 4);
    for &v in grid.iter() {
        if !v.is_finite() {
            rgba.extend_from_slice(&params.nodata_color);
            continue;
        }
        let t = match params.scheme {
            ColorScheme::Tiers => v,
            ColorScheme::Ndvi => (v - params.min) * inv_range,
        };
        let Rgb { r, g, b } = evaluate(params.scheme, t);
        rgba.extend_from_slice(&[r, g, b, 255]);
    }
    rgba
}

// ---------------------------------------------------------------------------
// Claim overlay
// ---------------------------------------------------------------------------

/// Parameters for [`render_overlay`]
#[derive(Debug, Clone)]
pub struct OverlayParams {
    /// Canvas width in pixels (default: 200)
    pub width: usize,
    /// Canvas height in pixels (default: 200)
    pub height: usize,
    /// Patches are drawn below `thresholds.alert`
    pub thresholds: Thresholds,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            thresholds: Thresholds::default(),
        }
    }
}

/// Render the overlay for a claim from its series' latest sample.
///
/// The canvas is filled with the latest index's tier colour at alpha 0.7.
/// When that index is below the alert threshold, the deforestation
/// patches are composited over it (source-over, straight alpha).
pub fn render_overlay(series: &TimeSeries, params: &OverlayParams) -> Vec<u8> {
    let (width, height) = (params.width, params.height);
    let latest = series.last().map_or(EMPTY_SERIES_INDEX, |s| s.index());

    let fill = ColorTier::for_index(latest).rgb().with_alpha(FILL_ALPHA);
    let mut canvas = vec![fill; width * height];

    if latest < params.thresholds.alert {
        for patch in &DEFORESTATION_PATCHES {
            let (x0, x1) = span(patch.x, patch.w, width);
            let (y0, y1) = span(patch.y, patch.h, height);
            for row in y0..y1 {
                for px in &mut canvas[row * width + x0..row * width + x1] {
                    *px = source_over(DEFORESTATION_COLOR, *px);
                }
            }
        }
    }

    canvas
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, c.alpha_u8()])
        .collect()
}

/// Pixel range covered by `[start, start + len)` as a fraction of `extent`.
fn span(start: f64, len: f64, extent: usize) -> (usize, usize) {
    let to_px = |f: f64| ((f * extent as f64).round().max(0.0) as usize).min(extent);
    (to_px(start), to_px(start + len))
}

fn source_over(src: Rgba, dst: Rgba) -> Rgba {
    let a = src.a + dst.a * (1.0 - src.a);
    if a <= 0.0 {
        return Rgba::new(0, 0, 0, 0.0);
    }
    let blend = |s: u8, d: u8| {
        ((s as f64 * src.a + d as f64 * dst.a * (1.0 - src.a)) / a)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgba::new(blend(src.r, dst.r), blend(src.g, dst.g), blend(src.b, dst.b), a)
}
