//! # FRA Atlas Colormap
//!
//! Colour mapping and RGBA rendering for vegetation-index data.
//!
//! Provides the five-tier NDVI colour scale used on the map, a continuous
//! NDVI ramp built on a multi-stop interpolation engine, and two renderers:
//! [`grid_to_rgba`] for index grids and [`render_overlay`] for the
//! per-claim overlay drawn from a series' latest sample.
//!
//! ## Usage
//!
//! ```ignore
//! use fratlas_colormap::{color_for, render_overlay, OverlayParams};
//!
//! let token = color_for(0.42);            // "#FFD93D"
//! let rgba = render_overlay(&series, &OverlayParams::default());
//! ```

mod render;
mod scheme;

pub use render::{
    grid_to_rgba, render_overlay, ColormapParams, OverlayParams, Patch, DEFORESTATION_COLOR,
    DEFORESTATION_PATCHES, FILL_ALPHA,
};
pub use scheme::{color_for, evaluate, ColorScheme, ColorStop, ColorTier, Rgb, Rgba};
