//! Colour tiers, hex parsing and the multi-stop interpolation engine.

use fratlas_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(token: &str) -> Result<Self> {
        let digits = token.strip_prefix('#').unwrap_or(token);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidInput(format!("invalid hex colour: {:?}", token)));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidInput(format!("invalid hex colour: {:?}", token)))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Uppercase `#RRGGBB` token.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// RGB color with a straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex token and attach `alpha`, clamped to `[0, 1]`.
    pub fn from_hex(token: &str, alpha: f64) -> Result<Self> {
        if !alpha.is_finite() {
            return Err(Error::InvalidParameter {
                name: "alpha",
                value: alpha.to_string(),
                reason: "must be finite".into(),
            });
        }
        Ok(Rgb::from_hex(token)?.with_alpha(alpha.clamp(0.0, 1.0)))
    }

    /// CSS `rgba(r, g, b, a)` notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Alpha as a byte, `round(a * 255)`.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Five-tier NDVI scale
// ---------------------------------------------------------------------------

/// Visual tier of an index value on the map.
///
/// Boundaries are `< 0.1 / < 0.3 / < 0.5 / < 0.7 / else`, independent of
/// the classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTier {
    /// Brown
    BareSoil,
    /// Red
    Critical,
    /// Yellow
    Alert,
    /// Light green
    Moderate,
    /// Dark green
    Healthy,
}

impl ColorTier {
    pub const ALL: [ColorTier; 5] = [
        Self::BareSoil,
        Self::Critical,
        Self::Alert,
        Self::Moderate,
        Self::Healthy,
    ];

    /// Total over the real line; NaN lands in the top tier since every
    /// comparison against it is false.
    pub fn for_index(index: f64) -> Self {
        if index < 0.1 {
            Self::BareSoil
        } else if index < 0.3 {
            Self::Critical
        } else if index < 0.5 {
            Self::Alert
        } else if index < 0.7 {
            Self::Moderate
        } else {
            Self::Healthy
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::BareSoil => "#8B4513",
            Self::Critical => "#FF6B6B",
            Self::Alert => "#FFD93D",
            Self::Moderate => "#6BCF7F",
            Self::Healthy => "#2E7D32",
        }
    }

    pub const fn rgb(&self) -> Rgb {
        match self {
            Self::BareSoil => Rgb::new(0x8B, 0x45, 0x13),
            Self::Critical => Rgb::new(0xFF, 0x6B, 0x6B),
            Self::Alert => Rgb::new(0xFF, 0xD9, 0x3D),
            Self::Moderate => Rgb::new(0x6B, 0xCF, 0x7F),
            Self::Healthy => Rgb::new(0x2E, 0x7D, 0x32),
        }
    }
}

/// Hex colour token for an index value.
pub fn color_for(index: f64) -> &'static str {
    ColorTier::for_index(index).hex()
}

// ---------------------------------------------------------------------------
// Continuous schemes
// ---------------------------------------------------------------------------

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Brown -> Yellow -> Green, interpolated
    Ndvi,
    /// The five discrete map tiers, `t` read as the index value
    Tiers,
}

impl ColorScheme {
    pub const ALL: &[ColorScheme] = &[Self::Ndvi, Self::Tiers];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ndvi => "NDVI",
            Self::Tiers => "NDVI tiers",
        }
    }
}

const NDVI_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 0x8B, 0x45, 0x13),
    ColorStop::new(0.2, 0xFF, 0x6B, 0x6B),
    ColorStop::new(0.4, 0xFF, 0xD9, 0x3D),
    ColorStop::new(0.6, 0x6B, 0xCF, 0x7F),
    ColorStop::new(1.0, 0x2E, 0x7D, 0x32),
];

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

fn multi_stop(stops: &[ColorStop], t: f64) -> Rgb {
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

/// Evaluate a color scheme at position `t`.
///
/// `Ndvi` interpolates over `[0, 1]` and clamps outside it. `Tiers` treats
/// `t` as a raw index value.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgb {
    match scheme {
        ColorScheme::Ndvi => multi_stop(NDVI_STOPS, t),
        ColorScheme::Tiers => ColorTier::for_index(t).rgb(),
    }
}
