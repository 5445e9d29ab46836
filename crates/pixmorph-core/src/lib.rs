//! Pixmorph Core - raster transform kernel
//!
//! This crate provides the pure image-editing operations behind pixmorph:
//! lossless and arbitrary-angle rotation, flips, and per-pixel color
//! adjustment in the RGB, HSV, CMYK and YIQ color models. Every operation
//! works on an explicit [`RasterBuffer`]; nothing here decodes, stores or
//! displays images.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub mod adjustments;
pub mod buffer;
pub mod color;
pub mod error;
pub mod transform;

pub use adjustments::{apply_adjustment, apply_cmyk, apply_hsv, apply_rgb, apply_yiq};
pub use buffer::RasterBuffer;
pub use error::EditError;
pub use transform::{
    compute_rotated_bounds, flip_horizontal, flip_vertical, rotate_180, rotate_270, rotate_90,
    rotate_free, rotate_free_with, ResampleFilter,
};

/// Slider range for RGB deltas (0-255 scale).
pub const RGB_DELTA_RANGE: RangeInclusive<i32> = -255..=255;

/// Slider range for the HSV hue delta, in degrees.
pub const HUE_DELTA_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Slider range for every percentage delta (HSV saturation/value, CMYK, YIQ).
pub const PERCENT_DELTA_RANGE: RangeInclusive<f64> = -100.0..=100.0;

/// Additive RGB adjustment on the 0-255 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RgbAdjustment {
    /// Red delta (-255 to 255)
    pub red: i32,
    /// Green delta (-255 to 255)
    pub green: i32,
    /// Blue delta (-255 to 255)
    pub blue: i32,
}

impl RgbAdjustment {
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Check if all deltas are zero
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Hue/saturation/value adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HsvAdjustment {
    /// Hue rotation in degrees (-180 to 180)
    pub hue: f64,
    /// Saturation delta in percent (-100 to 100)
    pub saturation: f64,
    /// Value delta in percent (-100 to 100)
    pub value: f64,
}

impl HsvAdjustment {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Check if all deltas are zero
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Cyan/magenta/yellow/key adjustment, each delta in percent (-100 to 100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CmykAdjustment {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl CmykAdjustment {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// Check if all deltas are zero
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Luma/in-phase/quadrature adjustment.
///
/// Each delta is a percentage (-100 to 100) added to the component on its
/// native scale, so 10 adds 0.1 to Y, I or Q.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct YiqAdjustment {
    pub luma: f64,
    pub in_phase: f64,
    pub quadrature: f64,
}

impl YiqAdjustment {
    pub fn new(luma: f64, in_phase: f64, quadrature: f64) -> Self {
        Self {
            luma,
            in_phase,
            quadrature,
        }
    }

    /// Check if all deltas are zero
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// A color adjustment in one of the supported models.
///
/// Serialized with a `model` tag, e.g.
/// `{"model": "hsv", "hue": 30, "saturation": 0, "value": -10}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ColorAdjustment {
    Rgb(RgbAdjustment),
    Hsv(HsvAdjustment),
    Cmyk(CmykAdjustment),
    Yiq(YiqAdjustment),
}

impl ColorAdjustment {
    /// Check if the adjustment leaves pixels unchanged (up to rounding)
    pub fn is_identity(&self) -> bool {
        match self {
            ColorAdjustment::Rgb(adj) => adj.is_identity(),
            ColorAdjustment::Hsv(adj) => adj.is_identity(),
            ColorAdjustment::Cmyk(adj) => adj.is_identity(),
            ColorAdjustment::Yiq(adj) => adj.is_identity(),
        }
    }

    /// Lowercase name of the color model.
    pub fn model(&self) -> &'static str {
        match self {
            ColorAdjustment::Rgb(_) => "rgb",
            ColorAdjustment::Hsv(_) => "hsv",
            ColorAdjustment::Cmyk(_) => "cmyk",
            ColorAdjustment::Yiq(_) => "yiq",
        }
    }
}

impl From<RgbAdjustment> for ColorAdjustment {
    fn from(adj: RgbAdjustment) -> Self {
        ColorAdjustment::Rgb(adj)
    }
}

impl From<HsvAdjustment> for ColorAdjustment {
    fn from(adj: HsvAdjustment) -> Self {
        ColorAdjustment::Hsv(adj)
    }
}

impl From<CmykAdjustment> for ColorAdjustment {
    fn from(adj: CmykAdjustment) -> Self {
        ColorAdjustment::Cmyk(adj)
    }
}

impl From<YiqAdjustment> for ColorAdjustment {
    fn from(adj: YiqAdjustment) -> Self {
        ColorAdjustment::Yiq(adj)
    }
}
