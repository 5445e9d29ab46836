//! WASM bindings for geometric transforms.
//!
//! Each function returns a new `JsRasterBuffer`; the input is left untouched
//! so the caller decides whether to adopt the result.

use pixmorph_core::{transform, ResampleFilter};
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsRasterBuffer;

/// Rotate 90° clockwise. Width and height swap.
#[wasm_bindgen]
pub fn rotate_90(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    transform::rotate_90(image.buffer())
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("rotate_90", e))
}

/// Rotate 180°.
#[wasm_bindgen]
pub fn rotate_180(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    transform::rotate_180(image.buffer())
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("rotate_180", e))
}

/// Rotate 270° clockwise (90° counter-clockwise). Width and height swap.
#[wasm_bindgen]
pub fn rotate_270(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    transform::rotate_270(image.buffer())
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("rotate_270", e))
}

/// Mirror top to bottom.
#[wasm_bindgen]
pub fn flip_vertical(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    transform::flip_vertical(image.buffer())
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("flip_vertical", e))
}

/// Mirror left to right.
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsRasterBuffer) -> Result<JsRasterBuffer, JsValue> {
    transform::flip_horizontal(image.buffer())
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("flip_horizontal", e))
}

/// Rotate by an arbitrary angle around the image center.
///
/// The output canvas grows to hold the whole rotated image; uncovered
/// corners are transparent.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = clockwise)
/// * `smooth` - Bilinear resampling when true, nearest-neighbour otherwise
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate_free(image, 15.0, true);
/// ctx.putImageData(new ImageData(rotated.image_data(), rotated.width, rotated.height), 0, 0);
/// ```
#[wasm_bindgen]
pub fn rotate_free(
    image: &JsRasterBuffer,
    angle_degrees: f64,
    smooth: bool,
) -> Result<JsRasterBuffer, JsValue> {
    let filter = if smooth {
        ResampleFilter::Bilinear
    } else {
        ResampleFilter::Nearest
    };

    transform::rotate_free_with(image.buffer(), angle_degrees, filter)
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("rotate_free", e))
}
