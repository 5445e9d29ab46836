//! Color adjustment WASM bindings.
//!
//! The per-model functions take the slider values directly. `apply_adjustment`
//! takes a plain object tagged with its model, e.g.
//! `{ model: "hsv", hue: 30, saturation: 0, value: -10 }`, so the host can
//! store and replay adjustments as JSON.

use pixmorph_core::{adjustments, ColorAdjustment};
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsRasterBuffer;

/// Add deltas (-255 to 255) to the red, green and blue channels.
#[wasm_bindgen]
pub fn adjust_rgb(
    image: &JsRasterBuffer,
    red: i32,
    green: i32,
    blue: i32,
) -> Result<JsRasterBuffer, JsValue> {
    let mut output = image.buffer().clone();
    adjustments::apply_rgb(&mut output, red, green, blue)
        .map_err(|e| to_js_error("adjust_rgb", e))?;
    Ok(output.into())
}

/// Shift hue (degrees) and saturation/value (percent).
#[wasm_bindgen]
pub fn adjust_hsv(
    image: &JsRasterBuffer,
    hue: f64,
    saturation: f64,
    value: f64,
) -> Result<JsRasterBuffer, JsValue> {
    let mut output = image.buffer().clone();
    adjustments::apply_hsv(&mut output, hue, saturation, value)
        .map_err(|e| to_js_error("adjust_hsv", e))?;
    Ok(output.into())
}

/// Shift cyan, magenta, yellow and key (percent).
#[wasm_bindgen]
pub fn adjust_cmyk(
    image: &JsRasterBuffer,
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
) -> Result<JsRasterBuffer, JsValue> {
    let mut output = image.buffer().clone();
    adjustments::apply_cmyk(&mut output, cyan, magenta, yellow, key)
        .map_err(|e| to_js_error("adjust_cmyk", e))?;
    Ok(output.into())
}

/// Shift luma, in-phase and quadrature (percent).
#[wasm_bindgen]
pub fn adjust_yiq(
    image: &JsRasterBuffer,
    luma: f64,
    in_phase: f64,
    quadrature: f64,
) -> Result<JsRasterBuffer, JsValue> {
    let mut output = image.buffer().clone();
    adjustments::apply_yiq(&mut output, luma, in_phase, quadrature)
        .map_err(|e| to_js_error("adjust_yiq", e))?;
    Ok(output.into())
}

/// Apply an adjustment described by a model-tagged object.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const warmer = apply_adjustment(image, { model: "yiq", inPhase: 8 });
/// ```
///
/// # Errors
/// Returns error if the object has an unknown `model` or mistyped fields
#[wasm_bindgen]
pub fn apply_adjustment(
    image: &JsRasterBuffer,
    adjustment: JsValue,
) -> Result<JsRasterBuffer, JsValue> {
    let adjustment = parse_adjustment(adjustment)?;
    let mut output = image.buffer().clone();
    adjustments::apply_adjustment(&mut output, &adjustment)
        .map_err(|e| to_js_error("apply_adjustment", e))?;
    Ok(output.into())
}

pub(crate) fn parse_adjustment(value: JsValue) -> Result<ColorAdjustment, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| to_js_error("Invalid color adjustment", e))
}
