//! Pixmorph WASM - WebAssembly bindings for pixmorph
//!
//! This crate exposes the pixmorph-core transforms and color adjustments,
//! plus pixmorph-codec decoding and PNG export, to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - `JsRasterBuffer`, the RGBA buffer handed across the boundary
//! - `transform` - Quarter turns, flips and free rotation
//! - `adjustments` - RGB, HSV, CMYK and YIQ adjustments
//! - `codec` - Image decoding and PNG export
//! - `session` - Edit session with snapshot and reset
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRasterBuffer, rotate_free } from '@pixmorph/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const image = new JsRasterBuffer(data.width, data.height, new Uint8Array(data.data.buffer));
//! const rotated = rotate_free(image, 15, true);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod codec;
mod session;
mod transform;
mod types;

// Re-export public types
pub use adjustments::{adjust_cmyk, adjust_hsv, adjust_rgb, adjust_yiq, apply_adjustment};
pub use codec::{decode_image, encode_png, get_orientation};
pub use session::{EditSession, JsEditSession, SessionInfo};
pub use transform::{flip_horizontal, flip_vertical, rotate_180, rotate_270, rotate_90, rotate_free};
pub use types::JsRasterBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log a rejected call to the browser console and turn the error into the
/// string value thrown to JavaScript.
pub(crate) fn to_js_error(operation: &str, err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::warn_1(&JsValue::from_str(&format!("pixmorph {operation}: {message}")));
    JsValue::from_str(&message)
}
