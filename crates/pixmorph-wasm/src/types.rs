//! WASM-compatible wrapper types for raster data.
//!
//! This module provides the JavaScript-facing buffer type that wraps the core
//! [`RasterBuffer`], handling the conversion between Rust and JavaScript data
//! representations.

use js_sys::Uint8ClampedArray;
use pixmorph_core::RasterBuffer;
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// An RGBA raster buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The samples live in WASM memory. `pixels()` and `image_data()` copy them
/// out to JavaScript, so keep images in WASM between operations and only
/// extract when drawing or saving.
///
/// Call the generated `free()` to release WASM memory early; otherwise the
/// finalizer handles it.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsRasterBuffer {
    inner: RasterBuffer,
}

#[wasm_bindgen]
impl JsRasterBuffer {
    /// Create a buffer from dimensions and RGBA samples.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA sample data (4 bytes per pixel, row-major order),
    ///   e.g. `ImageData.data`
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterBuffer, JsValue> {
        RasterBuffer::new(width, height, pixels)
            .map(Self::from_buffer)
            .map_err(|e| to_js_error("JsRasterBuffer", e))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the sample buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA samples as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.samples().to_vec()
    }

    /// Returns RGBA samples as a Uint8ClampedArray, ready for
    /// `new ImageData(data, width, height)`.
    pub fn image_data(&self) -> Uint8ClampedArray {
        Uint8ClampedArray::from(self.inner.samples())
    }
}

impl JsRasterBuffer {
    pub(crate) fn from_buffer(inner: RasterBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &RasterBuffer {
        &self.inner
    }

    pub(crate) fn into_buffer(self) -> RasterBuffer {
        self.inner
    }
}

impl From<RasterBuffer> for JsRasterBuffer {
    fn from(inner: RasterBuffer) -> Self {
        Self::from_buffer(inner)
    }
}
