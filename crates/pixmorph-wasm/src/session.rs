//! Edit session: the current image plus the snapshot it can be reset to.
//!
//! [`EditSession`] is plain Rust so its behavior is testable on any target;
//! [`JsEditSession`] wraps it for JavaScript.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = JsEditSession.open(bytes);
//! session.rotate_custom(15);
//! session.adjust({ model: "rgb", red: 20 });
//! draw(session.current());
//! session.reset(); // back to the image as loaded
//! ```

use pixmorph_codec::{decode_image, encode_png, DecodeError, EncodeError};
use pixmorph_core::transform::{self, Flip, QuarterTurn};
use pixmorph_core::{adjustments, ColorAdjustment, EditError, RasterBuffer};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::adjustments::parse_adjustment;
use crate::to_js_error;
use crate::types::JsRasterBuffer;

/// Summary of a session for host UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
    /// True if the current image differs from the snapshot
    pub modified: bool,
}

/// The image being edited and the snapshot taken when it was loaded.
///
/// Every operation replaces the current image only on success, so a
/// rejected call leaves the session as it was.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: RasterBuffer,
    current: RasterBuffer,
}

impl EditSession {
    /// Start a session on a loaded image, snapshotting it as the original.
    pub fn new(image: RasterBuffer) -> Result<Self, EditError> {
        image.ensure_not_empty()?;
        Ok(Self {
            current: image.clone(),
            original: image,
        })
    }

    /// Decode PNG or JPEG bytes and start a session on the result.
    pub fn open(bytes: &[u8]) -> Result<Self, DecodeError> {
        let image = decode_image(bytes)?;
        Ok(Self::new(image)?)
    }

    pub fn current(&self) -> &RasterBuffer {
        &self.current
    }

    pub fn original(&self) -> &RasterBuffer {
        &self.original
    }

    pub fn rotate(&mut self, turn: QuarterTurn) -> Result<(), EditError> {
        self.current = transform::rotate_quarter(&self.current, turn)?;
        Ok(())
    }

    pub fn flip(&mut self, axis: Flip) -> Result<(), EditError> {
        self.current = transform::flip(&self.current, axis)?;
        Ok(())
    }

    /// Rotate the current image by a user-entered angle.
    ///
    /// # Returns
    ///
    /// `Ok(false)` for a zero angle (nothing to do), `Ok(true)` once the
    /// image has been rotated.
    ///
    /// # Errors
    ///
    /// `EditError::InvalidAngle` if `degrees` is NaN or infinite.
    pub fn rotate_custom(&mut self, degrees: f64) -> Result<bool, EditError> {
        if !degrees.is_finite() {
            return Err(EditError::InvalidAngle(degrees));
        }
        if degrees == 0.0 {
            return Ok(false);
        }

        self.current = transform::rotate_free(&self.current, degrees)?;
        Ok(true)
    }

    /// Apply a color adjustment to the current image.
    ///
    /// Adjustments stack: each call starts from the already-adjusted image.
    pub fn adjust(&mut self, adjustment: &ColorAdjustment) -> Result<(), EditError> {
        adjustments::apply_adjustment(&mut self.current, adjustment)
    }

    /// Throw away every edit and restore the snapshot, dimensions included.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.original
    }

    /// Encode the current image as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png(&self.current)
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            width: self.current.width(),
            height: self.current.height(),
            original_width: self.original.width(),
            original_height: self.original.height(),
            modified: self.is_modified(),
        }
    }
}

/// JavaScript handle to an [`EditSession`].
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Start a session on an already-decoded buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(image: JsRasterBuffer) -> Result<JsEditSession, JsValue> {
        EditSession::new(image.into_buffer())
            .map(|inner| JsEditSession { inner })
            .map_err(|e| to_js_error("JsEditSession", e))
    }

    /// Decode PNG or JPEG bytes and start a session on the result.
    pub fn open(bytes: &[u8]) -> Result<JsEditSession, JsValue> {
        EditSession::open(bytes)
            .map(|inner| JsEditSession { inner })
            .map_err(|e| to_js_error("JsEditSession.open", e))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.current().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.current().height()
    }

    #[wasm_bindgen(getter)]
    pub fn modified(&self) -> bool {
        self.inner.is_modified()
    }

    /// Copy of the current image for drawing.
    pub fn current(&self) -> JsRasterBuffer {
        self.inner.current().clone().into()
    }

    pub fn rotate_90(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate(QuarterTurn::Cw90)
            .map_err(|e| to_js_error("rotate_90", e))
    }

    pub fn rotate_180(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate(QuarterTurn::Cw180)
            .map_err(|e| to_js_error("rotate_180", e))
    }

    pub fn rotate_270(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate(QuarterTurn::Cw270)
            .map_err(|e| to_js_error("rotate_270", e))
    }

    pub fn flip_vertical(&mut self) -> Result<(), JsValue> {
        self.inner
            .flip(Flip::Vertical)
            .map_err(|e| to_js_error("flip_vertical", e))
    }

    pub fn flip_horizontal(&mut self) -> Result<(), JsValue> {
        self.inner
            .flip(Flip::Horizontal)
            .map_err(|e| to_js_error("flip_horizontal", e))
    }

    /// Rotate by a user-entered angle. Returns false when the angle is zero.
    pub fn rotate_custom(&mut self, degrees: f64) -> Result<bool, JsValue> {
        self.inner
            .rotate_custom(degrees)
            .map_err(|e| to_js_error("rotate_custom", e))
    }

    /// Apply a model-tagged adjustment object, e.g. `{ model: "cmyk", key: 10 }`.
    pub fn adjust(&mut self, adjustment: JsValue) -> Result<(), JsValue> {
        let adjustment = parse_adjustment(adjustment)?;
        self.inner
            .adjust(&adjustment)
            .map_err(|e| to_js_error("adjust", e))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Encode the current image as PNG for download.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_png()
            .map_err(|e| to_js_error("export_png", e))
    }

    /// Session summary as `{ width, height, originalWidth, originalHeight, modified }`.
    pub fn info(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.info())
            .map_err(|e| to_js_error("info", e))
    }
}
