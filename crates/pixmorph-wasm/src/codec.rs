//! Image decoding and PNG export bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png } from '@pixmorph/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const png = encode_png(image);
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use pixmorph_codec as codec;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsRasterBuffer;

/// Decode PNG or JPEG bytes into an upright RGBA buffer.
///
/// EXIF orientation is applied, so the result is what the camera saw.
///
/// # Errors
///
/// Returns an error if the format is unrecognized or the file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterBuffer, JsValue> {
    codec::decode_image(bytes)
        .map(JsRasterBuffer::from)
        .map_err(|e| to_js_error("decode_image", e))
}

/// Read the EXIF orientation tag (1-8) without decoding pixels.
///
/// Returns 1 (normal) when the file has no orientation tag.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u32 {
    codec::get_orientation(bytes).exif_value()
}

/// Encode a buffer as PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterBuffer) -> Result<Vec<u8>, JsValue> {
    codec::encode_png(image.buffer()).map_err(|e| to_js_error("encode_png", e))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pixmorph_core::RasterBuffer;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_garbage() {
        let err = decode_image(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(err.as_string().unwrap().contains("format"));
    }

    #[wasm_bindgen_test]
    fn test_encode_empty() {
        let img = JsRasterBuffer::from(RasterBuffer::transparent(0, 0));
        assert!(encode_png(&img).is_err());
    }
}
