//! PNG encoding for export.
//!
//! PNG is lossless and keeps the alpha channel, so transparent corners left
//! by a free rotation survive the save.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use pixmorph_core::buffer::CHANNELS;
use pixmorph_core::RasterBuffer;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a raster buffer as PNG bytes.
pub fn encode_png(image: &RasterBuffer) -> Result<Vec<u8>, EncodeError> {
    encode_png_raw(image.samples(), image.width(), image.height())
}

/// Encode raw RGBA samples as PNG bytes.
///
/// # Arguments
///
/// * `samples` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Example
///
/// ```
/// use pixmorph_codec::encode_png_raw;
///
/// let samples = vec![128u8; 10 * 10 * 4];
/// let png = encode_png_raw(&samples, 10, 10).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png_raw(samples: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        tracing::warn!(width, height, "refusing to encode empty image");
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * CHANNELS;
    if samples.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: samples.len(),
        });
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(samples, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    tracing::debug!(width, height, bytes = bytes.len(), "encoded PNG");
    Ok(bytes)
}

/// Copy a raster buffer into an `image` RGBA buffer.
pub fn to_rgba_image(image: &RasterBuffer) -> Result<RgbaImage, EncodeError> {
    let (width, height) = image.dimensions();
    RgbaImage::from_raw(width, height, image.samples().to_vec()).ok_or(
        EncodeError::InvalidPixelData {
            expected: (width as usize) * (height as usize) * CHANNELS,
            actual: image.samples().len(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let image = RasterBuffer::filled(100, 50, [128, 64, 32, 255]);
        let png = encode_png(&image).unwrap();

        assert_eq!(&png[..8], &PNG_SIGNATURE);
        // IEND chunk closes the stream
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_encode_png_header_dimensions() {
        let image = RasterBuffer::transparent(7, 3);
        let png = encode_png(&image).unwrap();

        // IHDR follows the signature: length(4) "IHDR"(4) width(4) height(4)
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 7);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 3);
    }

    #[test]
    fn test_encode_png_zero_dimensions() {
        let result = encode_png_raw(&[], 0, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));

        let result = encode_png(&RasterBuffer::transparent(0, 0));
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_wrong_length() {
        // RGB data where RGBA is expected
        let samples = vec![0u8; 4 * 4 * 3];
        let result = encode_png_raw(&samples, 4, 4);
        match result {
            Err(EncodeError::InvalidPixelData { expected, actual }) => {
                assert_eq!(expected, 64);
                assert_eq!(actual, 48);
            }
            other => panic!("Expected InvalidPixelData, got: {:?}", other),
        }
    }

    #[test]
    fn test_encode_png_1x1() {
        let png = encode_png_raw(&[255, 0, 0, 0], 1, 1).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_to_rgba_image() {
        let mut image = RasterBuffer::transparent(2, 2);
        image.set_pixel(1, 0, [10, 20, 30, 40]);

        let rgba = to_rgba_image(&image).unwrap();
        assert_eq!(rgba.dimensions(), (2, 2));
        assert_eq!(rgba.get_pixel(1, 0).0, [10, 20, 30, 40]);
        assert_eq!(rgba.get_pixel(0, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_error_display() {
        let err = EncodeError::InvalidPixelData {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "Invalid pixel data: expected 16 bytes (width * height * 4), got 12"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
