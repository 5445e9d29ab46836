//! Decoding of PNG and JPEG bytes into RGBA raster buffers.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{ImageReader, RgbaImage};
use pixmorph_core::{EditError, RasterBuffer};
use thiserror::Error;

use crate::orientation::{apply_orientation, Orientation};

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not start like any known image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The decoded pixels could not form a valid buffer.
    #[error(transparent)]
    Buffer(#[from] EditError),
}

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw PNG or JPEG file bytes
///
/// # Returns
///
/// An upright RGBA `RasterBuffer`. Images without alpha come back opaque.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8]) -> Result<RasterBuffer, DecodeError> {
    let orientation = get_orientation(bytes);
    let image = decode_image_no_orientation(bytes)?;

    Ok(apply_orientation(&image, orientation)?)
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Use this when the caller handles orientation itself.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<RasterBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let Some(format) = reader.format() else {
        tracing::warn!(len = bytes.len(), "unrecognized image format");
        return Err(DecodeError::InvalidFormat);
    };

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    tracing::debug!(
        ?format,
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    from_rgba_image(img.into_rgba8())
}

/// Read the EXIF orientation tag.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    let exif = match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(_) => return Orientation::Normal,
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Take ownership of an `image` RGBA buffer.
pub fn from_rgba_image(img: RgbaImage) -> Result<RasterBuffer, DecodeError> {
    let (width, height) = img.dimensions();
    let buffer = RasterBuffer::new(width, height, img.into_raw())?;
    buffer.ensure_not_empty()?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_png;

    // Minimal valid JPEG bytes (1x1 grayscale pixel)
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    /// Splice an APP1 Exif segment carrying only an orientation tag in
    /// right after the SOI marker.
    fn jpeg_with_orientation(value: u16) -> Vec<u8> {
        let [hi, lo] = value.to_be_bytes();
        #[rustfmt::skip]
        let app1: [u8; 36] = [
            0xFF, 0xE1, 0x00, 0x22,                         // APP1, length 34
            b'E', b'x', b'i', b'f', 0x00, 0x00,             // Exif header
            b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // big-endian TIFF, IFD0 at 8
            0x00, 0x01,                                     // one entry
            0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, // Orientation, SHORT, count 1
            hi, lo, 0x00, 0x00,                             // value
            0x00, 0x00, 0x00, 0x00,                         // no next IFD
        ];

        let mut bytes = Vec::with_capacity(MINIMAL_JPEG.len() + app1.len());
        bytes.extend_from_slice(&MINIMAL_JPEG[..2]);
        bytes.extend_from_slice(&app1);
        bytes.extend_from_slice(&MINIMAL_JPEG[2..]);
        bytes
    }

    #[test]
    fn test_decode_valid_jpeg() {
        let result = decode_image(MINIMAL_JPEG);
        assert!(result.is_ok(), "Failed to decode valid JPEG: {:?}", result);

        let img = result.unwrap();
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(img.samples().len(), 4);
        // No alpha channel in JPEG: decoded as opaque
        assert_eq!(img.samples()[3], 255);
    }

    #[test]
    fn test_decode_no_orientation() {
        let img = decode_image_no_orientation(MINIMAL_JPEG).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        match decode_image(&[0x00, 0x01, 0x02, 0x03]) {
            Err(DecodeError::InvalidFormat) => {}
            other => panic!("Expected InvalidFormat, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        // Recognizable JPEG header but no image data
        let truncated = &MINIMAL_JPEG[0..20];
        match decode_image(truncated) {
            Err(DecodeError::CorruptedFile(_)) => {}
            other => panic!("Expected CorruptedFile, got: {:?}", other),
        }
    }

    #[test]
    fn test_orientation_no_exif() {
        assert_eq!(get_orientation(MINIMAL_JPEG), Orientation::Normal);
        assert_eq!(get_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_orientation_from_exif() {
        let bytes = jpeg_with_orientation(6);
        assert_eq!(get_orientation(&bytes), Orientation::Rotate90CW);

        let bytes = jpeg_with_orientation(3);
        assert_eq!(get_orientation(&bytes), Orientation::Rotate180);

        // Still decodes with the extra segment in place
        let img = decode_image(&jpeg_with_orientation(8)).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn test_decode_png_keeps_alpha() {
        let source = RasterBuffer::new(
            2,
            1,
            vec![255, 0, 0, 255, 0, 255, 0, 128],
        )
        .unwrap();
        let png = encode_png(&source).unwrap();

        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded, source);
    }

    #[test]
    fn test_from_rgba_image() {
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let buffer = from_rgba_image(img).unwrap();
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.pixel(2, 1), Some([1, 2, 3, 4]));
    }

    #[test]
    fn test_from_rgba_image_empty() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(
            from_rgba_image(img),
            Err(DecodeError::Buffer(EditError::InvalidBuffer { .. }))
        ));
    }
}
