//! The RGBA raster buffer every operation reads and writes.

use crate::error::EditError;

/// Number of samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An 8-bit RGBA image held in memory.
///
/// Samples are stored row-major with the origin at the top-left corner, four
/// bytes per pixel in R, G, B, A order. The sample vector always holds exactly
/// `width * height * 4` bytes; the fields are private so that invariant can
/// only be established through the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl RasterBuffer {
    /// Create a buffer from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns `EditError::SampleLength` if `samples.len()` is not
    /// `width * height * 4`, or `EditError::DimensionsTooLarge` if that size
    /// does not fit in `usize`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, EditError> {
        let expected = checked_byte_len(width, height)?;
        if samples.len() != expected {
            return Err(EditError::SampleLength {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a buffer with every pixel set to `rgba`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut buffer = Self::transparent(width, height);
        for chunk in buffer.samples.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgba);
        }
        buffer
    }

    /// Create a fully transparent buffer.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`; use
    /// [`try_transparent`](Self::try_transparent) for sizes computed at runtime.
    pub fn transparent(width: u32, height: u32) -> Self {
        match Self::try_transparent(width, height) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a fully transparent buffer, failing if its size overflows.
    pub fn try_transparent(width: u32, height: u32) -> Result<Self, EditError> {
        let len = checked_byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            samples: vec![0u8; len],
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable RGBA samples. The slice cannot change length, so the size
    /// invariant holds across any write through it.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Consume the buffer, returning its sample vector.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Byte offset of the pixel at `(x, y)`. Caller guarantees bounds.
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Read the pixel at `(x, y)`, or `None` if it lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.samples[idx..idx + CHANNELS]);
        Some(rgba)
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.index(x, y);
        self.samples[idx..idx + CHANNELS].copy_from_slice(&rgba);
        true
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the sample buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Reject zero-area buffers with `EditError::InvalidBuffer`.
    pub fn ensure_not_empty(&self) -> Result<(), EditError> {
        if self.is_empty() {
            tracing::warn!(
                width = self.width,
                height = self.height,
                "rejecting zero-area buffer"
            );
            return Err(EditError::InvalidBuffer {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// `width * height * 4`, or `DimensionsTooLarge` when that overflows `usize`
/// (reachable with 16-bit-per-side images on 32-bit targets).
#[inline]
fn checked_byte_len(width: u32, height: u32) -> Result<usize, EditError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(EditError::DimensionsTooLarge { width, height })
}
