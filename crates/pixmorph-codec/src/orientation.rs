//! EXIF orientation tag and its mapping onto the lossless transforms.

use pixmorph_core::{flip_horizontal, flip_vertical, rotate_180, rotate_270, rotate_90};
use pixmorph_core::{EditError, RasterBuffer};
use serde::{Deserialize, Serialize};

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Mirrored left to right.
    FlipHorizontal = 2,
    /// Upside down.
    Rotate180 = 3,
    /// Mirrored top to bottom.
    FlipVertical = 4,
    /// Mirrored across the main diagonal.
    Transpose = 5,
    /// Needs a 90° clockwise turn to display upright.
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal.
    Transverse = 7,
    /// Needs a 270° clockwise turn to display upright.
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if correcting this orientation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }

    /// The raw EXIF tag value.
    pub fn exif_value(self) -> u32 {
        self as u32
    }
}

impl From<u32> for Orientation {
    /// Unknown values fall back to `Normal`.
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Bring a buffer stored with `orientation` upright.
///
/// Every orientation is an exact pixel permutation built from the core's
/// quarter turns and flips, so no resampling happens.
pub fn apply_orientation(
    image: &RasterBuffer,
    orientation: Orientation,
) -> Result<RasterBuffer, EditError> {
    tracing::trace!(?orientation, "applying EXIF orientation");
    match orientation {
        Orientation::Normal => {
            image.ensure_not_empty()?;
            Ok(image.clone())
        }
        Orientation::FlipHorizontal => flip_horizontal(image),
        Orientation::Rotate180 => rotate_180(image),
        Orientation::FlipVertical => flip_vertical(image),
        Orientation::Transpose => flip_horizontal(&rotate_90(image)?),
        Orientation::Rotate90CW => rotate_90(image),
        Orientation::Transverse => flip_horizontal(&rotate_270(image)?),
        Orientation::Rotate270CW => rotate_270(image),
    }
}
