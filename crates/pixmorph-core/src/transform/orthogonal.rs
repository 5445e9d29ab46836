//! Lossless rotations by multiples of 90° and mirror flips.
//!
//! Each operation is a bijection over the pixel grid: every source pixel is
//! copied, all four channels unchanged, to exactly one destination pixel. No
//! interpolation takes place.
//!
//! Mappings from source `(x, y)` in a `w × h` image:
//! ```text
//! rotate_90        (h-1-y, x)        output h × w
//! rotate_180       (w-1-x, h-1-y)    output w × h
//! rotate_270       (y, w-1-x)        output h × w
//! flip_vertical    (x, h-1-y)        output w × h
//! flip_horizontal  (w-1-x, y)        output w × h
//! ```

use serde::{Deserialize, Serialize};

use crate::buffer::{RasterBuffer, CHANNELS};
use crate::error::EditError;

/// A clockwise rotation by a whole number of quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuarterTurn {
    Cw90,
    Cw180,
    Cw270,
}

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flip {
    /// Mirror left and right.
    Horizontal,
    /// Mirror top and bottom.
    Vertical,
}

/// Rotate 90° clockwise. Output dimensions are `(height, width)`.
pub fn rotate_90(image: &RasterBuffer) -> Result<RasterBuffer, EditError> {
    let (w, h) = image.dimensions();
    remap(image, h, w, |x, y| (h - 1 - y, x))
}

/// Rotate 180°. Dimensions are unchanged.
pub fn rotate_180(image: &RasterBuffer) -> Result<RasterBuffer, EditError> {
    let (w, h) = image.dimensions();
    remap(image, w, h, |x, y| (w - 1 - x, h - 1 - y))
}

/// Rotate 270° clockwise (90° counter-clockwise). Output dimensions are
/// `(height, width)`.
pub fn rotate_270(image: &RasterBuffer) -> Result<RasterBuffer, EditError> {
    let (w, h) = image.dimensions();
    remap(image, h, w, |x, y| (y, w - 1 - x))
}

/// Mirror top and bottom.
pub fn flip_vertical(image: &RasterBuffer) -> Result<RasterBuffer, EditError> {
    let (w, h) = image.dimensions();
    remap(image, w, h, |x, y| (x, h - 1 - y))
}

/// Mirror left and right.
pub fn flip_horizontal(image: &RasterBuffer) -> Result<RasterBuffer, EditError> {
    let (w, h) = image.dimensions();
    remap(image, w, h, |x, y| (w - 1 - x, y))
}

/// Rotate clockwise by the given number of quarter turns.
pub fn rotate_quarter(image: &RasterBuffer, turn: QuarterTurn) -> Result<RasterBuffer, EditError> {
    match turn {
        QuarterTurn::Cw90 => rotate_90(image),
        QuarterTurn::Cw180 => rotate_180(image),
        QuarterTurn::Cw270 => rotate_270(image),
    }
}

/// Mirror the image along `axis`.
pub fn flip(image: &RasterBuffer, axis: Flip) -> Result<RasterBuffer, EditError> {
    match axis {
        Flip::Horizontal => flip_horizontal(image),
        Flip::Vertical => flip_vertical(image),
    }
}

/// Copy every source pixel to the destination coordinate given by `map`.
///
/// `map` must be a bijection from the source grid onto the
/// `dst_width × dst_height` grid.
fn remap<F>(
    image: &RasterBuffer,
    dst_width: u32,
    dst_height: u32,
    map: F,
) -> Result<RasterBuffer, EditError>
where
    F: Fn(u32, u32) -> (u32, u32),
{
    image.ensure_not_empty()?;
    tracing::debug!(
        src_width = image.width(),
        src_height = image.height(),
        dst_width,
        dst_height,
        "remapping pixel grid"
    );

    let src = image.samples();
    let mut output = vec![0u8; src.len()];

    for y in 0..image.height() {
        for x in 0..image.width() {
            let src_idx = image.index(x, y);
            let (nx, ny) = map(x, y);
            let dst_idx = (ny as usize * dst_width as usize + nx as usize) * CHANNELS;
            output[dst_idx..dst_idx + CHANNELS].copy_from_slice(&src[src_idx..src_idx + CHANNELS]);
        }
    }

    RasterBuffer::new(dst_width, dst_height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a random buffer with small dimensions.
    fn buffer_strategy() -> impl Strategy<Value = RasterBuffer> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let size = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |samples| RasterBuffer::new(w, h, samples).unwrap())
        })
    }

    proptest! {
        /// Property: four quarter turns return the original buffer.
        #[test]
        fn prop_rotate_90_four_times_is_identity(img in buffer_strategy()) {
            let once = rotate_90(&img).unwrap();
            let twice = rotate_90(&once).unwrap();
            let thrice = rotate_90(&twice).unwrap();
            let full = rotate_90(&thrice).unwrap();
            prop_assert_eq!(full, img);
        }

        /// Property: two quarter turns equal a half turn.
        #[test]
        fn prop_rotate_90_twice_is_rotate_180(img in buffer_strategy()) {
            let twice = rotate_90(&rotate_90(&img).unwrap()).unwrap();
            prop_assert_eq!(twice, rotate_180(&img).unwrap());
        }

        /// Property: half turn, vertical flip and horizontal flip are involutions.
        #[test]
        fn prop_involutions(img in buffer_strategy()) {
            prop_assert_eq!(&rotate_180(&rotate_180(&img).unwrap()).unwrap(), &img);
            prop_assert_eq!(&flip_vertical(&flip_vertical(&img).unwrap()).unwrap(), &img);
            prop_assert_eq!(&flip_horizontal(&flip_horizontal(&img).unwrap()).unwrap(), &img);
        }

        /// Property: rotate_270 undoes rotate_90.
        #[test]
        fn prop_rotate_270_inverts_rotate_90(img in buffer_strategy()) {
            let back = rotate_270(&rotate_90(&img).unwrap()).unwrap();
            prop_assert_eq!(back, img);
        }

        /// Property: both flips together equal a half turn.
        #[test]
        fn prop_both_flips_equal_rotate_180(img in buffer_strategy()) {
            let flipped = flip_horizontal(&flip_vertical(&img).unwrap()).unwrap();
            prop_assert_eq!(flipped, rotate_180(&img).unwrap());
        }

        /// Property: remapping never loses or duplicates samples.
        #[test]
        fn prop_sample_multiset_preserved(img in buffer_strategy()) {
            let mut before = img.samples().to_vec();
            let mut after = rotate_90(&img).unwrap().into_samples();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }
}
