//! Arbitrary-angle rotation with bounding-box expansion.
//!
//! The source is centred on a canvas large enough to hold the rotated
//! rectangle and turned about the canvas centre. Positive angles rotate
//! clockwise on screen (y grows downward), matching a 2D canvas `rotate()`.
//!
//! # Algorithm
//!
//! Rotation uses inverse mapping: every destination pixel centre is mapped
//! back into source space and resampled there.
//! ```text
//! dx = dst_x + 0.5 - dst_w / 2        dy = dst_y + 0.5 - dst_h / 2
//! src_x =  dx * cos(θ) + dy * sin(θ) + src_w / 2
//! src_y = -dx * sin(θ) + dy * cos(θ) + src_h / 2
//! ```
//! Destination pixels whose centre lands outside the source rectangle are
//! fully transparent.
//!
//! Multiples of 90° (up to floating-point residue) are routed to the
//! lossless remaps in [`super::orthogonal`], so a quarter turn never
//! resamples.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::orthogonal::{rotate_180, rotate_270, rotate_90};
use crate::buffer::RasterBuffer;
use crate::error::EditError;

/// Tolerance, in degrees, for treating an angle as an exact quarter turn.
/// Only absorbs rounding residue such as `0.1 * 900.0`; any real offset
/// goes through resampling and the full bounds formula.
const ANGLE_EPSILON: f64 = 1e-9;

/// Bounding-box extents this close to an integer snap to it before `ceil`.
const SNAP_EPSILON: f64 = 1e-9;

/// Resampling filter for arbitrary-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResampleFilter {
    /// Take the source pixel containing the mapped point.
    Nearest,
    /// Interpolate the four nearest source pixels in premultiplied alpha.
    #[default]
    Bilinear,
}

/// Compute the bounding box of a `width × height` rectangle rotated by
/// `angle_degrees`.
///
/// ```text
/// new_w = ceil(w·|cos θ| + h·|sin θ|)
/// new_h = ceil(w·|sin θ| + h·|cos θ|)
/// ```
///
/// Exact quarter turns return the swapped or unchanged dimensions directly.
/// Every other angle follows the formula, however small: 0.0005° on a
/// 100×50 image gives 101×51. Near-integer extents are snapped so floating-point residue such as
/// `cos(π/2) ≈ 6e-17` never adds a spurious row or column.
///
/// # Example
///
/// ```
/// use pixmorph_core::transform::compute_rotated_bounds;
///
/// assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
/// assert_eq!(compute_rotated_bounds(100, 100, 45.0), (142, 142));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    match quarter_turns(angle_degrees) {
        Some(0) | Some(2) => return (width.max(1), height.max(1)),
        Some(_) => return (height.max(1), width.max(1)),
        None => {}
    }

    let radians = angle_degrees * PI / 180.0;
    let sin = radians.sin().abs();
    let cos = radians.cos().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = ceil_snapped(w * cos + h * sin);
    let new_h = ceil_snapped(w * sin + h * cos);

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image by an arbitrary angle using bilinear resampling.
///
/// See [`rotate_free_with`].
pub fn rotate_free(image: &RasterBuffer, angle_degrees: f64) -> Result<RasterBuffer, EditError> {
    rotate_free_with(image, angle_degrees, ResampleFilter::default())
}

/// Rotate an image by an arbitrary angle about its centre.
///
/// The output canvas is expanded to [`compute_rotated_bounds`] so no part of
/// the image is clipped. An angle of zero is valid and returns a copy; hosts
/// usually skip the call instead.
///
/// # Errors
///
/// * `EditError::InvalidBuffer` if the image has zero area.
/// * `EditError::InvalidAngle` if `angle_degrees` is NaN or infinite.
/// * `EditError::DimensionsTooLarge` if the expanded canvas cannot be
///   addressed.
pub fn rotate_free_with(
    image: &RasterBuffer,
    angle_degrees: f64,
    filter: ResampleFilter,
) -> Result<RasterBuffer, EditError> {
    image.ensure_not_empty()?;
    if !angle_degrees.is_finite() {
        tracing::warn!(angle_degrees, "rejecting non-finite rotation angle");
        return Err(EditError::InvalidAngle(angle_degrees));
    }

    if let Some(turns) = quarter_turns(angle_degrees) {
        tracing::trace!(angle_degrees, turns, "quarter turn, using lossless remap");
        return match turns {
            1 => rotate_90(image),
            2 => rotate_180(image),
            3 => rotate_270(image),
            _ => Ok(image.clone()),
        };
    }

    let (src_w, src_h) = (image.width() as f64, image.height() as f64);
    let (dst_w, dst_h) = compute_rotated_bounds(image.width(), image.height(), angle_degrees);
    tracing::debug!(
        angle_degrees,
        ?filter,
        src_width = image.width(),
        src_height = image.height(),
        dst_width = dst_w,
        dst_height = dst_h,
        "rotating by arbitrary angle"
    );

    let radians = angle_degrees * PI / 180.0;
    let cos = radians.cos();
    let sin = radians.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = RasterBuffer::try_transparent(dst_w, dst_h)?;

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Offset of the destination pixel centre from the canvas centre
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            let src_x = dx * cos + dy * sin + src_cx;
            let src_y = -dx * sin + dy * cos + src_cy;

            if src_x < 0.0 || src_x >= src_w || src_y < 0.0 || src_y >= src_h {
                continue;
            }

            let pixel = match filter {
                ResampleFilter::Nearest => sample_nearest(image, src_x, src_y),
                ResampleFilter::Bilinear => sample_bilinear(image, src_x, src_y),
            };
            output.set_pixel(dst_x, dst_y, pixel);
        }
    }

    Ok(output)
}

/// Number of clockwise quarter turns (0..=3) if the angle is within
/// `ANGLE_EPSILON` of a multiple of 90°.
fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    if !angle_degrees.is_finite() {
        return None;
    }
    let normalized = angle_degrees.rem_euclid(360.0);
    let turns = (normalized / 90.0).round();
    if (normalized - turns * 90.0).abs() < ANGLE_EPSILON {
        Some((turns as u8) % 4)
    } else {
        None
    }
}

fn ceil_snapped(value: f64) -> u32 {
    let nearest = value.round();
    if (value - nearest).abs() < SNAP_EPSILON {
        nearest as u32
    } else {
        value.ceil() as u32
    }
}

/// Pick the source pixel containing the point. `(x, y)` is in continuous
/// coordinates where pixel `i` spans `[i, i + 1)`.
fn sample_nearest(image: &RasterBuffer, x: f64, y: f64) -> [u8; 4] {
    let px = (x.floor() as u32).min(image.width() - 1);
    let py = (y.floor() as u32).min(image.height() - 1);
    image.pixel(px, py).unwrap_or([0; 4])
}

/// Interpolate the four pixel centres around the point.
///
/// Color is weighted by alpha so that transparent neighbours do not bleed
/// their (meaningless) color into the result. Taps beyond the border clamp to
/// the edge pixel.
fn sample_bilinear(image: &RasterBuffer, x: f64, y: f64) -> [u8; 4] {
    let max_x = (image.width() - 1) as i64;
    let max_y = (image.height() - 1) as i64;

    // Shift into pixel-centre space
    let u = x - 0.5;
    let v = y - 0.5;
    let x0 = u.floor();
    let y0 = v.floor();
    let fx = u - x0;
    let fy = v - y0;

    let clamp_x = |i: i64| i.clamp(0, max_x) as u32;
    let clamp_y = |i: i64| i.clamp(0, max_y) as u32;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let taps = [
        (clamp_x(x0), clamp_y(y0), (1.0 - fx) * (1.0 - fy)),
        (clamp_x(x0 + 1), clamp_y(y0), fx * (1.0 - fy)),
        (clamp_x(x0), clamp_y(y0 + 1), (1.0 - fx) * fy),
        (clamp_x(x0 + 1), clamp_y(y0 + 1), fx * fy),
    ];

    let mut color = [0.0f64; 3];
    let mut alpha = 0.0f64;
    for (px, py, weight) in taps {
        if weight == 0.0 {
            continue;
        }
        let [r, g, b, a] = image.pixel(px, py).unwrap_or([0; 4]);
        let a = a as f64;
        color[0] += r as f64 * a * weight;
        color[1] += g as f64 * a * weight;
        color[2] += b as f64 * a * weight;
        alpha += a * weight;
    }

    if alpha <= f64::EPSILON {
        return [0; 4];
    }

    let unpremultiply = |c: f64| (c / alpha).clamp(0.0, 255.0).round() as u8;
    [
        unpremultiply(color[0]),
        unpremultiply(color[1]),
        unpremultiply(color[2]),
        alpha.clamp(0.0, 255.0).round() as u8,
    ]
}


// ============================================================================
// Property-Based Tests
// ============================================================================
