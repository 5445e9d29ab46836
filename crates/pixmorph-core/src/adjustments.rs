//! Per-pixel color adjustment in the RGB, HSV, CMYK and YIQ models.
//!
//! Each adjuster walks every pixel, converts it into its model, adds the
//! deltas, clamps each component to the model's range, converts back and
//! rounds to 0-255. Alpha is never touched.
//!
//! ## Delta Scales
//! - RGB: integer added on the 0-255 scale
//! - HSV: hue in degrees (÷360, wraps), saturation/value in percent (÷100)
//! - CMYK: percent (÷100) per component
//! - YIQ: percent (÷100) added on each component's native scale
//!
//! Deltas outside the documented slider ranges are accepted; they simply
//! saturate at the clamp.
//!
//! ## Repeated Adjustments
//! Clamping happens on every call, so two calls are not equivalent to one
//! call with the summed deltas: `+100` then `-100` red on a pixel with red
//! 200 gives 155, not 200. Hosts that want slider semantics should re-apply
//! the total delta to the original image.

use crate::buffer::{RasterBuffer, CHANNELS};
use crate::color::{
    cmyk_to_rgb, denormalize, hsv_to_rgb, normalize, rgb_to_cmyk, rgb_to_hsv, rgb_to_yiq,
    yiq_to_rgb, I_RANGE, Q_RANGE,
};
use crate::error::EditError;
use crate::ColorAdjustment;

/// Apply any supported color adjustment in place.
///
/// An all-zero RGB adjustment is an exact identity and skips the pixel pass;
/// the buffer is still validated.
pub fn apply_adjustment(
    image: &mut RasterBuffer,
    adjustment: &ColorAdjustment,
) -> Result<(), EditError> {
    match adjustment {
        ColorAdjustment::Rgb(adj) => {
            if adj.is_identity() {
                return image.ensure_not_empty();
            }
            apply_rgb(image, adj.red, adj.green, adj.blue)
        }
        ColorAdjustment::Hsv(adj) => apply_hsv(image, adj.hue, adj.saturation, adj.value),
        ColorAdjustment::Cmyk(adj) => {
            apply_cmyk(image, adj.cyan, adj.magenta, adj.yellow, adj.key)
        }
        ColorAdjustment::Yiq(adj) => apply_yiq(image, adj.luma, adj.in_phase, adj.quadrature),
    }
}

/// Add integer deltas to the R, G and B channels, clamping to 0-255.
///
/// # Example
/// ```
/// use pixmorph_core::{adjustments::apply_rgb, RasterBuffer};
///
/// let mut image = RasterBuffer::new(1, 1, vec![250, 10, 5, 255]).unwrap();
/// apply_rgb(&mut image, 10, -20, 300).unwrap();
/// assert_eq!(image.samples(), &[255, 0, 255, 255]);
/// ```
pub fn apply_rgb(
    image: &mut RasterBuffer,
    red: i32,
    green: i32,
    blue: i32,
) -> Result<(), EditError> {
    image.ensure_not_empty()?;
    tracing::debug!(
        red,
        green,
        blue,
        pixels = image.pixel_count(),
        "applying RGB adjustment"
    );

    let deltas = [red, green, blue];
    for chunk in image.samples_mut().chunks_exact_mut(CHANNELS) {
        for (sample, delta) in chunk.iter_mut().zip(deltas) {
            *sample = (*sample as i32).saturating_add(delta).clamp(0, 255) as u8;
        }
    }
    Ok(())
}

/// Shift hue (degrees), saturation and value (percent).
///
/// Hue wraps around the color wheel; saturation and value clamp to 0-1.
pub fn apply_hsv(
    image: &mut RasterBuffer,
    hue: f64,
    saturation: f64,
    value: f64,
) -> Result<(), EditError> {
    image.ensure_not_empty()?;
    tracing::debug!(
        hue,
        saturation,
        value,
        pixels = image.pixel_count(),
        "applying HSV adjustment"
    );

    let hue_shift = hue / 360.0;
    let sat_shift = saturation / 100.0;
    let val_shift = value / 100.0;

    map_rgb(image, |r, g, b| {
        let (h, s, v) = rgb_to_hsv(r, g, b);
        let h = wrap_unit(h + hue_shift);
        let s = (s + sat_shift).clamp(0.0, 1.0);
        let v = (v + val_shift).clamp(0.0, 1.0);
        hsv_to_rgb(h, s, v)
    });
    Ok(())
}

/// Shift cyan, magenta, yellow and key (percent), each clamped to 0-1.
pub fn apply_cmyk(
    image: &mut RasterBuffer,
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
) -> Result<(), EditError> {
    image.ensure_not_empty()?;
    tracing::debug!(
        cyan,
        magenta,
        yellow,
        key,
        pixels = image.pixel_count(),
        "applying CMYK adjustment"
    );

    let shifts = [cyan / 100.0, magenta / 100.0, yellow / 100.0, key / 100.0];

    map_rgb(image, |r, g, b| {
        let (c, m, y, k) = rgb_to_cmyk(r, g, b);
        cmyk_to_rgb(
            (c + shifts[0]).clamp(0.0, 1.0),
            (m + shifts[1]).clamp(0.0, 1.0),
            (y + shifts[2]).clamp(0.0, 1.0),
            (k + shifts[3]).clamp(0.0, 1.0),
        )
    });
    Ok(())
}

/// Shift luma, in-phase and quadrature (percent of the native scale).
///
/// Y clamps to 0-1, I to ±0.5957 and Q to ±0.5226. The converted RGB is
/// clamped to 0-255, since a YIQ triple can fall outside the RGB cube.
pub fn apply_yiq(
    image: &mut RasterBuffer,
    luma: f64,
    in_phase: f64,
    quadrature: f64,
) -> Result<(), EditError> {
    image.ensure_not_empty()?;
    tracing::debug!(
        luma,
        in_phase,
        quadrature,
        pixels = image.pixel_count(),
        "applying YIQ adjustment"
    );

    let y_shift = luma / 100.0;
    let i_shift = in_phase / 100.0;
    let q_shift = quadrature / 100.0;

    map_rgb(image, |r, g, b| {
        let (y, i, q) = rgb_to_yiq(r, g, b);
        yiq_to_rgb(
            (y + y_shift).clamp(0.0, 1.0),
            (i + i_shift).clamp(-I_RANGE, I_RANGE),
            (q + q_shift).clamp(-Q_RANGE, Q_RANGE),
        )
    });
    Ok(())
}

/// Run `transform` on the normalized RGB of every pixel, writing the result
/// back clamped and rounded. Alpha is left alone.
fn map_rgb<F>(image: &mut RasterBuffer, transform: F)
where
    F: Fn(f64, f64, f64) -> (f64, f64, f64),
{
    for chunk in image.samples_mut().chunks_exact_mut(CHANNELS) {
        let (r, g, b) = transform(normalize(chunk[0]), normalize(chunk[1]), normalize(chunk[2]));
        chunk[0] = denormalize(r);
        chunk[1] = denormalize(g);
        chunk[2] = denormalize(b);
    }
}

/// Wrap a hue fraction into `0.0..1.0`.
#[inline]
fn wrap_unit(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
