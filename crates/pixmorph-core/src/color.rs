//! Conversions between normalized RGB and the HSV, CMYK and YIQ color models.
//!
//! All functions operate on a single pixel with channels in `0.0..=1.0`
//! (I and Q are signed, see [`I_RANGE`] and [`Q_RANGE`]). Converting to a
//! model and straight back reproduces the input to well within 1/255.
//!
//! ## Degenerate inputs
//! - Achromatic pixels (R = G = B) have hue 0.
//! - Pure black has `k = 1` and `c = m = y = 0` in CMYK rather than NaN.

/// Largest magnitude of the YIQ in-phase (I) component for RGB in gamut.
pub const I_RANGE: f64 = 0.5957;

/// Largest magnitude of the YIQ quadrature (Q) component for RGB in gamut.
pub const Q_RANGE: f64 = 0.5226;

/// An RGB channel, used to select the hue formula in [`rgb_to_hsv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// The channel holding the maximum value.
///
/// Ties go to red first, then green, so `(1, 1, 0)` is `Red` and
/// `(0, 1, 1)` is `Green`.
#[inline]
pub fn dominant_channel(r: f64, g: f64, b: f64) -> Channel {
    if r >= g && r >= b {
        Channel::Red
    } else if g >= b {
        Channel::Green
    } else {
        Channel::Blue
    }
}

/// Convert a 0-255 sample to `0.0..=1.0`.
#[inline]
pub fn normalize(sample: u8) -> f64 {
    sample as f64 / 255.0
}

/// Convert a normalized channel back to 0-255, clamping and rounding half
/// away from zero.
#[inline]
pub fn denormalize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert RGB to HSV.
///
/// Returns `(h, s, v)` with hue as a fraction of a full turn in `0.0..1.0`
/// and saturation/value in `0.0..=1.0`.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    if d == 0.0 {
        return (0.0, s, v);
    }

    let h = match dominant_channel(r, g, b) {
        Channel::Red => ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0,
        Channel::Green => ((b - r) / d + 2.0) / 6.0,
        Channel::Blue => ((r - g) / d + 4.0) / 6.0,
    };

    // (g - b) / d + 6 can round up to exactly 6
    let h = if h >= 1.0 { h - 1.0 } else { h };

    (h, s, v)
}

/// Convert HSV back to RGB.
///
/// Uses the six-sector decomposition with `i = floor(h·6) mod 6`, so a hue of
/// exactly 1.0 lands in the same sector as 0.0.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert RGB to CMYK.
///
/// `k = 1 - max(r, g, b)`; pure black yields `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let k = 1.0 - r.max(g).max(b);
    let ink = 1.0 - k;
    if ink <= 0.0 {
        return (0.0, 0.0, 0.0, 1.0);
    }

    let c = (1.0 - r - k) / ink;
    let m = (1.0 - g - k) / ink;
    let y = (1.0 - b - k) / ink;
    (c, m, y, k)
}

/// Convert CMYK back to RGB.
pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    (
        (1.0 - c) * (1.0 - k),
        (1.0 - m) * (1.0 - k),
        (1.0 - y) * (1.0 - k),
    )
}

/// Convert RGB to YIQ (NTSC).
///
/// Y is in `0.0..=1.0`; I and Q are signed, bounded by [`I_RANGE`] and
/// [`Q_RANGE`] up to coefficient rounding.
pub fn rgb_to_yiq(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let i = 0.596 * r - 0.275 * g - 0.321 * b;
    let q = 0.212 * r - 0.523 * g + 0.311 * b;
    (y, i, q)
}

/// Convert YIQ back to RGB. The result is not clamped.
pub fn yiq_to_rgb(y: f64, i: f64, q: f64) -> (f64, f64, f64) {
    let r = y + 0.956 * i + 0.621 * q;
    let g = y - 0.272 * i - 0.647 * q;
    let b = y - 1.106 * i + 1.703 * q;
    (r, g, b)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1.0 / 255.0;

    fn rgb_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
    }

    fn within(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() <= TOLERANCE
            && (a.1 - b.1).abs() <= TOLERANCE
            && (a.2 - b.2).abs() <= TOLERANCE
    }

    proptest! {
        /// Property: HSV round trip reproduces the input.
        #[test]
        fn prop_hsv_round_trip(rgb in rgb_strategy()) {
            let (h, s, v) = rgb_to_hsv(rgb.0, rgb.1, rgb.2);
            let back = hsv_to_rgb(h, s, v);
            prop_assert!(within(back, rgb), "{:?} -> {:?}", rgb, back);
        }

        /// Property: CMYK round trip reproduces the input.
        #[test]
        fn prop_cmyk_round_trip(rgb in rgb_strategy()) {
            let (c, m, y, k) = rgb_to_cmyk(rgb.0, rgb.1, rgb.2);
            let back = cmyk_to_rgb(c, m, y, k);
            prop_assert!(within(back, rgb), "{:?} -> {:?}", rgb, back);
        }

        /// Property: YIQ round trip reproduces the input.
        #[test]
        fn prop_yiq_round_trip(rgb in rgb_strategy()) {
            let (y, i, q) = rgb_to_yiq(rgb.0, rgb.1, rgb.2);
            let back = yiq_to_rgb(y, i, q);
            prop_assert!(within(back, rgb), "{:?} -> {:?}", rgb, back);
        }

        /// Property: HSV components stay in their documented ranges.
        #[test]
        fn prop_hsv_ranges(rgb in rgb_strategy()) {
            let (h, s, v) = rgb_to_hsv(rgb.0, rgb.1, rgb.2);
            prop_assert!((0.0..1.0).contains(&h), "hue {} out of range", h);
            prop_assert!((0.0..=1.0).contains(&s));
            prop_assert!((0.0..=1.0).contains(&v));
        }

        /// Property: CMYK components stay in 0..=1 and never produce NaN.
        #[test]
        fn prop_cmyk_ranges(rgb in rgb_strategy()) {
            let (c, m, y, k) = rgb_to_cmyk(rgb.0, rgb.1, rgb.2);
            for component in [c, m, y, k] {
                prop_assert!(!component.is_nan());
                prop_assert!((-1e-12..=1.0 + 1e-12).contains(&component));
            }
        }
    }
}
