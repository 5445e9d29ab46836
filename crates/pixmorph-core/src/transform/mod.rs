//! Geometric transforms: lossless quarter turns and flips, and
//! arbitrary-angle rotation.
//!
//! Every transform takes the source buffer by reference and returns a new
//! buffer, which the caller adopts as the current image. The source is never
//! modified, so a failed call leaves the caller's image intact.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Positive rotation angles are clockwise on screen
//! - Quarter turns (up to floating-point residue) are exact pixel
//!   permutations; every other angle resamples

mod orthogonal;
mod rotation;

pub use orthogonal::{
    flip, flip_horizontal, flip_vertical, rotate_180, rotate_270, rotate_90, rotate_quarter, Flip,
    QuarterTurn,
};
pub use rotation::{compute_rotated_bounds, rotate_free, rotate_free_with, ResampleFilter};
