//! Pixmorph Codec - getting pixels into and out of the editor.
//!
//! This crate provides the two collaborators around the core kernel:
//! - Acquisition: decode PNG or JPEG bytes into an upright RGBA
//!   [`RasterBuffer`](pixmorph_core::RasterBuffer), honoring the EXIF
//!   orientation tag
//! - Export: encode a buffer as PNG
//!
//! All operations are synchronous. Decoding failures are reported here and
//! never reach the core.
//!
//! # Examples
//!
//! ```ignore
//! use pixmorph_codec::{decode_image, encode_png};
//! use pixmorph_core::rotate_90;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! let png = encode_png(&rotate_90(&image).unwrap()).unwrap();
//! ```

mod decode;
mod encode;
mod orientation;

pub use decode::{
    decode_image, decode_image_no_orientation, from_rgba_image, get_orientation, DecodeError,
};
pub use encode::{encode_png, encode_png_raw, to_rgba_image, EncodeError};
pub use orientation::{apply_orientation, Orientation};
