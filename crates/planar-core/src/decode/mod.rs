//! Image decoding for the planar encoder.
//!
//! This module provides functionality for:
//! - Sniffing the input format
//! - Decoding indexed PNGs at 1, 2, 4 or 8 bits per pixel into one index per pixel
//! - Reading the PNG palette as 8-bit RGB triples
//!
//! # Examples
//!
//! ```ignore
//! use planar_core::decode::decode_indexed_png;
//!
//! let bytes = std::fs::read("tiles.png").unwrap();
//! let image = decode_indexed_png(&bytes).unwrap();
//! println!("Decoded {}x{} image, {} colors", image.width(), image.height(), image.palette.len());
//! ```

mod indexed;
mod types;

pub use indexed::decode_indexed_png;
pub use types::{DecodeError, IndexedImage};
