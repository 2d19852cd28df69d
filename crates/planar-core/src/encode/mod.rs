//! Planar tileset encoding.
//!
//! This module provides functionality for:
//! - Encoding an indexed raster and palette into planar tile, scanline and palette blocks
//! - Optional strict validation of the 4bpp tile preconditions
//! - Rendering encoded tilesets back to RGB for previewing
//!
//! # Examples
//!
//! ```ignore
//! use planar_core::encode::{encode, Validation};
//! use planar_core::{Palette, Raster, Rgb};
//!
//! let raster = Raster::filled(8, 8, 1).unwrap();
//! let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
//! let tileset = encode(&raster, &palette, Validation::Strict).unwrap();
//! println!("Encoded {} bytes", tileset.data().len());
//! ```

mod preview;
mod tileset;

pub use preview::{encode_preview_png, render_preview, PreviewError};
pub use tileset::{encode, validate, EncodeError, PlanarTileset, Validation, MAX_PALETTE_LEN};
