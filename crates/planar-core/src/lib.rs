//! Planar Core - 4bpp planar tile encoding
//!
//! This crate converts indexed images into the packed 4-bit-per-pixel planar
//! format used by tile-based video hardware, together with a 12-bit palette,
//! and renders the result as C source arrays.
//!
//! # Module Structure
//!
//! - `raster` - Indexed raster and palette input types
//! - `pack` - Bit-plane packing of tiles and scanlines
//! - `palette` - 12-bit palette quantization
//! - `encode` - Tileset encoding, validation and preview rendering
//! - `decode` - Indexed PNG decoding
//! - `emit` - C declaration and definition rendering
//! - `convert` - The end-to-end pipeline

pub mod convert;
pub mod decode;
pub mod emit;
pub mod encode;
pub mod pack;
pub mod palette;
pub mod raster;

pub use convert::{convert_image, convert_png, Artifacts, ConvertError, ConvertOptions};
pub use encode::{encode, EncodeError, PlanarTileset, Validation};
pub use pack::{pack_linear, pack_run, pack_tiles, unpack_tiles};
pub use palette::quantize_palette;
pub use raster::{Palette, Raster, RasterError, Rgb, TILE_SIZE};
