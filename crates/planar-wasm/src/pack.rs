//! Low-level packing WASM bindings.
//!
//! These expose the individual encoder stages for callers that decode images
//! themselves (for example from a `<canvas>` with a known palette).
//!
//! # Functions
//!
//! - [`pack_tiles`] - Pack palette indices tile by tile
//! - [`pack_linear`] - Pack palette indices as whole-width scanlines
//! - [`quantize_palette`] - Quantize packed RGB triples to 12-bit colors

use planar_core::{pack, palette, Palette, Raster};
use wasm_bindgen::prelude::*;

fn raster_from(indices: &[u8], width: u32, height: u32) -> Result<Raster, JsValue> {
    Raster::new(width, height, indices.to_vec()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pack row-major palette indices into the planar tile layout.
///
/// # Arguments
///
/// * `indices` - One palette index per pixel as a `Uint8Array`, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if `indices.length != width * height`, or if
/// `width * height` overflows.
#[wasm_bindgen]
pub fn pack_tiles(indices: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    raster_from(indices, width, height).map(|raster| pack::pack_tiles(&raster))
}

/// Pack row-major palette indices into the planar scanline layout.
///
/// Same arguments and errors as [`pack_tiles`].
#[wasm_bindgen]
pub fn pack_linear(indices: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    raster_from(indices, width, height).map(|raster| pack::pack_linear(&raster))
}

/// Quantize a palette given as packed `R, G, B` bytes to 12-bit `0x0RGB` values.
///
/// A trailing incomplete triple is ignored.
#[wasm_bindgen]
pub fn quantize_palette(rgb: &[u8]) -> Vec<u16> {
    palette::quantize_palette(&Palette::from_rgb_bytes(rgb))
}
