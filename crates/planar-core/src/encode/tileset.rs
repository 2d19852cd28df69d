//! Tileset encoding: raster + palette to the three planar output blocks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pack::{pack_linear, pack_tiles, BITS_PER_PIXEL};
use crate::palette::quantize_palette;
use crate::raster::{Palette, Raster, TILE_SIZE};

/// Colors addressable by a 4bpp index.
pub const MAX_PALETTE_LEN: usize = 1 << BITS_PER_PIXEL;

/// How strictly input preconditions are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Encode whatever is given: partial trailing tiles are dropped and
    /// indices wider than 4 bits lose their high bits. Problems are logged.
    #[default]
    Lenient,
    /// Reject input that would be silently truncated.
    Strict,
}

/// Input rejected in [`Validation::Strict`] mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Width or height is not a multiple of the tile size
    #[error("Invalid dimensions: {width}x{height} is not a multiple of 8 in both directions")]
    UnalignedDimensions { width: u32, height: u32 },

    /// Palette has more entries than 4 bits can address
    #[error("Palette has {0} entries, at most 16 fit in 4 bits per pixel")]
    UnsupportedPaletteSize(usize),

    /// A pixel refers to a color the palette doesn't have
    #[error("Pixel ({x}, {y}) uses index {index}, palette has {palette_len} entries")]
    IndexOutOfPalette {
        x: u32,
        y: u32,
        index: u8,
        palette_len: usize,
    },
}

/// The encoded output: planar tile data, planar scanline data and the
/// 12-bit palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarTileset {
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// Output of [`pack_tiles`].
    pub tiles: Vec<u8>,
    /// Output of [`pack_linear`].
    pub linear: Vec<u8>,
    /// Output of [`quantize_palette`].
    pub palette: Vec<u16>,
}

impl PlanarTileset {
    /// The byte array as emitted: the tile block followed by the linear block.
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.tiles.len() + self.linear.len());
        data.extend_from_slice(&self.tiles);
        data.extend_from_slice(&self.linear);
        data
    }

    /// Number of whole tiles in the tile block.
    pub fn tile_count(&self) -> usize {
        (self.width / TILE_SIZE) as usize * (self.height / TILE_SIZE) as usize
    }
}

/// Check the raster and palette against the 4bpp tile preconditions.
///
/// # Errors
/// Returns the first violated precondition, in the order: empty image,
/// unaligned dimensions, oversized palette, out-of-range index.
pub fn validate(raster: &Raster, palette: &Palette) -> Result<(), EncodeError> {
    let (width, height) = (raster.width(), raster.height());

    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage { width, height });
    }

    if !raster.is_tile_aligned() {
        return Err(EncodeError::UnalignedDimensions { width, height });
    }

    if palette.len() > MAX_PALETTE_LEN {
        return Err(EncodeError::UnsupportedPaletteSize(palette.len()));
    }

    for y in 0..height {
        for x in 0..width {
            let index = raster.pixel(x, y);
            if index as usize >= palette.len() {
                return Err(EncodeError::IndexOutOfPalette {
                    x,
                    y,
                    index,
                    palette_len: palette.len(),
                });
            }
        }
    }

    Ok(())
}

/// Encode a raster and palette into planar blocks.
///
/// In [`Validation::Lenient`] mode this never fails; see [`validate`] for
/// the checks [`Validation::Strict`] adds.
pub fn encode(
    raster: &Raster,
    palette: &Palette,
    validation: Validation,
) -> Result<PlanarTileset, EncodeError> {
    match validation {
        Validation::Strict => validate(raster, palette)?,
        Validation::Lenient => warn_on_truncation(raster),
    }

    let tileset = PlanarTileset {
        width: raster.width(),
        height: raster.height(),
        tiles: pack_tiles(raster),
        linear: pack_linear(raster),
        palette: quantize_palette(palette),
    };

    log::debug!(
        "Encoded {}x{} raster: {} tiles, {} tile bytes, {} linear bytes, {} colors",
        tileset.width,
        tileset.height,
        tileset.tile_count(),
        tileset.tiles.len(),
        tileset.linear.len(),
        tileset.palette.len()
    );

    Ok(tileset)
}

fn warn_on_truncation(raster: &Raster) {
    if !raster.is_tile_aligned() {
        log::warn!(
            "{}x{} is not a multiple of 8, partial tiles will be dropped",
            raster.width(),
            raster.height()
        );
    }

    if let Some(max) = raster.max_index() {
        if max as usize >= MAX_PALETTE_LEN {
            log::warn!("Index {max} does not fit in 4 bits, high bits will be dropped");
        }
    }
}
