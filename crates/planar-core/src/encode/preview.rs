//! Preview rendering of encoded tilesets.
//!
//! Decodes the tile block back into pixels and colors them with the 12-bit
//! palette, so the result shows exactly what the target hardware will display.
//! The preview is encoded as PNG using the `image` crate's PNG encoder.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb as ImageRgb, RgbImage};
use std::io::Cursor;
use thiserror::Error;

use super::PlanarTileset;
use crate::pack::unpack_tiles;
use crate::palette::expand_color;
use crate::raster::RasterError;

/// Errors that can occur while encoding a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The tileset has no whole tiles to show
    #[error("Invalid dimensions: tileset {width}x{height} holds no whole tiles")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// The tileset dimensions can't be unpacked into a raster
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Render the tile block of a tileset as an RGB image.
///
/// Indices without a palette entry are drawn in magenta so they stand out.
/// The image covers whole tiles only.
///
/// # Errors
/// Returns [`PreviewError::Raster`] if the tileset dimensions are too large.
pub fn render_preview(tileset: &PlanarTileset) -> Result<RgbImage, PreviewError> {
    let raster = unpack_tiles(&tileset.tiles, tileset.width, tileset.height)?;

    Ok(RgbImage::from_fn(raster.width(), raster.height(), |x, y| {
        let index = raster.pixel(x, y) as usize;
        match tileset.palette.get(index) {
            Some(&value) => {
                let color = expand_color(value);
                ImageRgb([color.r, color.g, color.b])
            }
            None => ImageRgb([255, 0, 255]),
        }
    }))
}

/// Render a preview and encode it as PNG bytes.
///
/// # Errors
/// Returns an error if the tileset contains no whole tile or encoding fails.
pub fn encode_preview_png(tileset: &PlanarTileset) -> Result<Vec<u8>, PreviewError> {
    let preview = render_preview(tileset)?;
    let (width, height) = preview.dimensions();

    if width == 0 || height == 0 {
        return Err(PreviewError::InvalidDimensions {
            width: tileset.width,
            height: tileset.height,
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(preview.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| PreviewError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
