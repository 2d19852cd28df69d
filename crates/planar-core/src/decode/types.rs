//! Core types for indexed image decoding.

use thiserror::Error;

use crate::raster::{Palette, Raster, RasterError};

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file is not a PNG.
    #[error("Unsupported image format: {0} (expected an indexed PNG)")]
    UnsupportedFormat(String),

    /// The PNG stores colors directly rather than palette indices.
    #[error("Image is not indexed: color type {0}")]
    NotIndexed(String),

    /// Indexed PNG without a PLTE chunk.
    #[error("Indexed image has no palette")]
    MissingPalette,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Decoded pixel data didn't match the header dimensions.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// A decoded indexed image: one palette index per pixel plus its palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    pub raster: Raster,
    pub palette: Palette,
    /// Bits per index in the source file (1, 2, 4 or 8).
    pub bit_depth: u8,
}

impl IndexedImage {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }
}
