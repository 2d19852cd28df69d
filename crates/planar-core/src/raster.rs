//! Indexed raster and palette types.
//!
//! These are the immutable inputs of the encoder: a rectangular grid of 8-bit
//! palette indices and the ordered list of RGB colors they refer to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of a tile in pixels.
pub const TILE_SIZE: u32 = 8;

/// Errors raised when constructing a raster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Index buffer length doesn't match the dimensions
    #[error("Invalid index data: expected {expected} bytes (width * height), got {actual}")]
    InvalidIndexData { expected: usize, actual: usize },

    /// `width * height` doesn't fit in addressable memory
    #[error("Dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },
}

/// Pixel count of a `width` x `height` raster, if a buffer that size can exist.
fn pixel_count(width: u32, height: u32) -> Result<usize, RasterError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&count| count <= isize::MAX as usize)
        .ok_or(RasterError::DimensionsTooLarge { width, height })
}

/// A decoded image holding one palette index per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    /// Palette indices in row-major order (1 byte per pixel).
    indices: Vec<u8>,
}

impl Raster {
    /// Create a raster from row-major palette indices.
    ///
    /// # Errors
    /// Returns [`RasterError::DimensionsTooLarge`] if `width * height` overflows,
    /// or [`RasterError::InvalidIndexData`] if `indices.len() != width * height`.
    pub fn new(width: u32, height: u32, indices: Vec<u8>) -> Result<Self, RasterError> {
        let expected = pixel_count(width, height)?;
        if indices.len() != expected {
            return Err(RasterError::InvalidIndexData {
                expected,
                actual: indices.len(),
            });
        }
        Ok(Self {
            width,
            height,
            indices,
        })
    }

    /// Create a raster where every pixel has the same index.
    pub fn filled(width: u32, height: u32, index: u8) -> Result<Self, RasterError> {
        Ok(Self {
            width,
            height,
            indices: vec![index; pixel_count(width, height)?],
        })
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> u8,
    ) -> Result<Self, RasterError> {
        let mut indices = Vec::with_capacity(pixel_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                indices.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            indices,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette index at `(x, y)`.
    ///
    /// Panics if the coordinate lies outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.indices[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Row-major palette indices.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Number of whole tile columns. A partial trailing column is not counted.
    pub fn tiles_wide(&self) -> u32 {
        self.width / TILE_SIZE
    }

    /// Number of whole tile rows. A partial trailing row is not counted.
    pub fn tiles_high(&self) -> u32 {
        self.height / TILE_SIZE
    }

    /// Check that both dimensions are multiples of the tile size.
    pub fn is_tile_aligned(&self) -> bool {
        self.width % TILE_SIZE == 0 && self.height % TILE_SIZE == 0
    }

    /// Highest palette index used, or `None` for an empty raster.
    pub fn max_index(&self) -> Option<u8> {
        self.indices.iter().copied().max()
    }
}

/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Ordered list of colors addressed by raster indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Build a palette from packed `R, G, B` triples, as found in a PNG `PLTE`
    /// chunk. A trailing incomplete triple is ignored.
    pub fn from_rgb_bytes(bytes: &[u8]) -> Self {
        let colors = bytes
            .chunks_exact(3)
            .map(|c| Rgb::from([c[0], c[1], c[2]]))
            .collect();
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_new_validates_length() {
        let result = Raster::new(8, 8, vec![0u8; 63]);
        assert_eq!(
            result,
            Err(RasterError::InvalidIndexData {
                expected: 64,
                actual: 63
            })
        );

        assert!(Raster::new(8, 8, vec![0u8; 64]).is_ok());
    }

    #[test]
    fn test_raster_rejects_oversized_dimensions() {
        let too_large = Err(RasterError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        });
        assert_eq!(Raster::new(u32::MAX, u32::MAX, vec![]), too_large);
        assert_eq!(Raster::filled(u32::MAX, u32::MAX, 0), too_large);
        assert_eq!(Raster::from_fn(u32::MAX, u32::MAX, |_, _| 0), too_large);
    }

    #[test]
    fn test_raster_pixel_is_row_major() {
        let raster = Raster::from_fn(4, 2, |x, y| (y * 4 + x) as u8).unwrap();
        assert_eq!(raster.pixel(0, 0), 0);
        assert_eq!(raster.pixel(3, 0), 3);
        assert_eq!(raster.pixel(0, 1), 4);
        assert_eq!(raster.pixel(3, 1), 7);
    }

    #[test]
    fn test_tile_counts_drop_partial_tiles() {
        let raster = Raster::filled(20, 9, 0).unwrap();
        assert_eq!(raster.tiles_wide(), 2);
        assert_eq!(raster.tiles_high(), 1);
        assert!(!raster.is_tile_aligned());

        assert!(Raster::filled(16, 24, 0).unwrap().is_tile_aligned());
    }

    #[test]
    fn test_max_index() {
        assert_eq!(Raster::filled(0, 0, 3).unwrap().max_index(), None);
        let raster = Raster::from_fn(8, 1, |x, _| x as u8 * 2).unwrap();
        assert_eq!(raster.max_index(), Some(14));
    }

    #[test]
    fn test_palette_from_rgb_bytes() {
        let palette = Palette::from_rgb_bytes(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0), Some(Rgb::new(1, 2, 3)));
        assert_eq!(palette.get(1), Some(Rgb::new(4, 5, 6)));
        assert_eq!(palette.get(2), None);
        assert_eq!(palette.colors(), &[Rgb::from([1, 2, 3]), Rgb::from([4, 5, 6])]);
    }

    #[test]
    fn test_raster_error_display() {
        let err = RasterError::InvalidIndexData {
            expected: 64,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid index data: expected 64 bytes (width * height), got 10"
        );

        let err = RasterError::DimensionsTooLarge {
            width: 70000,
            height: 70000,
        };
        assert_eq!(err.to_string(), "Dimensions too large: 70000x70000");
    }
}
