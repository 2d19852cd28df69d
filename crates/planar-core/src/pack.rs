//! Planar bit packing.
//!
//! A 4bpp indexed pixel is split across four bit-planes. Each output byte
//! holds one plane's bit for a run of 8 horizontally adjacent pixels, with the
//! leftmost pixel in bit 7 and the rightmost in bit 0.
//!
//! Two layouts are produced from the same raster:
//! - [`pack_tiles`]: tile by tile, each 8x8 tile emitted as 8 rows of 4 plane bytes
//! - [`pack_linear`]: row group by row group, each plane scanned across the full width
//!
//! Both are built on the single [`pack_run`] primitive.

use crate::raster::{Raster, RasterError, TILE_SIZE};

/// Bits per pixel of the planar output.
pub const BITS_PER_PIXEL: u32 = 4;

/// Pixels packed into one output byte.
pub const RUN_LENGTH: u32 = 8;

/// Pack one bit-plane of a horizontal pixel run into a byte.
///
/// Reads `run_length` pixels starting at `(start_x, start_y)` and places bit
/// `plane` of pixel `p` at bit position `7 - p`. Runs shorter than 8 leave the
/// low bits clear.
///
/// # Arguments
/// * `raster` - Source indices
/// * `start_x` - X coordinate of the leftmost pixel of the run
/// * `start_y` - Row of the run
/// * `run_length` - Number of pixels to read (at most 8)
/// * `plane` - Bit-plane to extract (0..4)
#[inline]
pub fn pack_run(raster: &Raster, start_x: u32, start_y: u32, run_length: u32, plane: u32) -> u8 {
    debug_assert!(run_length <= RUN_LENGTH);
    debug_assert!(plane < BITS_PER_PIXEL);

    let mask = 1u8 << plane;
    let mut byte = 0u8;
    for p in 0..run_length {
        let bit = (raster.pixel(start_x + p, start_y) & mask) >> plane;
        byte |= bit << (7 - p);
    }
    byte
}

/// Expected length of the [`pack_tiles`] output for the given dimensions.
pub fn tile_block_len(width: u32, height: u32) -> usize {
    let tiles = (width / TILE_SIZE) as usize * (height / TILE_SIZE) as usize;
    tiles * TILE_SIZE as usize * BITS_PER_PIXEL as usize
}

/// Expected length of the [`pack_linear`] output for the given dimensions.
pub fn linear_block_len(width: u32, height: u32) -> usize {
    let runs_per_row = (width / RUN_LENGTH) as usize;
    (height / TILE_SIZE) as usize * BITS_PER_PIXEL as usize * TILE_SIZE as usize * runs_per_row
}

/// Pack the raster tile by tile.
///
/// Traversal order, outer to inner: tile row, tile column, pixel row within
/// the tile, bit-plane. One byte is emitted per combination, so each tile
/// occupies 32 consecutive bytes.
///
/// Dimensions that are not multiples of 8 are not checked; the partial
/// trailing tiles are left out.
pub fn pack_tiles(raster: &Raster) -> Vec<u8> {
    let mut out = Vec::with_capacity(tile_block_len(raster.width(), raster.height()));

    for ty in 0..raster.tiles_high() {
        for tx in 0..raster.tiles_wide() {
            for row in 0..TILE_SIZE {
                for plane in 0..BITS_PER_PIXEL {
                    out.push(pack_run(
                        raster,
                        tx * TILE_SIZE,
                        ty * TILE_SIZE + row,
                        RUN_LENGTH,
                        plane,
                    ));
                }
            }
        }
    }

    out
}

/// Pack the raster as whole-width scanlines grouped by tile row.
///
/// Traversal order, outer to inner: tile row, bit-plane, pixel row within the
/// group, then every 8-pixel run across the full width. Unlike
/// [`pack_tiles`] the inner scan ignores tile column boundaries, so a single
/// plane of a full scanline is contiguous.
pub fn pack_linear(raster: &Raster) -> Vec<u8> {
    let mut out = Vec::with_capacity(linear_block_len(raster.width(), raster.height()));
    let runs_per_row = raster.width() / RUN_LENGTH;

    for j in 0..raster.tiles_high() {
        for plane in 0..BITS_PER_PIXEL {
            for t in 0..TILE_SIZE {
                let y = j * TILE_SIZE + t;
                for run in 0..runs_per_row {
                    out.push(pack_run(raster, run * RUN_LENGTH, y, RUN_LENGTH, plane));
                }
            }
        }
    }

    out
}

/// Rebuild a raster from a tile block produced by [`pack_tiles`].
///
/// Only the low 4 bits of each index survive packing, so the result equals
/// the source raster masked with `0x0F`. `width` and `height` are rounded down
/// to whole tiles; missing trailing bytes read as zero.
///
/// # Errors
/// Returns [`RasterError::DimensionsTooLarge`] if the raster can't be allocated.
pub fn unpack_tiles(tiles: &[u8], width: u32, height: u32) -> Result<Raster, RasterError> {
    let tiles_wide = width / TILE_SIZE;
    let tiles_high = height / TILE_SIZE;
    let out_width = tiles_wide * TILE_SIZE;
    let out_height = tiles_high * TILE_SIZE;
    let bytes_per_tile = (TILE_SIZE * BITS_PER_PIXEL) as usize;

    Raster::from_fn(out_width, out_height, |x, y| {
        let tile = (y / TILE_SIZE) as usize * tiles_wide as usize + (x / TILE_SIZE) as usize;
        let row = (y % TILE_SIZE) as usize;
        let shift = 7 - (x % RUN_LENGTH);
        let base = tile * bytes_per_tile + row * BITS_PER_PIXEL as usize;

        let mut index = 0u8;
        for plane in 0..BITS_PER_PIXEL as usize {
            let byte = tiles.get(base + plane).copied().unwrap_or(0);
            index |= ((byte >> shift) & 1) << plane;
        }
        index
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_run_leftmost_pixel_is_high_bit() {
        let raster = Raster::from_fn(8, 1, |x, _| if x == 0 { 1 } else { 0 }).unwrap();
        assert_eq!(pack_run(&raster, 0, 0, 8, 0), 0x80);
        assert_eq!(pack_run(&raster, 0, 0, 8, 1), 0x00);
    }

    #[test]
    fn test_pack_run_rightmost_pixel_is_low_bit() {
        let raster = Raster::from_fn(8, 1, |x, _| if x == 7 { 0b1000 } else { 0 }).unwrap();
        assert_eq!(pack_run(&raster, 0, 0, 8, 3), 0x01);
        assert_eq!(pack_run(&raster, 0, 0, 8, 0), 0x00);
    }

    #[test]
    fn test_pack_run_short_run_leaves_low_bits_clear() {
        let raster = Raster::filled(8, 1, 0xF).unwrap();
        assert_eq!(pack_run(&raster, 0, 0, 3, 2), 0b1110_0000);
        assert_eq!(pack_run(&raster, 0, 0, 0, 2), 0);
    }

    #[test]
    fn test_pack_run_ignores_high_index_bits() {
        let raster = Raster::filled(8, 1, 0xF0).unwrap();
        for plane in 0..BITS_PER_PIXEL {
            assert_eq!(pack_run(&raster, 0, 0, 8, plane), 0);
        }
    }

    #[test]
    fn test_single_tile_index_five() {
        // 5 = 0b0101: planes 0 and 2 set, planes 1 and 3 clear
        let raster = Raster::filled(8, 8, 5).unwrap();
        let tiles = pack_tiles(&raster);
        let linear = pack_linear(&raster);

        assert_eq!(tiles.len(), 32);
        for row in tiles.chunks(4) {
            assert_eq!(row, &[0xFF, 0x00, 0xFF, 0x00]);
        }

        // The linear block is plane-major: same bytes as the tile block, in a
        // different order.
        assert_eq!(linear.len(), 32);
        assert_eq!(&linear[0..8], &[0xFF; 8]);
        assert_eq!(&linear[8..16], &[0x00; 8]);
        assert_eq!(&linear[16..24], &[0xFF; 8]);
        assert_eq!(&linear[24..32], &[0x00; 8]);
    }

    #[test]
    fn test_pack_tiles_order_is_tile_row_major() {
        // 16x8: left tile index 1, right tile index 2
        let raster = Raster::from_fn(16, 8, |x, _| if x < 8 { 1 } else { 2 }).unwrap();
        let tiles = pack_tiles(&raster);

        assert_eq!(tiles.len(), 64);
        assert_eq!(&tiles[0..4], &[0xFF, 0x00, 0x00, 0x00]);
        assert_eq!(&tiles[32..36], &[0x00, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_pack_linear_spans_full_width() {
        let raster = Raster::from_fn(16, 8, |x, _| if x < 8 { 1 } else { 2 }).unwrap();
        let linear = pack_linear(&raster);

        assert_eq!(linear.len(), 64);
        // Plane 0: every scanline is [left run, right run]
        for t in 0..8 {
            assert_eq!(&linear[t * 2..t * 2 + 2], &[0xFF, 0x00]);
        }
        // Plane 1 starts after 8 rows of 2 runs
        for t in 0..8 {
            assert_eq!(&linear[16 + t * 2..16 + t * 2 + 2], &[0x00, 0xFF]);
        }
    }

    #[test]
    fn test_pack_linear_rows_within_group() {
        // Only row 3 of the image has plane 0 set on its first pixel
        let raster = Raster::from_fn(8, 8, |x, y| u8::from(x == 0 && y == 3)).unwrap();
        let linear = pack_linear(&raster);
        assert_eq!(linear[3], 0x80);
        assert_eq!(linear.iter().filter(|&&b| b != 0).count(), 1);
    }

    #[test]
    fn test_partial_tiles_are_dropped() {
        let raster = Raster::filled(12, 10, 0xF).unwrap();
        assert_eq!(pack_tiles(&raster).len(), 32);
        assert_eq!(pack_linear(&raster).len(), 32);
        assert_eq!(tile_block_len(12, 10), 32);
        assert_eq!(linear_block_len(12, 10), 32);
    }

    #[test]
    fn test_empty_raster_packs_to_nothing() {
        let raster = Raster::filled(0, 0, 0).unwrap();
        assert!(pack_tiles(&raster).is_empty());
        assert!(pack_linear(&raster).is_empty());
    }

    #[test]
    fn test_unpack_tiles_restores_indices() {
        let raster = Raster::from_fn(16, 16, |x, y| ((x * 3 + y * 5) % 16) as u8).unwrap();
        let unpacked = unpack_tiles(&pack_tiles(&raster), 16, 16).unwrap();
        assert_eq!(unpacked, raster);
    }

    #[test]
    fn test_unpack_tiles_rejects_oversized_dimensions() {
        let result = unpack_tiles(&[], u32::MAX, u32::MAX);
        assert!(matches!(result, Err(RasterError::DimensionsTooLarge { .. })));
    }

    #[test]
    fn test_unpack_tiles_short_input_reads_zero() {
        let unpacked = unpack_tiles(&[0xFF], 8, 8).unwrap();
        assert_eq!(unpacked.pixel(0, 0), 1);
        assert_eq!(unpacked.pixel(0, 1), 0);
    }
}
