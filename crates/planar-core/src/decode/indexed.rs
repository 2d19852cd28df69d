//! Indexed PNG decoding.
//!
//! The `image` crate expands palettes to RGB on decode, so indices are read
//! with the lower level `png` decoder instead, with all transformations
//! disabled. Sub-byte depths are unpacked MSB first, one index per pixel.

use std::io::Cursor;

use image::ImageFormat;
use png::{BitDepth, ColorType, Decoder, Transformations};

use super::types::{DecodeError, IndexedImage};
use crate::raster::{Palette, Raster};

/// Decode an indexed PNG into palette indices and its palette.
///
/// # Arguments
///
/// * `bytes` - The raw PNG file bytes
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a PNG ([`DecodeError::UnsupportedFormat`])
/// - The PNG is not palette based ([`DecodeError::NotIndexed`])
/// - The PNG has no `PLTE` chunk ([`DecodeError::MissingPalette`])
/// - The PNG is truncated or corrupted ([`DecodeError::CorruptedFile`])
pub fn decode_indexed_png(bytes: &[u8]) -> Result<IndexedImage, DecodeError> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => {}
        Ok(other) => return Err(DecodeError::UnsupportedFormat(format!("{other:?}"))),
        Err(_) => return Err(DecodeError::UnsupportedFormat("unknown".to_string())),
    }

    let mut decoder = Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(Transformations::IDENTITY);

    let mut reader = decoder
        .read_info()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let info = reader.info();
    if info.color_type != ColorType::Indexed {
        return Err(DecodeError::NotIndexed(format!("{:?}", info.color_type)));
    }

    let bit_depth = match info.bit_depth {
        BitDepth::One => 1u8,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        // Indexed PNGs can't be 16-bit; the header check in `read_info` rejects them
        BitDepth::Sixteen => {
            return Err(DecodeError::CorruptedFile("16-bit indexed image".to_string()))
        }
    };

    let palette = info
        .palette
        .as_ref()
        .map(|plte| Palette::from_rgb_bytes(plte))
        .ok_or(DecodeError::MissingPalette)?;

    let (width, height) = (info.width, info.height);

    let mut buffer = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buffer)
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let indices = unpack_indices(&buffer, frame.line_size, width, height, bit_depth);
    let raster = Raster::new(width, height, indices)?;

    log::debug!(
        "Decoded {}x{} indexed PNG, {}-bit, {} palette entries",
        width,
        height,
        bit_depth,
        palette.len()
    );

    Ok(IndexedImage {
        raster,
        palette,
        bit_depth,
    })
}

/// Expand packed scanlines into one index byte per pixel.
fn unpack_indices(buffer: &[u8], line_size: usize, width: u32, height: u32, depth: u8) -> Vec<u8> {
    let mut indices = Vec::with_capacity((width as usize) * (height as usize));

    if depth == 8 {
        for line in buffer.chunks(line_size).take(height as usize) {
            indices.extend_from_slice(&line[..width as usize]);
        }
        return indices;
    }

    let depth = depth as usize;
    let mask = (1u8 << depth) - 1;
    for line in buffer.chunks(line_size).take(height as usize) {
        for x in 0..width as usize {
            let bit = x * depth;
            let shift = 8 - depth - (bit % 8);
            indices.push((line[bit / 8] >> shift) & mask);
        }
    }
    indices
}
