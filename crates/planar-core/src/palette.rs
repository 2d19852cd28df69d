//! 12-bit palette quantization.
//!
//! Target hardware stores colors as 4 bits per channel packed into the low 12
//! bits of a 16-bit word, red in the high nibble: `0x0RGB`.

use crate::raster::{Palette, Rgb};

/// Largest value a quantized color can take.
pub const MAX_COLOR_12: u16 = 0x0FFF;

/// Quantize one color to `0x0RGB` by truncating each channel to its high nibble.
///
/// # Example
/// ```ignore
/// use planar_core::palette::quantize_color;
/// use planar_core::Rgb;
///
/// assert_eq!(quantize_color(Rgb::new(255, 128, 16)), 0xF81);
/// ```
#[inline]
pub fn quantize_color(color: Rgb) -> u16 {
    let r = (color.r >> 4) as u16;
    let g = (color.g >> 4) as u16;
    let b = (color.b >> 4) as u16;
    (r << 8) | (g << 4) | b
}

/// Quantize every palette entry, preserving order.
pub fn quantize_palette(palette: &Palette) -> Vec<u16> {
    palette.iter().copied().map(quantize_color).collect()
}

/// Widen a 12-bit color back to 8 bits per channel.
///
/// Each nibble is replicated (`n * 17`) so `0xF` maps to 255 and `0x0` to 0.
/// Used for previews only; the encoder never round-trips colors.
#[inline]
pub fn expand_color(value: u16) -> Rgb {
    let nibble = |shift: u16| ((value >> shift) & 0xF) as u8 * 17;
    Rgb::new(nibble(8), nibble(4), nibble(0))
}
