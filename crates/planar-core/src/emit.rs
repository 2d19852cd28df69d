//! C source emission.
//!
//! Produces a declaration file and a definition file for an encoded tileset:
//! a byte array `<prefix>[]` holding the tile block followed by the linear
//! block, and a 16-bit array `<prefix>_palette[]` holding the 12-bit colors.
//! Values are written in decimal, each followed by `", "`.

use thiserror::Error;

use crate::encode::PlanarTileset;
use crate::pack::{BITS_PER_PIXEL, RUN_LENGTH};
use crate::raster::TILE_SIZE;

/// Default array name when none is given.
pub const DEFAULT_PREFIX: &str = "tiles";

/// Default storage qualifier placed after the element type.
pub const DEFAULT_QUALIFIER: &str = "__far";

/// Errors raised while checking emitted names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// Prefix can't be used as a C identifier
    #[error("Invalid array name: {0:?} is not a C identifier")]
    InvalidIdentifier(String),
}

/// Check that `name` is a valid C identifier.
pub fn validate_identifier(name: &str) -> Result<(), EmitError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(EmitError::InvalidIdentifier(name.to_string()))
    }
}

/// File name of the declaration file for `prefix`.
pub fn header_file_name(prefix: &str) -> String {
    format!("{prefix}.h")
}

/// File name of the definition file for `prefix`.
pub fn source_file_name(prefix: &str) -> String {
    format!("{prefix}.c")
}

fn element_type(base: &str, qualifier: &str) -> String {
    if qualifier.is_empty() {
        base.to_string()
    } else {
        format!("{base} {qualifier}")
    }
}

/// Render the declaration file.
///
/// # Example
/// ```ignore
/// use planar_core::emit::render_header;
///
/// let header = render_header("font", "__far");
/// assert!(header.contains("extern const uint8_t __far font[];"));
/// assert!(header.contains("extern const uint16_t __far font_palette[];"));
/// ```
pub fn render_header(prefix: &str, qualifier: &str) -> String {
    let mut out = String::new();
    out.push_str("#include <stdint.h>\n");
    out.push_str("#pragma once\n\n");
    out.push_str(&format!(
        "extern const {} {prefix}[];\n",
        element_type("uint8_t", qualifier)
    ));
    out.push_str(&format!(
        "extern const {} {prefix}_palette[];\n",
        element_type("uint16_t", qualifier)
    ));
    out
}

/// Render the definition file.
///
/// The tile block is broken into one line per tile row and the linear block
/// into one line per (tile row, bit-plane) group.
pub fn render_source(prefix: &str, qualifier: &str, tileset: &PlanarTileset) -> String {
    let mut out = String::new();

    out.push_str(&format!("#include \"{}\"\n", header_file_name(prefix)));
    out.push_str(&format!(
        "const {} {prefix}[] = {{ \n",
        element_type("uint8_t", qualifier)
    ));

    let tile_row_len = (tileset.width / TILE_SIZE * TILE_SIZE * BITS_PER_PIXEL) as usize;
    push_lines(&mut out, &tileset.tiles, tile_row_len);

    let plane_group_len = (tileset.width / RUN_LENGTH * TILE_SIZE) as usize;
    push_lines(&mut out, &tileset.linear, plane_group_len);

    out.push_str("};\n\n");

    out.push_str(&format!(
        "const {} {prefix}_palette[] = {{ \n",
        element_type("uint16_t", qualifier)
    ));
    for value in &tileset.palette {
        push_value(&mut out, *value);
    }
    out.push_str("};\n");

    out
}

fn push_lines(out: &mut String, bytes: &[u8], line_len: usize) {
    if line_len == 0 {
        return;
    }
    for line in bytes.chunks(line_len) {
        for &byte in line {
            push_value(out, byte);
        }
        out.push('\n');
    }
}

fn push_value(out: &mut String, value: impl Into<u32>) {
    out.push_str(&value.into().to_string());
    out.push_str(", ");
}
