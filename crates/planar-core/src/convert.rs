//! End-to-end conversion: indexed PNG bytes to C source artifacts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{decode_indexed_png, DecodeError, IndexedImage};
use crate::emit::{
    header_file_name, render_header, render_source, source_file_name, validate_identifier,
    EmitError, DEFAULT_PREFIX, DEFAULT_QUALIFIER,
};
use crate::encode::{encode, EncodeError, PlanarTileset, Validation};

/// Options controlling a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Name of the emitted byte array; the palette array gets a `_palette` suffix.
    pub prefix: String,
    /// Storage qualifier placed after the element type (empty for none).
    pub qualifier: String,
    /// Precondition handling.
    pub validation: Validation,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            qualifier: DEFAULT_QUALIFIER.to_string(),
            validation: Validation::default(),
        }
    }
}

/// Any failure along the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// The generated declaration and definition files.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Suggested file name of the declaration file (`<prefix>.h`).
    pub header_name: String,
    /// Declaration file contents.
    pub header: String,
    /// Suggested file name of the definition file (`<prefix>.c`).
    pub source_name: String,
    /// Definition file contents.
    pub source: String,
    /// The encoded data the artifacts were rendered from.
    pub tileset: PlanarTileset,
}

/// Encode an already decoded image and render its artifacts.
///
/// In strict mode the prefix must also be a valid C identifier.
pub fn convert_image(
    image: &IndexedImage,
    options: &ConvertOptions,
) -> Result<Artifacts, ConvertError> {
    if options.validation == Validation::Strict {
        validate_identifier(&options.prefix)?;
    }

    let tileset = encode(&image.raster, &image.palette, options.validation)?;

    Ok(Artifacts {
        header_name: header_file_name(&options.prefix),
        header: render_header(&options.prefix, &options.qualifier),
        source_name: source_file_name(&options.prefix),
        source: render_source(&options.prefix, &options.qualifier, &tileset),
        tileset,
    })
}

/// Decode an indexed PNG, encode it and render its artifacts.
///
/// # Errors
///
/// Returns an error if decoding fails, or if strict validation rejects the
/// image or the prefix.
pub fn convert_png(bytes: &[u8], options: &ConvertOptions) -> Result<Artifacts, ConvertError> {
    let image = decode_indexed_png(bytes)?;
    convert_image(&image, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{Palette, Raster, Rgb};

    fn indexed_png(width: u32, height: u32, data: &[u8], palette: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(palette.to_vec());
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.prefix, "tiles");
        assert_eq!(options.qualifier, "__far");
        assert_eq!(options.validation, Validation::Lenient);
    }

    #[test]
    fn test_convert_png_single_tile() {
        let png = indexed_png(8, 8, &[5u8; 64], &[0, 0, 0, 255, 255, 255]);

        let artifacts = convert_png(&png, &ConvertOptions::default()).unwrap();

        assert_eq!(artifacts.header_name, "tiles.h");
        assert_eq!(artifacts.source_name, "tiles.c");
        assert!(artifacts.header.contains("extern const uint8_t __far tiles[];"));
        assert!(artifacts.source.contains("const uint16_t __far tiles_palette[] = { \n0, 4095, };"));
        assert_eq!(artifacts.tileset.data().len(), 64);
    }

    #[test]
    fn test_convert_png_is_deterministic() {
        let data: Vec<u8> = (0..256).map(|i| (i % 7) as u8).collect();
        let png = indexed_png(16, 16, &data, &[10; 21]);
        let options = ConvertOptions::default();

        let first = convert_png(&png, &options).unwrap();
        let second = convert_png(&png, &options).unwrap();

        assert_eq!(first.header, second.header);
        assert_eq!(first.source, second.source);
        assert_eq!(first.tileset, second.tileset);
    }

    #[test]
    fn test_convert_strict_rejects_bad_prefix() {
        let image = IndexedImage {
            raster: Raster::filled(8, 8, 0).unwrap(),
            palette: Palette::new(vec![Rgb::new(0, 0, 0)]),
            bit_depth: 8,
        };
        let options = ConvertOptions {
            prefix: "bad name".to_string(),
            validation: Validation::Strict,
            ..Default::default()
        };

        let result = convert_image(&image, &options);
        assert!(matches!(result, Err(ConvertError::Emit(_))));

        // Lenient mode writes the name as given
        let options = ConvertOptions {
            validation: Validation::Lenient,
            ..options
        };
        assert!(convert_image(&image, &options).is_ok());
    }

    #[test]
    fn test_convert_strict_rejects_unaligned_png() {
        let png = indexed_png(12, 8, &[0u8; 96], &[0, 0, 0]);
        let options = ConvertOptions {
            validation: Validation::Strict,
            ..Default::default()
        };

        let result = convert_png(&png, &options);
        assert!(matches!(
            result,
            Err(ConvertError::Encode(EncodeError::UnalignedDimensions { .. }))
        ));
    }

    #[test]
    fn test_convert_png_decode_error() {
        let result = convert_png(b"not an image", &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }
}
