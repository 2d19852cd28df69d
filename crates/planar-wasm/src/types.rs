//! WASM-compatible wrapper types for conversion results.
//!
//! This module provides JavaScript-friendly types that wrap the core planar
//! types, handling the conversion between Rust and JavaScript data representations.

use planar_core::Artifacts;
use wasm_bindgen::prelude::*;

/// Generated C sources and the raw encoded arrays, for JavaScript.
///
/// # Memory Management
///
/// The data is stored in WASM memory. Getters return copies (`string` or
/// typed arrays) in JavaScript memory.
#[wasm_bindgen]
pub struct JsArtifacts {
    header_name: String,
    header: String,
    source_name: String,
    source: String,
    data: Vec<u8>,
    palette: Vec<u16>,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsArtifacts {
    /// Suggested file name of the declaration file, e.g. `tiles.h`
    #[wasm_bindgen(getter, js_name = headerName)]
    pub fn header_name(&self) -> String {
        self.header_name.clone()
    }

    /// Declaration file contents
    #[wasm_bindgen(getter)]
    pub fn header(&self) -> String {
        self.header.clone()
    }

    /// Suggested file name of the definition file, e.g. `tiles.c`
    #[wasm_bindgen(getter, js_name = sourceName)]
    pub fn source_name(&self) -> String {
        self.source_name.clone()
    }

    /// Definition file contents
    #[wasm_bindgen(getter)]
    pub fn source(&self) -> String {
        self.source.clone()
    }

    /// Source image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile block followed by linear block, as a `Uint8Array`.
    pub fn data(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// 12-bit palette values, as a `Uint16Array`.
    pub fn palette(&self) -> Vec<u16> {
        self.palette.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsArtifacts {
    pub(crate) fn from_artifacts(artifacts: Artifacts) -> Self {
        Self {
            data: artifacts.tileset.data(),
            palette: artifacts.tileset.palette,
            width: artifacts.tileset.width,
            height: artifacts.tileset.height,
            header_name: artifacts.header_name,
            header: artifacts.header,
            source_name: artifacts.source_name,
            source: artifacts.source,
        }
    }
}
