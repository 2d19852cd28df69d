//! Planar WASM - WebAssembly bindings for png2planar
//!
//! This crate provides WASM bindings to expose the planar-core functionality
//! to JavaScript/TypeScript build scripts.
//!
//! # Module Structure
//!
//! - `convert` - Indexed PNG to C source conversion
//! - `pack` - Individual packing and quantization stages
//! - `types` - WASM-compatible wrapper types for results
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert_png } from '@png2planar/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await readFile('tiles.png'));
//! const result = convert_png(bytes, { prefix: 'tiles' });
//! console.log(`${result.width}x${result.height}, ${result.data().length} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod pack;
mod types;

// Re-export public types
pub use convert::convert_png;
pub use pack::{pack_linear, pack_tiles, quantize_palette};
pub use types::JsArtifacts;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
