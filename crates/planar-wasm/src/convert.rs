//! Conversion WASM bindings.
//!
//! This module exposes the planar-core pipeline to JavaScript: indexed PNG
//! bytes in, C declaration and definition sources out.
//!
//! # Example
//!
//! ```typescript
//! import { convert_png } from '@png2planar/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = convert_png(bytes, { prefix: 'font', validation: 'strict' });
//! await writeFile(`include/${result.headerName}`, result.header);
//! await writeFile(`src/${result.sourceName}`, result.source);
//! result.free();
//! ```

use crate::types::JsArtifacts;
use planar_core::ConvertOptions;
use wasm_bindgen::prelude::*;

/// Convert an indexed PNG into C sources.
///
/// # Arguments
///
/// * `bytes` - The PNG file bytes as a `Uint8Array`
/// * `options` - Optional `{ prefix?: string, qualifier?: string, validation?: 'lenient' | 'strict' }`.
///   Missing fields take their defaults (`tiles`, `__far`, `lenient`).
///
/// # Errors
///
/// Returns an error if the options are malformed, the bytes are not an
/// indexed PNG, or strict validation rejects the input.
#[wasm_bindgen]
pub fn convert_png(bytes: &[u8], options: JsValue) -> Result<JsArtifacts, JsValue> {
    let options = parse_options(options)?;
    planar_core::convert_png(bytes, &options)
        .map(JsArtifacts::from_artifacts)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_options(options: JsValue) -> Result<ConvertOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ConvertOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}
