//! WASM bindings for opaque-rectangle detection and crop mapping.
//!
//! This module provides the JavaScript entry points for the auto-crop
//! operation. Every function is synchronous; the host awaits its own
//! pixel acquisition before calling in, and serializes concurrent
//! invocations on the same document.

use crate::types::{JsCropRegion, JsPixelBuffer, JsRect};
use alphacrop_core::{compute_crop_region, find_opaque_bounds, CropSettings};
use wasm_bindgen::prelude::*;

/// Find the maximal fully-opaque rectangle in a pixel buffer.
///
/// The result is in the buffer's local coordinates, before any offset,
/// inset, or clamping is applied.
///
/// # Arguments
///
/// * `buffer` - Acquired pixels for the scanned layer region
///
/// # Returns
///
/// The largest rectangle whose alpha samples all reach the opacity
/// threshold for the buffer's sample depth, or `undefined` when the
/// buffer has no alpha channel, is empty, or holds no opaque pixel.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = find_opaque_rect(buffer);
/// if (rect !== undefined) {
///   console.log(`Opaque area: ${rect.width}x${rect.height}`);
/// }
/// ```
#[wasm_bindgen]
pub fn find_opaque_rect(buffer: &JsPixelBuffer) -> Option<JsRect> {
    find_opaque_bounds(buffer.as_buffer()).map(JsRect::from_rect)
}

/// Compute the document-space crop region for a pixel buffer.
///
/// Runs the full pipeline with the default settings (one-pixel inset):
/// find the maximal opaque rectangle, shift it to document coordinates,
/// shrink it by the inset, and clamp it to the document.
///
/// # Arguments
///
/// * `buffer` - Acquired pixels for the scanned layer region
/// * `offset_x` - Document x of the buffer's left edge (may be negative)
/// * `offset_y` - Document y of the buffer's top edge (may be negative)
/// * `doc_width` - Document width in pixels
/// * `doc_height` - Document height in pixels
///
/// # Returns
///
/// The crop region to commit, or `undefined` when there is nothing to
/// crop to - the host treats that as a no-op.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const region = find_crop_region(buffer, bounds.left, bounds.top, doc.width, doc.height);
/// if (region !== undefined) {
///   await host.cropDocument(region.left, region.top, region.right, region.bottom);
/// }
/// ```
#[wasm_bindgen]
pub fn find_crop_region(
    buffer: &JsPixelBuffer,
    offset_x: i32,
    offset_y: i32,
    doc_width: u32,
    doc_height: u32,
) -> Option<JsCropRegion> {
    compute_crop_region(
        buffer.as_buffer(),
        offset_x,
        offset_y,
        doc_width,
        doc_height,
        &CropSettings::default(),
    )
    .map(JsCropRegion::from_region)
}

/// Compute the crop region with explicit settings.
///
/// Like [`find_crop_region`], but the settings are passed from
/// TypeScript as a JSON object via serde_wasm_bindgen, e.g. `{inset: 2}`.
///
/// # Errors
///
/// Returns an error if the settings object does not deserialize.
#[wasm_bindgen]
pub fn find_crop_region_with_settings(
    buffer: &JsPixelBuffer,
    offset_x: i32,
    offset_y: i32,
    doc_width: u32,
    doc_height: u32,
    settings: JsValue,
) -> Result<Option<JsCropRegion>, JsValue> {
    let settings: CropSettings =
        serde_wasm_bindgen::from_value(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(compute_crop_region(
        buffer.as_buffer(),
        offset_x,
        offset_y,
        doc_width,
        doc_height,
        &settings,
    )
    .map(JsCropRegion::from_region))
}
