//! Alphacrop WASM - WebAssembly bindings for Alphacrop
//!
//! This crate exposes the alphacrop-core opaque-rectangle detection to a
//! JavaScript/TypeScript host application. The host owns documents,
//! layers, pixel acquisition, and the destructive crop commit; this crate
//! only validates buffers, runs the detection, and hands back a crop
//! region (or `undefined` when there is nothing to crop to).
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for pixel buffers and regions
//! - `autocrop` - The exported detection and mapping operations
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, find_crop_region } from '@alphacrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Pixels acquired from the host editor for the layer's source bounds
//! const buffer = JsPixelBuffer.from_u8(width, height, 4, samples);
//! const region = find_crop_region(buffer, left, top, docWidth, docHeight);
//! if (region !== undefined) {
//!   await host.cropDocument(region.left, region.top, region.right, region.bottom);
//! }
//! buffer.free();
//! ```

use wasm_bindgen::prelude::*;

mod autocrop;
mod types;

// Re-export public types
pub use autocrop::{find_crop_region, find_crop_region_with_settings, find_opaque_rect};
pub use types::{JsCropRegion, JsPixelBuffer, JsRect};

/// Display name for the host's single user-facing action.
///
/// The host registers one menu/action entry under this name, invocable
/// directly or as a recorded macro step.
pub const ACTION_DISPLAY_NAME: &str = "Crop to Opaque Area";

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the display name for the host's auto-crop action
#[wasm_bindgen]
pub fn action_display_name() -> String {
    ACTION_DISPLAY_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_action_display_name() {
        assert_eq!(action_display_name(), "Crop to Opaque Area");
    }
}
