//! WASM-compatible wrapper types for pixel buffers and crop results.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Alphacrop types, handling the conversion between Rust and JavaScript
//! data representations.

use alphacrop_core::{CropRegion, PixelBuffer, Rect, SampleData};
use wasm_bindgen::prelude::*;

/// An acquired pixel buffer wrapper for JavaScript.
///
/// Wraps the core `PixelBuffer` and validates its shape at construction:
/// a buffer whose sample data cannot cover `width * height * components`
/// is rejected with an error, since that is a host-side bug rather than a
/// data condition.
///
/// # Memory Management
///
/// The sample data is copied into WASM memory at construction. Call
/// `free()` after the crop decision to release it immediately; otherwise
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a buffer of 8-bit samples (0-255 scale).
    ///
    /// # Arguments
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    /// * `components` - Samples per pixel (4 for RGBA)
    /// * `data` - Interleaved samples, row-major, as a `Uint8Array`
    pub fn from_u8(
        width: u32,
        height: u32,
        components: u32,
        data: Vec<u8>,
    ) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, components, SampleData::U8(data))
            .map(|inner| JsPixelBuffer { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a buffer of 16-bit samples.
    ///
    /// The host must supply alpha already expanded to the full 0..65535
    /// range; compressed 15-bit variants are not re-scaled here.
    pub fn from_u16(
        width: u32,
        height: u32,
        components: u32,
        data: Vec<u16>,
    ) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, components, SampleData::U16(data))
            .map(|inner| JsPixelBuffer { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a buffer of 32-bit float samples (0.0-1.0 scale).
    pub fn from_f32(
        width: u32,
        height: u32,
        components: u32,
        data: Vec<f32>,
    ) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, components, SampleData::F32(data))
            .map(|inner| JsPixelBuffer { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the buffer width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the buffer height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the samples per pixel
    #[wasm_bindgen(getter)]
    pub fn components(&self) -> u32 {
        self.inner.components()
    }

    /// Get the sample bit depth (8, 16, or 32)
    #[wasm_bindgen(getter)]
    pub fn component_size(&self) -> u32 {
        self.inner.component_size()
    }

    /// Get the number of samples held by the buffer
    #[wasm_bindgen(getter)]
    pub fn sample_count(&self) -> usize {
        self.inner.data().len()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this after the crop decision to immediately
    /// release a large buffer.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Borrow the wrapped core buffer.
    pub(crate) fn as_buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

/// A rectangle in the scanned buffer's local coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive.
#[wasm_bindgen]
pub struct JsRect {
    inner: Rect,
}

#[wasm_bindgen]
impl JsRect {
    /// Get the left edge (inclusive)
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> u32 {
        self.inner.left
    }

    /// Get the top edge (inclusive)
    #[wasm_bindgen(getter)]
    pub fn top(&self) -> u32 {
        self.inner.top
    }

    /// Get the right edge (exclusive)
    #[wasm_bindgen(getter)]
    pub fn right(&self) -> u32 {
        self.inner.right
    }

    /// Get the bottom edge (exclusive)
    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> u32 {
        self.inner.bottom
    }

    /// Get the rectangle width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the rectangle height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }
}

impl JsRect {
    pub(crate) fn from_rect(inner: Rect) -> Self {
        Self { inner }
    }
}

/// A crop region in document pixel coordinates.
///
/// Produced by the mapping step: shifted by the source bounds' origin,
/// shrunk by the inset, clamped to the document, and guaranteed to have
/// positive area.
#[wasm_bindgen]
pub struct JsCropRegion {
    inner: CropRegion,
}

#[wasm_bindgen]
impl JsCropRegion {
    /// Get the left edge (inclusive)
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> u32 {
        self.inner.left
    }

    /// Get the top edge (inclusive)
    #[wasm_bindgen(getter)]
    pub fn top(&self) -> u32 {
        self.inner.top
    }

    /// Get the right edge (exclusive)
    #[wasm_bindgen(getter)]
    pub fn right(&self) -> u32 {
        self.inner.right
    }

    /// Get the bottom edge (exclusive)
    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> u32 {
        self.inner.bottom
    }

    /// Get the region width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the region height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Convert to a plain JavaScript object `{left, top, right, bottom}`.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsCropRegion {
    pub(crate) fn from_region(inner: CropRegion) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_buffer_getters() {
        let buf = JsPixelBuffer::from_u8(4, 2, 4, vec![0u8; 4 * 2 * 4]).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.components(), 4);
        assert_eq!(buf.component_size(), 8);
        assert_eq!(buf.sample_count(), 32);
    }

    #[test]
    fn test_js_pixel_buffer_depth_from_constructor() {
        let buf = JsPixelBuffer::from_u16(2, 2, 4, vec![0u16; 16]).unwrap();
        assert_eq!(buf.component_size(), 16);

        let buf = JsPixelBuffer::from_f32(2, 2, 4, vec![0.0f32; 16]).unwrap();
        assert_eq!(buf.component_size(), 32);
    }

    #[test]
    fn test_js_rect_getters() {
        let rect = JsRect::from_rect(Rect::new(2, 1, 8, 5));
        assert_eq!(rect.left(), 2);
        assert_eq!(rect.top(), 1);
        assert_eq!(rect.right(), 8);
        assert_eq!(rect.bottom(), 5);
        assert_eq!(rect.width(), 6);
        assert_eq!(rect.height(), 4);
    }

    #[test]
    fn test_js_crop_region_getters() {
        let region = JsCropRegion::from_region(CropRegion {
            left: 3,
            top: 2,
            right: 7,
            bottom: 4,
        });
        assert_eq!(region.left(), 3);
        assert_eq!(region.top(), 2);
        assert_eq!(region.right(), 7);
        assert_eq!(region.bottom(), 4);
        assert_eq!(region.width(), 4);
        assert_eq!(region.height(), 2);
    }

    // Note: Tests for the short-buffer rejection and to_js require the
    // wasm target because they construct JsValue. The validation itself
    // is tested in alphacrop-core::buffer::tests.
}
