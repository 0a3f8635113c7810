//! Alphacrop Core - opaque-rectangle detection library
//!
//! This crate provides the core functionality for Alphacrop: finding the
//! largest fully-opaque axis-aligned rectangle in an RGBA pixel buffer and
//! mapping it into document coordinates, so a host editor can crop away
//! the transparent borders left by rotation or perspective correction.
//!
//! Everything here is pure, synchronous computation over caller-owned
//! buffers. Pixel acquisition and the destructive crop commit belong to
//! the host adapter.

pub mod buffer;
pub mod find;
pub mod region;
pub mod threshold;

pub use buffer::{BufferError, PixelBuffer, SampleData};
pub use find::{find_max_opaque_rect, find_opaque_bounds};
pub use region::{map_to_document, CropRegion};
pub use threshold::{alpha_threshold, AlphaThreshold};

/// An axis-aligned rectangle in local grid coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive. A valid
/// rectangle has `left < right` and `top < bottom`; "nothing found" is
/// always `Option::None`, never a zero-area rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: u32,
    /// Top edge (inclusive).
    pub top: u32,
    /// Right edge (exclusive).
    pub right: u32,
    /// Bottom edge (exclusive).
    pub bottom: u32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Rectangle area in pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// Settings for the auto-crop pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropSettings {
    /// Margin subtracted from every edge of the found rectangle before
    /// the crop is committed, so partially-transparent boundary pixels
    /// never survive the crop.
    pub inset: u32,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self { inset: 1 }
    }
}

impl CropSettings {
    /// Create settings with the default one-pixel inset.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute the crop region for an acquired pixel buffer.
///
/// The one-call pipeline: decline buffers without an alpha channel or
/// without pixels, find the maximal opaque rectangle at the threshold for
/// the buffer's sample depth, then shift it by the buffer's document
/// offset, apply the inset, and clamp to the document.
///
/// # Arguments
/// * `buffer` - Acquired pixels for the scanned layer region
/// * `offset_x` - Document x of the buffer's left edge
/// * `offset_y` - Document y of the buffer's top edge
/// * `doc_width` - Document width in pixels
/// * `doc_height` - Document height in pixels
/// * `settings` - Inset configuration
///
/// # Returns
///
/// The crop region in document coordinates, or `None` when there is
/// nothing to crop to. Every "cannot crop" condition - no alpha channel,
/// empty data, no opaque pixel at threshold, region collapsed by the
/// inset - is this same explicit absence, and the host treats it as a
/// no-op.
pub fn compute_crop_region(
    buffer: &PixelBuffer,
    offset_x: i32,
    offset_y: i32,
    doc_width: u32,
    doc_height: u32,
    settings: &CropSettings,
) -> Option<CropRegion> {
    let rect = find::find_opaque_bounds(buffer)?;
    region::map_to_document(
        rect,
        offset_x,
        offset_y,
        settings.inset,
        doc_width,
        doc_height,
    )
}
