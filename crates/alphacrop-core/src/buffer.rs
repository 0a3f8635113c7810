//! Validated pixel sample buffers.
//!
//! The host hands the detector a flat, row-major buffer of interleaved
//! samples at 8, 16, or 32-bit depth. `PixelBuffer` checks the buffer's
//! shape once at construction so the scan itself can index without bounds
//! concerns, and carries the sample depth in the type of the data rather
//! than as a separate field that could disagree with it.

use image::{ImageBuffer, Rgba};
use thiserror::Error;

/// Error types for pixel buffer construction.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The sample buffer is shorter than the dimensions require.
    #[error("sample buffer too small: expected at least {expected} samples, got {actual}")]
    TooSmall { expected: usize, actual: usize },

    /// A pixel cannot have zero components.
    #[error("component count must be at least 1")]
    ZeroComponents,
}

/// Interleaved sample storage at one of the supported depths.
///
/// The variant is the single source of truth for the component size:
/// `U8` is 8-bit, `U16` is 16-bit, `F32` is 32-bit float.
#[derive(Debug, Clone)]
pub enum SampleData {
    /// 8-bit integer samples (0-255).
    U8(Vec<u8>),
    /// 16-bit integer samples (0-65535, full scale).
    U16(Vec<u16>),
    /// 32-bit float samples (0.0-1.0).
    F32(Vec<f32>),
}

impl SampleData {
    /// Number of samples (not bytes) in the buffer.
    pub fn len(&self) -> usize {
        match self {
            SampleData::U8(data) => data.len(),
            SampleData::U16(data) => data.len(),
            SampleData::F32(data) => data.len(),
        }
    }

    /// Check if the buffer holds no samples at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample bit depth implied by the storage variant (8, 16, or 32).
    pub fn component_size(&self) -> u32 {
        match self {
            SampleData::U8(_) => 8,
            SampleData::U16(_) => 16,
            SampleData::F32(_) => 32,
        }
    }
}

/// A caller-owned rectangular buffer of interleaved samples.
///
/// Invariant, checked at construction: the data holds at least
/// `width * height * components` samples. The detector reads only the last
/// component of each pixel group (the alpha sample) and never mutates the
/// data.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    components: u32,
    data: SampleData,
}

impl PixelBuffer {
    /// Create a validated pixel buffer.
    ///
    /// # Arguments
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    /// * `components` - Samples per pixel (4 for RGBA)
    /// * `data` - Interleaved samples, row-major
    ///
    /// # Errors
    ///
    /// Returns `BufferError::TooSmall` if the data cannot cover the stated
    /// dimensions, or `BufferError::ZeroComponents` for a zero component
    /// count.
    pub fn new(
        width: u32,
        height: u32,
        components: u32,
        data: SampleData,
    ) -> Result<Self, BufferError> {
        if components == 0 {
            return Err(BufferError::ZeroComponents);
        }
        let expected = width as usize * height as usize * components as usize;
        if data.len() < expected {
            return Err(BufferError::TooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            components,
            data,
        })
    }

    /// Create a buffer from an 8-bit RGBA image.
    pub fn from_rgba8(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            components: 4,
            data: SampleData::U8(img.as_raw().clone()),
        }
    }

    /// Create a buffer from a 16-bit RGBA image.
    pub fn from_rgba16(img: &ImageBuffer<Rgba<u16>, Vec<u16>>) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            components: 4,
            data: SampleData::U16(img.as_raw().clone()),
        }
    }

    /// Create a buffer from a 32-bit float RGBA image.
    pub fn from_rgba32f(img: &image::Rgba32FImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            components: 4,
            data: SampleData::F32(img.as_raw().clone()),
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel.
    pub fn components(&self) -> u32 {
        self.components
    }

    /// Sample bit depth (8, 16, or 32).
    pub fn component_size(&self) -> u32 {
        self.data.component_size()
    }

    /// The interleaved sample storage.
    pub fn data(&self) -> &SampleData {
        &self.data
    }

    /// Check if the buffer carries an alpha channel.
    ///
    /// Transparency-based detection is defined only for 4-component
    /// (RGBA) buffers.
    pub fn has_alpha(&self) -> bool {
        self.components == 4
    }

    /// Check if this is an empty/unusable buffer.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}
