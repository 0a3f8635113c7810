//! Maximal opaque rectangle search.
//!
//! Finds the largest axis-aligned rectangle whose every pixel is at or
//! above an opacity threshold, reducing the 2D problem to one "largest
//! rectangle in a histogram" pass per row:
//!
//! 1. For each column, track the run length of consecutive opaque rows
//!    ending at the current row.
//! 2. Solve the histogram of those run lengths with a monotonic stack of
//!    column indices, flushing it with a virtual zero-height column past
//!    the right edge.
//!
//! Each column index is pushed and popped at most once per row, so the
//! whole search is O(width × height) time with O(width) working storage.
//! A naive scan over all candidate rectangles would be quartic in the
//! image edge and is infeasible at full resolution.

use crate::buffer::{PixelBuffer, SampleData};
use crate::threshold::{alpha_threshold, AlphaThreshold};
use crate::Rect;

/// Find the maximal all-opaque rectangle in a plain alpha grid.
///
/// # Arguments
/// * `alpha` - Opacity samples, row-major, `width * height` entries
/// * `width` - Grid width in samples
/// * `height` - Grid height in samples
/// * `threshold` - Minimum opacity considered opaque (inclusive)
///
/// # Returns
///
/// The largest rectangle whose samples are all `>= threshold`, or `None`
/// when no sample reaches the threshold. Among equal-area rectangles the
/// first one found wins (topmost completion row, then leftmost).
///
/// # Example
/// ```
/// use alphacrop_core::find::find_max_opaque_rect;
///
/// let alpha = [0u8, 255, 255, 0, 255, 255];
/// let rect = find_max_opaque_rect(&alpha, 3, 2, 2).unwrap();
/// assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (1, 0, 3, 2));
/// ```
pub fn find_max_opaque_rect<T>(alpha: &[T], width: u32, height: u32, threshold: T) -> Option<Rect>
where
    T: PartialOrd + Copy,
{
    debug_assert!(
        alpha.len() >= width as usize * height as usize,
        "Alpha grid size mismatch. Expected {}, got {}",
        width as usize * height as usize,
        alpha.len()
    );
    scan_samples(alpha, width as usize, height as usize, 1, 0, threshold)
}

/// Find the maximal all-opaque rectangle in an interleaved pixel buffer.
///
/// Scans the buffer's alpha samples in place (no alpha plane is
/// materialized) using the threshold for the buffer's sample depth.
///
/// # Returns
///
/// The rectangle in the buffer's local coordinates, or `None` when the
/// buffer has no alpha channel (`components != 4`), is empty, or no
/// sample reaches the threshold.
pub fn find_opaque_bounds(buffer: &PixelBuffer) -> Option<Rect> {
    if !buffer.has_alpha() || buffer.is_empty() {
        return None;
    }

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let stride = buffer.components() as usize;
    let first = stride - 1;

    // The threshold scale always matches the storage variant: both are
    // keyed off the same component size.
    match (buffer.data(), alpha_threshold(buffer.component_size())) {
        (SampleData::U8(data), AlphaThreshold::Bits8(t)) => {
            scan_samples(data, width, height, stride, first, t)
        }
        (SampleData::U16(data), AlphaThreshold::Bits16(t)) => {
            scan_samples(data, width, height, stride, first, t)
        }
        (SampleData::F32(data), AlphaThreshold::Float(t)) => {
            scan_samples(data, width, height, stride, first, t)
        }
        _ => None,
    }
}

/// Histogram-stack search over an interleaved sample slice.
///
/// `stride` is the distance between consecutive opacity samples and
/// `first` the index of the first one, so a plain alpha plane scans as
/// (1, 0) and an RGBA buffer as (4, 3).
fn scan_samples<T>(
    samples: &[T],
    width: usize,
    height: usize,
    stride: usize,
    first: usize,
    threshold: T,
) -> Option<Rect>
where
    T: PartialOrd + Copy,
{
    if width == 0 || height == 0 || samples.is_empty() {
        return None;
    }

    // Per-column count of consecutive opaque rows ending at the current row.
    let mut heights = vec![0u32; width];
    let mut stack: Vec<usize> = Vec::with_capacity(width + 1);
    let mut best: Option<Rect> = None;
    let mut best_area = 0u64;

    for y in 0..height {
        let row = y * width * stride;
        for (x, h) in heights.iter_mut().enumerate() {
            let sample = samples[row + x * stride + first];
            if sample >= threshold {
                *h += 1;
            } else {
                *h = 0;
            }
        }

        // Largest rectangle in this row's histogram. The index `width`
        // acts as a zero-height sentinel that flushes the stack.
        stack.clear();
        for i in 0..=width {
            let current = if i < width { heights[i] } else { 0 };
            while let Some(&top) = stack.last() {
                if heights[top] <= current {
                    break;
                }
                stack.pop();
                let rect_height = heights[top];
                let left = stack.last().map_or(0, |&below| below + 1);
                let area = u64::from(rect_height) * (i - left) as u64;
                if area > best_area {
                    best_area = area;
                    let bottom = (y + 1) as u32;
                    best = Some(Rect {
                        left: left as u32,
                        top: bottom - rect_height,
                        right: i as u32,
                        bottom,
                    });
                }
            }
            stack.push(i);
        }
    }

    best
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for small alpha grids (kept tiny so brute force stays cheap).
    fn alpha_grid_strategy() -> impl Strategy<Value = (Vec<u8>, u32, u32)> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            prop::collection::vec(0u8..=255, (w * h) as usize)
                .prop_map(move |alpha| (alpha, w, h))
        })
    }

    /// Check every candidate rectangle; O(n^4) but fine at <= 12x12.
    fn brute_force_max_area(alpha: &[u8], width: u32, height: u32, threshold: u8) -> u64 {
        let w = width as usize;
        let h = height as usize;
        let opaque = |x: usize, y: usize| alpha[y * w + x] >= threshold;

        let mut best = 0u64;
        for top in 0..h {
            for left in 0..w {
                for bottom in (top + 1)..=h {
                    for right in (left + 1)..=w {
                        let all = (top..bottom)
                            .all(|y| (left..right).all(|x| opaque(x, y)));
                        if all {
                            best = best.max(((bottom - top) * (right - left)) as u64);
                        }
                    }
                }
            }
        }
        best
    }

    proptest! {
        /// Property: The finder's area equals the true maximum over all
        /// candidate rectangles.
        #[test]
        fn prop_area_matches_brute_force(
            (alpha, width, height) in alpha_grid_strategy(),
        ) {
            let expected = brute_force_max_area(&alpha, width, height, 2);
            let found = find_max_opaque_rect(&alpha, width, height, 2u8);

            match found {
                Some(rect) => prop_assert_eq!(rect.area(), expected),
                None => prop_assert_eq!(expected, 0),
            }
        }

        /// Property: The returned rectangle is in bounds and all-opaque.
        #[test]
        fn prop_result_is_valid_and_opaque(
            (alpha, width, height) in alpha_grid_strategy(),
        ) {
            if let Some(rect) = find_max_opaque_rect(&alpha, width, height, 2u8) {
                prop_assert!(rect.left < rect.right);
                prop_assert!(rect.top < rect.bottom);
                prop_assert!(rect.right <= width);
                prop_assert!(rect.bottom <= height);

                for y in rect.top..rect.bottom {
                    for x in rect.left..rect.right {
                        prop_assert!(alpha[(y * width + x) as usize] >= 2);
                    }
                }
            }
        }

        /// Property: The search is a pure function of its input.
        #[test]
        fn prop_deterministic(
            (alpha, width, height) in alpha_grid_strategy(),
        ) {
            let first = find_max_opaque_rect(&alpha, width, height, 2u8);
            let second = find_max_opaque_rect(&alpha, width, height, 2u8);
            prop_assert_eq!(first, second);
        }

        /// Property: Scanning an RGBA buffer equals scanning its alpha plane.
        #[test]
        fn prop_interleaved_matches_plane(
            (alpha, width, height) in alpha_grid_strategy(),
        ) {
            let mut data = vec![0u8; alpha.len() * 4];
            for (i, &a) in alpha.iter().enumerate() {
                data[i * 4 + 3] = a;
            }
            let buffer = PixelBuffer::new(width, height, 4, SampleData::U8(data)).unwrap();

            prop_assert_eq!(
                find_opaque_bounds(&buffer),
                find_max_opaque_rect(&alpha, width, height, 2u8)
            );
        }
    }
}
