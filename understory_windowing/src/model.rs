// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-axis capability interface shared by fixed and variable axes.

use crate::{ItemMetadata, Scalar};

/// A single scrollable axis over a dense strip of items, indexed `0..len`.
///
/// All sizes and offsets are in the same coordinate space as the scroll
/// offset and viewport extent (typically logical pixels).
///
/// Query methods take `&mut self` so implementations can measure items lazily
/// and cache the results without interior mutability at the call site.
/// Indices past the end are clamped to the last item; none of these methods
/// fail on out-of-range input.
pub trait AxisModel {
    /// Scalar type used for sizes and offsets.
    type Scalar: Scalar;

    /// Number of items on this axis.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items on this axis.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of the leading edge of `index` from the start of the axis.
    fn offset_of(&mut self, index: usize) -> Self::Scalar;

    /// Size of `index` along the axis.
    fn size_of(&mut self, index: usize) -> Self::Scalar;

    /// Offset and size of `index` together.
    fn metadata_of(&mut self, index: usize) -> ItemMetadata<Self::Scalar> {
        ItemMetadata {
            offset: self.offset_of(index),
            size: self.size_of(index),
        }
    }

    /// Projected total extent of the axis, used to size the scroll surface.
    ///
    /// For axes that measure lazily this combines the measured prefix with an
    /// estimate for the rest, and may change as more items are measured.
    fn estimated_total_extent(&mut self) -> Self::Scalar;

    /// Index of the item occupying `offset`, clamped to `0..len`.
    ///
    /// Returns `0` for an empty axis.
    fn start_index_for_offset(&mut self, offset: Self::Scalar) -> usize;

    /// Last index needed to fill a viewport of `viewport_extent` that starts at
    /// `scroll_offset`, given that `start_index` is the first visible item.
    fn stop_index_for_start(
        &mut self,
        start_index: usize,
        scroll_offset: Self::Scalar,
        viewport_extent: Self::Scalar,
    ) -> usize;
}
