// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis metadata store with lazy, append-only measurement.
//!
//! An [`AxisState`] records the `{offset, size}` of every item from index `0`
//! up to its high-water mark. Items are measured on demand by
//! [`AxisState::ensure_measured`], always in index order, so the stored
//! metadata is a gapless partition of the axis prefix:
//!
//! ```text
//! metadata[i].offset == metadata[i - 1].offset + metadata[i - 1].size
//! ```
//!
//! The size function passed to the state must be a pure function of the item
//! index. Measurements are never repeated, so a size function that answers
//! differently for the same index leaves the state describing whichever answer
//! it saw first.

use alloc::vec::Vec;

use crate::{ConfigError, Scalar};

/// Offset and size of a single measured item along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetadata<S: Scalar> {
    /// Distance from the start of the axis to the item's leading edge.
    pub offset: S,
    /// Extent of the item along the axis.
    pub size: S,
}

impl<S: Scalar> ItemMetadata<S> {
    /// Returns the offset of the item's trailing edge.
    #[must_use]
    pub fn end(&self) -> S {
        self.offset + self.size
    }
}

/// Measured metadata for one axis of one windowing engine.
///
/// The state is exclusively owned by a single axis. It only ever grows while
/// its configuration stays the same; changing the size function or the
/// estimate means building a fresh state.
#[derive(Debug, Clone)]
pub struct AxisState<S: Scalar> {
    metadata: Vec<ItemMetadata<S>>,
    estimated_item_size: S,
}

impl<S: Scalar> Default for AxisState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> AxisState<S> {
    /// Creates an empty state using [`Scalar::DEFAULT_ESTIMATED_ITEM_SIZE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: Vec::new(),
            estimated_item_size: S::DEFAULT_ESTIMATED_ITEM_SIZE,
        }
    }

    /// Creates an empty state with the given estimate for unmeasured items.
    ///
    /// Returns [`ConfigError::InvalidEstimatedItemSize`] if the estimate is
    /// NaN, infinite, or negative.
    pub fn with_estimated_item_size(estimated_item_size: S) -> Result<Self, ConfigError> {
        if !estimated_item_size.is_valid_extent() {
            return Err(ConfigError::InvalidEstimatedItemSize);
        }
        Ok(Self {
            metadata: Vec::new(),
            estimated_item_size,
        })
    }

    /// Returns the estimate used for items past the high-water mark.
    #[must_use]
    pub const fn estimated_item_size(&self) -> S {
        self.estimated_item_size
    }

    /// Returns the highest measured index, or `None` if nothing is measured.
    #[must_use]
    pub fn high_water_mark(&self) -> Option<usize> {
        self.metadata.len().checked_sub(1)
    }

    /// Returns the number of measured items (`high_water_mark + 1`).
    #[must_use]
    pub fn measured_len(&self) -> usize {
        self.metadata.len()
    }

    /// Returns all measured metadata, indexed by item.
    #[must_use]
    pub fn metadata(&self) -> &[ItemMetadata<S>] {
        &self.metadata
    }

    /// Returns the metadata of `index` if it has already been measured.
    ///
    /// This never calls the size function.
    #[must_use]
    pub fn measured(&self, index: usize) -> Option<ItemMetadata<S>> {
        self.metadata.get(index).copied()
    }

    /// Returns the trailing edge of the last measured item (`0` if none).
    #[must_use]
    pub fn measured_extent(&self) -> S {
        self.metadata.last().map_or_else(S::zero, ItemMetadata::end)
    }

    /// Returns the metadata of `index`, measuring every item between the
    /// high-water mark and `index` first.
    ///
    /// Callers must keep `index` below the axis item count. Each index is
    /// passed to `size_fn` at most once over the lifetime of the state.
    pub fn ensure_measured<F>(&mut self, index: usize, size_fn: &F) -> ItemMetadata<S>
    where
        F: Fn(usize) -> S + ?Sized,
    {
        if let Some(item) = self.metadata.get(index) {
            return *item;
        }

        let from = self.metadata.len();
        let mut offset = self.measured_extent();
        self.metadata.reserve(index + 1 - from);
        for i in from..=index {
            let size = size_fn(i);
            debug_assert!(
                size.is_finite(),
                "item sizes must be finite; got {size:?} for index {i}"
            );
            // Negative sizes would break offset monotonicity.
            let size = size.clamp_non_negative();
            self.metadata.push(ItemMetadata { offset, size });
            offset = offset + size;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(from, to = index, "measured items");

        self.metadata[index]
    }

    /// Returns the projected total extent of an axis with `item_count` items.
    ///
    /// This is the exact extent of the measured prefix plus
    /// [`Self::estimated_item_size`] for every item past the high-water mark.
    /// It is recomputed on every call, so it always reflects the latest
    /// measurements. Once every item is measured the estimate no longer
    /// contributes and the result is the exact sum of all sizes.
    #[must_use]
    pub fn estimated_total_extent(&self, item_count: usize) -> S {
        let measured = self.metadata.len().min(item_count);
        let measured_extent = match measured.checked_sub(1) {
            Some(last) => self.metadata[last].end(),
            None => S::zero(),
        };
        let unmeasured = item_count - measured;
        measured_extent + S::from_usize(unmeasured) * self.estimated_item_size
    }

    /// Drops metadata for every index at or past `len`.
    ///
    /// The remaining prefix is still gapless, so it stays valid for an axis
    /// that shrank to `len` items.
    pub fn truncate(&mut self, len: usize) {
        self.metadata.truncate(len);
    }

    /// Forgets every measurement while keeping the estimate.
    pub fn reset(&mut self) {
        self.metadata.clear();
    }
}
