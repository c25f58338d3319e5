// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An axis whose items all share the same size.

use crate::{AxisModel, ConfigError, Scalar};

/// An [`AxisModel`] where every item has the same size.
///
/// All queries are closed-form arithmetic; nothing is measured or stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAxis<S: Scalar> {
    len: usize,
    item_size: S,
}

impl<S: Scalar> FixedAxis<S> {
    /// Creates an axis with `len` items of `item_size` each.
    ///
    /// Returns [`ConfigError::InvalidItemSize`] if `item_size` is NaN,
    /// infinite, or negative.
    pub fn try_new(len: usize, item_size: S) -> Result<Self, ConfigError> {
        if !item_size.is_valid_extent() {
            return Err(ConfigError::InvalidItemSize);
        }
        Ok(Self { len, item_size })
    }

    /// Sets the number of items on the axis.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the size shared by every item.
    ///
    /// On error the previous size is kept.
    pub fn set_item_size(&mut self, item_size: S) -> Result<(), ConfigError> {
        if !item_size.is_valid_extent() {
            return Err(ConfigError::InvalidItemSize);
        }
        self.item_size = item_size;
        Ok(())
    }

    /// Returns the size shared by every item.
    #[must_use]
    pub const fn item_size(&self) -> S {
        self.item_size
    }

    fn clamp_index(&self, index: isize) -> usize {
        let last = self.len.saturating_sub(1);
        if index <= 0 {
            0
        } else {
            index.unsigned_abs().min(last)
        }
    }
}

impl<S: Scalar> AxisModel for FixedAxis<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.len
    }

    fn offset_of(&mut self, index: usize) -> S {
        S::from_usize(index.min(self.len.saturating_sub(1))) * self.item_size
    }

    fn size_of(&mut self, _index: usize) -> S {
        self.item_size
    }

    fn estimated_total_extent(&mut self) -> S {
        S::from_usize(self.len) * self.item_size
    }

    fn start_index_for_offset(&mut self, offset: S) -> usize {
        if self.len == 0 || self.item_size <= S::zero() {
            return 0;
        }
        self.clamp_index((offset / self.item_size).floor_to_isize())
    }

    fn stop_index_for_start(
        &mut self,
        start_index: usize,
        scroll_offset: S,
        viewport_extent: S,
    ) -> usize {
        if self.len == 0 {
            return 0;
        }
        if self.item_size <= S::zero() {
            // Zero-sized items all fit in any viewport.
            return self.len - 1;
        }
        let start_index = start_index.min(self.len - 1);
        let start_offset = S::from_usize(start_index) * self.item_size;
        let remaining = viewport_extent + scroll_offset - start_offset;
        let visible = (remaining / self.item_size).floor_to_isize();
        self.clamp_index(visible.saturating_add_unsigned(start_index))
    }
}
