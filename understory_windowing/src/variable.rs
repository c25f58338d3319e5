// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An [`AxisModel`] whose item sizes come from a size function, measured lazily.

use core::fmt;

use crate::search::{index_for_offset, stop_index_for_start};
use crate::{AxisModel, AxisState, ConfigError, ItemMetadata, Scalar};

/// An [`AxisModel`] for items whose sizes are only known through a size function.
///
/// Items are measured on demand, in index order, the first time a query needs
/// them; see [`AxisState`]. The total extent is estimated from the measured
/// prefix plus [`AxisState::estimated_item_size`] for the rest, so hosts can
/// size the scroll surface without measuring every item up front.
///
/// `size_fn` must be a pure function of the item index. Replacing it (or the
/// estimate) discards every measurement.
pub struct VariableAxis<S: Scalar, F> {
    len: usize,
    size_fn: F,
    state: AxisState<S>,
}

impl<S: Scalar, F> fmt::Debug for VariableAxis<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableAxis")
            .field("len", &self.len)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S: Scalar, F: Fn(usize) -> S> VariableAxis<S, F> {
    /// Creates an axis with `len` items sized by `size_fn`, using the default
    /// estimate for unmeasured items.
    #[must_use]
    pub fn new(len: usize, size_fn: F) -> Self {
        Self {
            len,
            size_fn,
            state: AxisState::new(),
        }
    }

    /// Creates an axis with `len` items sized by `size_fn` and the given
    /// estimate for unmeasured items.
    ///
    /// Returns [`ConfigError::InvalidEstimatedItemSize`] if the estimate is
    /// NaN, infinite, or negative.
    pub fn try_new(len: usize, size_fn: F, estimated_item_size: S) -> Result<Self, ConfigError> {
        Ok(Self {
            len,
            size_fn,
            state: AxisState::with_estimated_item_size(estimated_item_size)?,
        })
    }

    /// Returns the measured metadata store.
    #[must_use]
    pub fn state(&self) -> &AxisState<S> {
        &self.state
    }

    /// Returns the highest measured index, if any.
    #[must_use]
    pub fn high_water_mark(&self) -> Option<usize> {
        self.state.high_water_mark()
    }

    /// Returns the estimate used for unmeasured items.
    #[must_use]
    pub fn estimated_item_size(&self) -> S {
        self.state.estimated_item_size()
    }

    /// Sets the number of items on the axis.
    ///
    /// Shrinking drops measurements past the new end; growing keeps them.
    pub fn set_len(&mut self, len: usize) {
        if len < self.state.measured_len() {
            self.state.truncate(len);
        }
        self.len = len;
    }

    /// Replaces the size function and discards all measurements.
    pub fn set_size_fn(&mut self, size_fn: F) {
        self.size_fn = size_fn;
        self.reset();
    }

    /// Replaces the estimate for unmeasured items and discards all measurements.
    ///
    /// On error the axis is left untouched.
    pub fn set_estimated_item_size(&mut self, estimated_item_size: S) -> Result<(), ConfigError> {
        self.state = AxisState::with_estimated_item_size(estimated_item_size)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, "axis metadata reset for a new estimate");
        Ok(())
    }

    /// Discards all measurements, keeping the size function and estimate.
    pub fn reset(&mut self) {
        self.state.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, "axis metadata reset");
    }

    /// Returns the metadata of `index`, measuring up to it if needed.
    ///
    /// `index` is clamped to the last item. Returns `None` on an empty axis.
    pub fn item_metadata(&mut self, index: usize) -> Option<ItemMetadata<S>> {
        let last = self.len.checked_sub(1)?;
        Some(self.state.ensure_measured(index.min(last), &self.size_fn))
    }
}

impl<S: Scalar, F: Fn(usize) -> S> AxisModel for VariableAxis<S, F> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.len
    }

    fn offset_of(&mut self, index: usize) -> S {
        self.item_metadata(index).map_or_else(S::zero, |m| m.offset)
    }

    fn size_of(&mut self, index: usize) -> S {
        self.item_metadata(index).map_or_else(S::zero, |m| m.size)
    }

    fn metadata_of(&mut self, index: usize) -> ItemMetadata<S> {
        self.item_metadata(index).unwrap_or(ItemMetadata {
            offset: S::zero(),
            size: S::zero(),
        })
    }

    fn estimated_total_extent(&mut self) -> S {
        self.state.estimated_total_extent(self.len)
    }

    fn start_index_for_offset(&mut self, offset: S) -> usize {
        index_for_offset(&mut self.state, offset, self.len, &self.size_fn)
    }

    fn stop_index_for_start(
        &mut self,
        start_index: usize,
        scroll_offset: S,
        viewport_extent: S,
    ) -> usize {
        stop_index_for_start(
            &mut self.state,
            start_index,
            scroll_offset,
            viewport_extent,
            self.len,
            &self.size_fn,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::VariableAxis;
    use crate::{AxisModel, ConfigError};

    #[test]
    fn offsets_accumulate_sizes() {
        let mut axis = VariableAxis::new(3, |i| [10.0_f32, 20.0, 30.0][i]);
        assert_eq!(axis.len(), 3);
        assert_eq!(axis.offset_of(0), 0.0);
        assert_eq!(axis.offset_of(1), 10.0);
        assert_eq!(axis.offset_of(2), 30.0);
        assert_eq!(axis.size_of(1), 20.0);
        // Out-of-range indices clamp to the last item.
        assert_eq!(axis.offset_of(7), 30.0);
        assert_eq!(axis.estimated_total_extent(), 60.0);
    }

    #[test]
    fn queries_measure_only_what_they_touch() {
        let mut axis = VariableAxis::new(10_000, |_| 20.0_f64);
        assert_eq!(axis.high_water_mark(), None);
        assert_eq!(axis.estimated_total_extent(), 500_000.0);

        let start = axis.start_index_for_offset(0.0);
        let stop = axis.stop_index_for_start(start, 0.0, 100.0);
        assert_eq!((start, stop), (0, 4));
        assert_eq!(axis.high_water_mark(), Some(4));
        // Five measured (100) plus 9995 estimated at 50.
        assert_eq!(axis.estimated_total_extent(), 100.0 + 9995.0 * 50.0);
    }

    #[test]
    fn shrinking_truncates_measurements() {
        let mut axis = VariableAxis::new(100, |_| 5.0_f64);
        axis.item_metadata(60);
        axis.set_len(10);
        assert_eq!(axis.high_water_mark(), Some(9));
        assert_eq!(axis.estimated_total_extent(), 50.0);

        axis.set_len(20);
        assert_eq!(axis.high_water_mark(), Some(9));
        assert_eq!(axis.offset_of(15), 75.0);
    }

    #[test]
    fn reconfiguring_discards_measurements() {
        let mut axis = VariableAxis::try_new(50, |_| 5.0_f64, 10.0).unwrap();
        axis.item_metadata(20);
        axis.set_estimated_item_size(8.0).unwrap();
        assert_eq!(axis.high_water_mark(), None);
        assert_eq!(axis.estimated_total_extent(), 400.0);

        axis.item_metadata(20);
        assert_eq!(
            axis.set_estimated_item_size(-1.0),
            Err(ConfigError::InvalidEstimatedItemSize)
        );
        assert_eq!(axis.high_water_mark(), Some(20));
        assert_eq!(axis.estimated_item_size(), 8.0);
    }

    #[test]
    fn replacing_the_size_function_remeasures() {
        let mut axis: VariableAxis<f64, Box<dyn Fn(usize) -> f64>> =
            VariableAxis::new(10, Box::new(|_| 5.0));
        assert_eq!(axis.offset_of(4), 20.0);

        axis.set_size_fn(Box::new(|_| 7.0));
        assert_eq!(axis.high_water_mark(), None);
        assert_eq!(axis.offset_of(4), 28.0);
    }

    #[test]
    fn empty_axis_answers_zero() {
        let mut axis = VariableAxis::new(0, |_| 5.0_f32);
        assert_eq!(axis.item_metadata(0), None);
        assert_eq!(axis.offset_of(3), 0.0);
        assert_eq!(axis.start_index_for_offset(40.0), 0);
        assert_eq!(axis.estimated_total_extent(), 0.0);
    }
}
