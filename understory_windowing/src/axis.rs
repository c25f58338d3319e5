// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration and the runtime-selected axis strategy.
//!
//! Hosts that know their sizing strategy at compile time can use
//! [`FixedAxis`] or [`VariableAxis`] directly. Hosts that pick it from
//! configuration build an [`Axis`] from an [`AxisConfig`]:
//!
//! ```rust
//! use understory_windowing::{AxisConfig, AxisModel};
//!
//! let mut rows = AxisConfig::variable(10_000, |i| if i % 2 == 0 { 30.0 } else { 60.0 })
//!     .with_estimated_item_size(45.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(rows.estimated_total_extent(), 450_000.0);
//! assert_eq!(rows.start_index_for_offset(100.0), 2);
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::{AxisModel, ConfigError, FixedAxis, ItemMetadata, Scalar, VariableAxis};

/// A boxed item size function.
pub type SizeFn<S> = Box<dyn Fn(usize) -> S>;

/// How the items of an axis are sized.
pub enum ItemSize<S: Scalar> {
    /// Every item has the same size.
    Fixed(S),
    /// Sizes come from a pure function of the item index.
    Variable(SizeFn<S>),
}

impl<S: Scalar> fmt::Debug for ItemSize<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::Variable(_) => f.debug_tuple("Variable").finish_non_exhaustive(),
        }
    }
}

/// Configuration for one axis, validated by [`AxisConfig::build`].
#[derive(Debug)]
pub struct AxisConfig<S: Scalar> {
    /// Number of items on the axis.
    pub len: usize,
    /// Sizing strategy.
    pub item_size: ItemSize<S>,
    /// Estimate for items not yet measured. Only used by variable axes.
    pub estimated_item_size: S,
}

impl<S: Scalar> AxisConfig<S> {
    /// Configures `len` items of size `item_size`.
    #[must_use]
    pub fn fixed(len: usize, item_size: S) -> Self {
        Self {
            len,
            item_size: ItemSize::Fixed(item_size),
            estimated_item_size: S::DEFAULT_ESTIMATED_ITEM_SIZE,
        }
    }

    /// Configures `len` items sized by `size_fn`.
    #[must_use]
    pub fn variable(len: usize, size_fn: impl Fn(usize) -> S + 'static) -> Self {
        Self {
            len,
            item_size: ItemSize::Variable(Box::new(size_fn)),
            estimated_item_size: S::DEFAULT_ESTIMATED_ITEM_SIZE,
        }
    }

    /// Sets the estimate used for items that have not been measured yet.
    #[must_use]
    pub fn with_estimated_item_size(mut self, estimated_item_size: S) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    /// Validates the configuration and builds the axis.
    ///
    /// Fails with [`ConfigError::InvalidItemSize`] for a fixed size that is
    /// NaN, infinite, or negative, and with
    /// [`ConfigError::InvalidEstimatedItemSize`] for such an estimate on a
    /// variable axis.
    pub fn build(self) -> Result<Axis<S>, ConfigError> {
        match self.item_size {
            ItemSize::Fixed(size) => FixedAxis::try_new(self.len, size).map(Axis::Fixed),
            ItemSize::Variable(size_fn) => {
                VariableAxis::try_new(self.len, size_fn, self.estimated_item_size)
                    .map(Axis::Variable)
            }
        }
    }
}

/// An axis whose sizing strategy is selected at construction.
#[derive(Debug)]
pub enum Axis<S: Scalar> {
    /// Closed-form axis with a single item size.
    Fixed(FixedAxis<S>),
    /// Lazily measured axis driven by a size function.
    Variable(VariableAxis<S, SizeFn<S>>),
}

impl<S: Scalar> Axis<S> {
    /// Sets the number of items on the axis.
    pub fn set_len(&mut self, len: usize) {
        match self {
            Self::Fixed(axis) => axis.set_len(len),
            Self::Variable(axis) => axis.set_len(len),
        }
    }

    /// Returns the highest measured index.
    ///
    /// Fixed axes never measure and always return `None`.
    #[must_use]
    pub fn high_water_mark(&self) -> Option<usize> {
        match self {
            Self::Fixed(_) => None,
            Self::Variable(axis) => axis.high_water_mark(),
        }
    }
}

impl<S: Scalar> AxisModel for Axis<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        match self {
            Self::Fixed(axis) => axis.len(),
            Self::Variable(axis) => axis.len(),
        }
    }

    fn offset_of(&mut self, index: usize) -> S {
        match self {
            Self::Fixed(axis) => axis.offset_of(index),
            Self::Variable(axis) => axis.offset_of(index),
        }
    }

    fn size_of(&mut self, index: usize) -> S {
        match self {
            Self::Fixed(axis) => axis.size_of(index),
            Self::Variable(axis) => axis.size_of(index),
        }
    }

    fn metadata_of(&mut self, index: usize) -> ItemMetadata<S> {
        match self {
            Self::Fixed(axis) => axis.metadata_of(index),
            Self::Variable(axis) => axis.metadata_of(index),
        }
    }

    fn estimated_total_extent(&mut self) -> S {
        match self {
            Self::Fixed(axis) => axis.estimated_total_extent(),
            Self::Variable(axis) => axis.estimated_total_extent(),
        }
    }

    fn start_index_for_offset(&mut self, offset: S) -> usize {
        match self {
            Self::Fixed(axis) => axis.start_index_for_offset(offset),
            Self::Variable(axis) => axis.start_index_for_offset(offset),
        }
    }

    fn stop_index_for_start(
        &mut self,
        start_index: usize,
        scroll_offset: S,
        viewport_extent: S,
    ) -> usize {
        match self {
            Self::Fixed(axis) => {
                axis.stop_index_for_start(start_index, scroll_offset, viewport_extent)
            }
            Self::Variable(axis) => {
                axis.stop_index_for_start(start_index, scroll_offset, viewport_extent)
            }
        }
    }
}
