// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_windowing --heading-base-level=0

//! Understory Windowing: list and grid windowing over lazily measured axes.
//!
//! This crate decides which items of a very large list or grid intersect the
//! viewport, so hosts only realize those items no matter how many exist. It
//! is renderer-agnostic and shared across UI stacks.
//!
//! The core concepts are:
//!
//! - [`AxisState`]: per-axis metadata store. It records the `{offset, size}` of
//!   items from index `0` up to a high-water mark, measuring them lazily and in
//!   index order through a size function, each at most once.
//! - [`index_for_offset`] and [`stop_index_for_start`]: the search routines that
//!   turn a scroll offset into the first visible item (exponential search past
//!   the high-water mark, binary search inside it) and find the last item needed
//!   to fill the viewport.
//! - [`AxisModel`]: the per-axis capability interface, implemented by
//!   [`FixedAxis`] (closed-form arithmetic) and [`VariableAxis`] (backed by an
//!   [`AxisState`]), and by [`Axis`], which picks one of the two at runtime from
//!   an [`AxisConfig`].
//! - [`compute_window`]: assembles a [`WindowRange`] from a scroll offset, the
//!   previous offset, the viewport extent, and an [`Overscan`] policy that
//!   biases extra items toward the [`ScrollDirection`] of travel.
//! - [`WindowedList`] and [`WindowedGrid`]: small controllers that own the
//!   model(s), scroll offsets, viewport, and overscan, and cache the most
//!   recent window. A grid windows its rows and columns completely
//!   independently.
//!
//! This crate deliberately does **not** know about widgets, display trees, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the actual data and view/widget instances.
//! - Feeding scroll offsets and viewport sizes into a controller.
//! - Realizing the indices of [`WindowRange::render_indices`] and positioning
//!   them with [`WindowedList::item_metadata`].
//! - Sizing the scroll surface from [`WindowedList::estimated_total_extent`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_windowing::{VariableAxis, WindowedList};
//!
//! // 50 000 rows; every fifth row is a taller section header.
//! let rows = VariableAxis::new(50_000, |i| if i % 5 == 0 { 48.0 } else { 24.0 });
//! let mut list = WindowedList::new(rows, 600.0);
//!
//! list.set_scroll_offset(12_000.0);
//! let window = list.window().unwrap();
//! assert!(window.visible_start <= window.visible_stop);
//!
//! for index in window.render_indices() {
//!     let item = list.item_metadata(index).unwrap();
//!     // Host code positions the item at `item.offset` with extent `item.size`.
//!     let _ = item;
//! }
//!
//! // Only the items needed so far have been measured; the rest is estimated.
//! assert!(list.model().high_water_mark().unwrap() < 1_000);
//! let total = list.estimated_total_extent();
//! assert!(total > 0.0);
//! ```
//!
//! The size function must be a pure function of the item index. Changing it,
//! or the estimate for unmeasured items, discards every measurement.
//!
//! All sizes and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels). Configured sizes must be finite and
//! non-negative; invalid ones are rejected with a [`ConfigError`] when the
//! axis is built. Scroll offsets and indices are clamped, never rejected.
//!
//! ## Features
//!
//! - `std` *(default)*: forwards to `kurbo/std` when `kurbo` is enabled.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds with `kurbo`.
//! - `kurbo`: [`kurbo::Rect`] and [`kurbo::Size`] helpers on [`WindowedGrid`].
//! - `tracing`: `tracing` spans and events for window assembly and
//!   measurement.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod error;
mod fixed;
mod grid;
mod list;
mod metadata;
mod model;
mod scalar;
mod search;
mod variable;
mod window;

pub use axis::{Axis, AxisConfig, ItemSize, SizeFn};
pub use error::ConfigError;
pub use fixed::FixedAxis;
pub use grid::{GridCells, GridWindow, WindowedGrid};
pub use list::{Orientation, ScrollAlign, WindowedList};
pub use metadata::{AxisState, ItemMetadata};
pub use model::AxisModel;
pub use scalar::Scalar;
pub use search::{index_for_offset, stop_index_for_start};
pub use variable::VariableAxis;
pub use window::{
    DEFAULT_OVERSCAN, Overscan, ScrollDirection, WindowRange, compute_window,
    compute_window_with_direction,
};
