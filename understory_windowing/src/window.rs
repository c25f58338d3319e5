// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window assembly: from a scroll offset to the inclusive range of items to realize.

use core::ops::RangeInclusive;

use crate::{AxisModel, Scalar};

/// Default number of extra items realized in the direction of travel.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Direction of the most recent scroll along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward higher offsets, or no movement.
    #[default]
    Forward,
    /// Toward lower offsets.
    Backward,
}

impl ScrollDirection {
    /// Derives the direction of a move from `previous` to `current`.
    ///
    /// Only a strictly decreasing offset counts as [`ScrollDirection::Backward`].
    #[must_use]
    pub fn from_offsets<S: Scalar>(previous: S, current: S) -> Self {
        if current < previous {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// How many extra items to realize around the visible range.
///
/// The side facing the direction of travel receives `max(1, count)` extra
/// items and the trailing side receives exactly one, so fast scrolling has a
/// buffer ahead of it without paying for one behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overscan {
    /// Extra items on the leading side.
    pub count: usize,
}

impl Default for Overscan {
    fn default() -> Self {
        Self::new(DEFAULT_OVERSCAN)
    }
}

impl Overscan {
    /// Creates an overscan policy with `count` items on the leading side.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }

    /// Returns `(backward, forward)` item counts for a scroll in `direction`.
    #[must_use]
    pub fn extents(self, direction: ScrollDirection) -> (usize, usize) {
        let leading = self.count.max(1);
        match direction {
            ScrollDirection::Forward => (1, leading),
            ScrollDirection::Backward => (leading, 1),
        }
    }
}

/// Inclusive index ranges resolved for one axis.
///
/// `visible_start..=visible_stop` is the minimal range covering the viewport;
/// `overscan_start..=overscan_stop` is the superset that should actually be
/// realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowRange {
    /// First index to realize.
    pub overscan_start: usize,
    /// Last index to realize.
    pub overscan_stop: usize,
    /// First index intersecting the viewport.
    pub visible_start: usize,
    /// Last index intersecting the viewport.
    pub visible_stop: usize,
}

impl WindowRange {
    /// Indices intersecting the viewport.
    #[must_use]
    pub fn visible_indices(&self) -> RangeInclusive<usize> {
        self.visible_start..=self.visible_stop
    }

    /// Indices to realize, including overscan.
    #[must_use]
    pub fn render_indices(&self) -> RangeInclusive<usize> {
        self.overscan_start..=self.overscan_stop
    }

    /// Number of indices to realize.
    #[must_use]
    pub fn render_len(&self) -> usize {
        self.overscan_stop - self.overscan_start + 1
    }

    /// Returns `true` if `index` intersects the viewport.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_indices().contains(&index)
    }

    /// Returns `true` if `index` should be realized.
    #[must_use]
    pub fn is_rendered(&self, index: usize) -> bool {
        self.render_indices().contains(&index)
    }
}

/// Computes the window for a scroll from `previous_offset` to `scroll_offset`.
///
/// Returns `None` when the model has no items; the model is not queried in
/// that case.
pub fn compute_window<M>(
    model: &mut M,
    scroll_offset: M::Scalar,
    previous_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan: Overscan,
) -> Option<WindowRange>
where
    M: AxisModel,
{
    let direction = ScrollDirection::from_offsets(previous_offset, scroll_offset);
    compute_window_with_direction(model, scroll_offset, viewport_extent, direction, overscan)
}

/// Computes the window for a scroll offset whose direction is already known.
///
/// - `scroll_offset`: leading edge of the viewport in axis coordinates.
/// - `viewport_extent`: size of the viewport along the axis.
/// - `direction`: direction of the scroll that led here; biases overscan.
///
/// Scroll offsets outside the content (for example during elastic
/// overscroll) are not rejected: they resolve to the first or last items.
pub fn compute_window_with_direction<M>(
    model: &mut M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    direction: ScrollDirection,
    overscan: Overscan,
) -> Option<WindowRange>
where
    M: AxisModel,
{
    let len = model.len();
    let last = len.checked_sub(1)?;

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "window_range",
        len,
        scroll_offset = ?scroll_offset,
        viewport_extent = ?viewport_extent,
        direction = ?direction
    )
    .entered();

    let visible_start = model.start_index_for_offset(scroll_offset).min(last);
    let visible_stop = model
        .stop_index_for_start(visible_start, scroll_offset, viewport_extent)
        .clamp(visible_start, last);

    let (backward, forward) = overscan.extents(direction);
    Some(WindowRange {
        overscan_start: visible_start.saturating_sub(backward),
        overscan_stop: visible_stop.saturating_add(forward).min(last),
        visible_start,
        visible_stop,
    })
}
