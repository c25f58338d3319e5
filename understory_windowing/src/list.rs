// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowed list: one [`AxisModel`] plus scroll, viewport, and overscan state.

use crate::{
    AxisModel, ItemMetadata, Overscan, Scalar, ScrollDirection, WindowRange,
    compute_window_with_direction,
};

/// Which way a list scrolls, and so which viewport dimension gates its window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items are stacked top to bottom; the viewport height matters.
    #[default]
    Vertical,
    /// Items are laid out left to right; the viewport width matters.
    Horizontal,
}

impl Orientation {
    /// Picks the main-axis dimension out of a `(width, height)` pair.
    #[must_use]
    pub fn main<S>(self, width: S, height: S) -> S {
        match self {
            Self::Vertical => height,
            Self::Horizontal => width,
        }
    }
}

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScrollAlign {
    /// Align the leading edge of the item with the start of the viewport.
    #[default]
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the trailing edge of the item with the end of the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Resolves the scroll offset that brings `item` into a viewport of
/// `viewport` extent currently scrolled to `current`.
pub(crate) fn aligned_offset<S: Scalar>(
    item: ItemMetadata<S>,
    current: S,
    viewport: S,
    align: ScrollAlign,
) -> S {
    let item_start = item.offset;
    let item_end = item.end();
    match align {
        ScrollAlign::Start => item_start,
        ScrollAlign::End => (item_end - viewport).max(S::zero()),
        ScrollAlign::Center => {
            let two = S::from_usize(2);
            ((item_start + item_end) / two - viewport / two).max(S::zero())
        }
        ScrollAlign::Nearest => {
            if item_start >= current && item_end <= current + viewport {
                current
            } else if item_start < current {
                item_start
            } else {
                (item_end - viewport).max(S::zero())
            }
        }
    }
}

/// Controller for a windowed list over a single axis.
///
/// This type:
/// - owns an [`AxisModel`] (fixed or lazily measured),
/// - tracks the scroll offset and the direction of the last scroll,
/// - stores the viewport extent, [`Orientation`], and [`Overscan`],
/// - caches the last computed [`WindowRange`].
///
/// Hosts feed scroll offsets and viewport sizes in, realize the indices of
/// [`WindowedList::window`], position each with [`WindowedList::item_metadata`],
/// and size the scroll surface from [`WindowedList::estimated_total_extent`].
#[derive(Debug)]
pub struct WindowedList<M: AxisModel> {
    model: M,
    scroll_offset: M::Scalar,
    direction: ScrollDirection,
    viewport_extent: M::Scalar,
    orientation: Orientation,
    overscan: Overscan,

    dirty: bool,
    last_window: Option<WindowRange>,
}

impl<M: AxisModel> WindowedList<M> {
    /// Creates a vertical list over `model` with the default overscan.
    #[must_use]
    pub fn new(model: M, viewport_extent: M::Scalar) -> Self {
        Self {
            model,
            scroll_offset: M::Scalar::zero(),
            direction: ScrollDirection::Forward,
            viewport_extent: viewport_extent.max(M::Scalar::zero()),
            orientation: Orientation::Vertical,
            overscan: Overscan::default(),
            dirty: true,
            last_window: None,
        }
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the overscan policy.
    #[must_use]
    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.set_overscan(overscan);
        self
    }

    /// Returns a shared reference to the underlying model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns a mutable reference to the underlying model, marking the cached window dirty.
    pub fn model_mut(&mut self) -> &mut M {
        self.dirty = true;
        &mut self.model
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Returns `true` if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> M::Scalar {
        self.scroll_offset
    }

    /// Returns the direction of the last scroll.
    #[must_use]
    pub const fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Sets the scroll offset, recording the direction of travel.
    ///
    /// Negative offsets (elastic overscroll at the start) are clamped to zero.
    pub fn set_scroll_offset(&mut self, offset: M::Scalar) {
        let offset = offset.max(M::Scalar::zero());
        let direction = ScrollDirection::from_offsets(self.scroll_offset, offset);
        if offset != self.scroll_offset || direction != self.direction {
            self.scroll_offset = offset;
            self.direction = direction;
            self.dirty = true;
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: M::Scalar) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Returns the viewport extent along the scroll axis.
    #[must_use]
    pub const fn viewport_extent(&self) -> M::Scalar {
        self.viewport_extent
    }

    /// Sets the viewport extent along the scroll axis.
    pub fn set_viewport_extent(&mut self, extent: M::Scalar) {
        let extent = extent.max(M::Scalar::zero());
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.dirty = true;
        }
    }

    /// Sets the viewport from its width and height, keeping the dimension that
    /// matches the orientation.
    pub fn set_viewport_size(&mut self, width: M::Scalar, height: M::Scalar) {
        self.set_viewport_extent(self.orientation.main(width, height));
    }

    /// Returns the orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the overscan policy.
    #[must_use]
    pub const fn overscan(&self) -> Overscan {
        self.overscan
    }

    /// Sets the overscan policy.
    pub fn set_overscan(&mut self, overscan: Overscan) {
        if overscan != self.overscan {
            self.overscan = overscan;
            self.dirty = true;
        }
    }

    /// Computes or returns the cached window.
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn window(&mut self) -> Option<WindowRange> {
        if self.dirty {
            self.last_window = compute_window_with_direction(
                &mut self.model,
                self.scroll_offset,
                self.viewport_extent,
                self.direction,
                self.overscan,
            );
            self.dirty = false;
        }
        self.last_window
    }

    /// Iterator over indices intersecting the viewport.
    pub fn visible_indices(&mut self) -> impl Iterator<Item = usize> {
        self.window()
            .map(|window| window.visible_indices())
            .into_iter()
            .flatten()
    }

    /// Iterator over indices to realize, including overscan.
    pub fn render_indices(&mut self) -> impl Iterator<Item = usize> {
        self.window()
            .map(|window| window.render_indices())
            .into_iter()
            .flatten()
    }

    /// Returns the first visible index, if any.
    #[must_use]
    pub fn first_visible_index(&mut self) -> Option<usize> {
        self.window().map(|window| window.visible_start)
    }

    /// Returns the last visible index, if any.
    #[must_use]
    pub fn last_visible_index(&mut self) -> Option<usize> {
        self.window().map(|window| window.visible_stop)
    }

    /// Returns the projected total extent of the list.
    ///
    /// This is recomputed on every call so it reflects the latest measurements.
    #[must_use]
    pub fn estimated_total_extent(&mut self) -> M::Scalar {
        self.model.estimated_total_extent()
    }

    /// Returns the `(width, height)` of the scroll surface for a viewport of
    /// `width` by `height`.
    ///
    /// The main axis uses the estimated total extent; the cross axis matches
    /// the viewport.
    #[must_use]
    pub fn content_size(&mut self, width: M::Scalar, height: M::Scalar) -> (M::Scalar, M::Scalar) {
        let total = self.estimated_total_extent();
        match self.orientation {
            Orientation::Vertical => (width, total),
            Orientation::Horizontal => (total, height),
        }
    }

    /// Returns the offset and size of `index`, or `None` if it is out of range.
    #[must_use]
    pub fn item_metadata(&mut self, index: usize) -> Option<ItemMetadata<M::Scalar>> {
        (index < self.model.len()).then(|| self.model.metadata_of(index))
    }

    /// Returns the offset of `index`, or `None` if it is out of range.
    #[must_use]
    pub fn item_offset(&mut self, index: usize) -> Option<M::Scalar> {
        self.item_metadata(index).map(|item| item.offset)
    }

    /// Returns the size of `index`, or `None` if it is out of range.
    #[must_use]
    pub fn item_size(&mut self, index: usize) -> Option<M::Scalar> {
        self.item_metadata(index).map(|item| item.size)
    }

    /// Returns `true` if the given index is fully visible within the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&mut self, index: usize) -> bool {
        let view_start = self.scroll_offset;
        let view_end = self.scroll_offset + self.viewport_extent;
        self.item_metadata(index)
            .is_some_and(|item| item.offset >= view_start && item.end() <= view_end)
    }

    /// Returns `true` if the given index overlaps the viewport at all.
    #[must_use]
    pub fn is_index_partially_visible(&mut self, index: usize) -> bool {
        let view_start = self.scroll_offset;
        let view_end = self.scroll_offset + self.viewport_extent;
        self.item_metadata(index)
            .is_some_and(|item| item.end() > view_start && item.offset < view_end)
    }

    /// Clamps the scroll offset so the viewport stays within the estimated content extent.
    pub fn clamp_scroll_to_content(&mut self) {
        let content = self.estimated_total_extent();
        let max_offset = (content - self.viewport_extent).max(M::Scalar::zero());
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    /// Scrolls so that item `index` is brought into view using the given alignment.
    ///
    /// `index` is clamped to the last item; an empty list scrolls to zero.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        let Some(last) = self.model.len().checked_sub(1) else {
            self.set_scroll_offset(M::Scalar::zero());
            return;
        };
        let item = self.model.metadata_of(index.min(last));
        let offset = aligned_offset(item, self.scroll_offset, self.viewport_extent, align);
        self.set_scroll_offset(offset);
    }
}
