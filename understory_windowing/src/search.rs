// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset-to-index search and viewport range resolution over an [`AxisState`].
//!
//! Both functions measure items on demand through
//! [`AxisState::ensure_measured`], so they only ever touch the part of the
//! axis needed to answer the query.

use crate::{AxisState, Scalar};

/// Returns the index of the item occupying `offset`.
///
/// The result is the last item whose leading edge does not exceed `offset`,
/// clamped to `0..item_count`. Offsets at or before the start resolve to `0`
/// and offsets past the end resolve to the last item. An empty axis yields
/// `0`.
///
/// When `offset` lies inside already-measured territory, this is a binary
/// search over the measured prefix. Otherwise an exponential search walks
/// forward from the high-water mark to bracket the target, measuring only
/// `O(log distance)` new items, before binary searching inside the bracket.
pub fn index_for_offset<S, F>(
    state: &mut AxisState<S>,
    offset: S,
    item_count: usize,
    size_fn: &F,
) -> usize
where
    S: Scalar,
    F: Fn(usize) -> S + ?Sized,
{
    let Some(last) = item_count.checked_sub(1) else {
        return 0;
    };

    // A state measured past a shrunken axis only counts up to its last item.
    let high_water_mark = state.high_water_mark().map(|hwm| hwm.min(last));
    let known_offset = match high_water_mark {
        Some(hwm) if hwm > 0 => state.ensure_measured(hwm, size_fn).offset,
        _ => S::zero(),
    };

    if known_offset >= offset {
        // Nothing measured and nothing before the start: no search needed.
        let Some(high) = high_water_mark else {
            return 0;
        };
        return binary_search(state, offset, 0, high, size_fn);
    }

    exponential_search(
        state,
        offset,
        high_water_mark.unwrap_or(0),
        item_count,
        size_fn,
    )
}

/// Returns the last index needed to cover the viewport when it starts at
/// `start_index`.
///
/// Sizes are accumulated from the leading edge of `start_index` until the
/// covered span reaches `scroll_offset + viewport_extent` or the last item is
/// reached. The cost is linear in the number of visible items.
pub fn stop_index_for_start<S, F>(
    state: &mut AxisState<S>,
    start_index: usize,
    scroll_offset: S,
    viewport_extent: S,
    item_count: usize,
    size_fn: &F,
) -> usize
where
    S: Scalar,
    F: Fn(usize) -> S + ?Sized,
{
    if item_count == 0 {
        return 0;
    }
    let last = item_count - 1;
    let start_index = start_index.min(last);

    let start = state.ensure_measured(start_index, size_fn);
    let max_offset = scroll_offset + viewport_extent;

    let mut offset = start.end();
    let mut stop_index = start_index;
    while stop_index < last && offset < max_offset {
        stop_index += 1;
        offset = offset + state.ensure_measured(stop_index, size_fn).size;
    }
    stop_index
}

/// Doubles the step from `start_index` until an item at or past `offset` is
/// found, then binary searches the bracket `[index / 2, index]`.
fn exponential_search<S, F>(
    state: &mut AxisState<S>,
    offset: S,
    start_index: usize,
    item_count: usize,
    size_fn: &F,
) -> usize
where
    S: Scalar,
    F: Fn(usize) -> S + ?Sized,
{
    let mut interval = 1_usize;
    let mut index = start_index;

    while index < item_count && state.ensure_measured(index, size_fn).offset < offset {
        index = index.saturating_add(interval);
        interval = interval.saturating_mul(2);
    }

    binary_search(
        state,
        offset,
        index / 2,
        index.min(item_count - 1),
        size_fn,
    )
}

/// Binary search over the inclusive range `[low, high]`.
///
/// Returns the exact match if an item starts at `offset`, otherwise the item
/// just before the insertion point.
fn binary_search<S, F>(
    state: &mut AxisState<S>,
    offset: S,
    low: usize,
    high: usize,
    size_fn: &F,
) -> usize
where
    S: Scalar,
    F: Fn(usize) -> S + ?Sized,
{
    let mut left = low;
    let mut right = high;

    while left <= right {
        let middle = left + (right - left) / 2;
        let current_offset = state.ensure_measured(middle, size_fn).offset;

        if current_offset < offset {
            left = middle + 1;
        } else if current_offset > offset {
            if middle == 0 {
                // `left` is 0 as well; nothing precedes the first item.
                break;
            }
            right = middle - 1;
        } else {
            return middle;
        }
    }

    left.saturating_sub(1)
}
