// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowed grid: two independent axes, rows and columns.
//!
//! Each axis is windowed exactly like a list, with its own model, scroll
//! offset, scroll direction, and viewport extent. The cells to realize are the
//! Cartesian product of the two resulting ranges. Scrolling one axis never
//! measures, invalidates, or otherwise touches the other.
//!
//! ```rust
//! use understory_windowing::{FixedAxis, VariableAxis, WindowedGrid};
//!
//! let rows = VariableAxis::new(10_000, |row| if row % 10 == 0 { 60.0 } else { 30.0 });
//! let columns = FixedAxis::try_new(200, 100.0).unwrap();
//! let mut grid = WindowedGrid::new(rows, columns, 400.0, 300.0);
//!
//! grid.set_scroll_offsets(250.0, 1_000.0);
//! let window = grid.window().unwrap();
//! for (row, column) in window.cells() {
//!     let (left, top) = grid.cell_offset(row, column).unwrap();
//!     // Host code positions the cell at (left, top) here.
//!     let _ = (left, top);
//! }
//! assert!(window.rows.visible_start > 0);
//! assert_eq!(window.columns.visible_start, 2);
//! ```

use core::iter::FusedIterator;

use crate::{AxisModel, Orientation, Overscan, ScrollAlign, WindowRange, WindowedList};

/// Row and column windows of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridWindow {
    /// Window over row indices.
    pub rows: WindowRange,
    /// Window over column indices.
    pub columns: WindowRange,
}

impl GridWindow {
    /// Iterates `(row, column)` pairs to realize, row by row.
    #[must_use]
    pub fn cells(&self) -> GridCells {
        GridCells::new(
            self.rows.overscan_start,
            self.rows.overscan_stop,
            self.columns.overscan_start,
            self.columns.overscan_stop,
        )
    }

    /// Iterates `(row, column)` pairs intersecting the viewport, row by row.
    #[must_use]
    pub fn visible_cells(&self) -> GridCells {
        GridCells::new(
            self.rows.visible_start,
            self.rows.visible_stop,
            self.columns.visible_start,
            self.columns.visible_stop,
        )
    }

    /// Number of cells to realize.
    #[must_use]
    pub fn render_len(&self) -> usize {
        self.rows.render_len() * self.columns.render_len()
    }

    /// Returns `true` if the cell should be realized.
    #[must_use]
    pub fn is_rendered(&self, row: usize, column: usize) -> bool {
        self.rows.is_rendered(row) && self.columns.is_rendered(column)
    }
}

/// Iterator over the cells of a rectangular block of a [`GridWindow`].
#[derive(Debug, Clone)]
pub struct GridCells {
    row: usize,
    row_stop: usize,
    column: usize,
    column_start: usize,
    column_stop: usize,
    done: bool,
}

impl GridCells {
    fn new(row_start: usize, row_stop: usize, column_start: usize, column_stop: usize) -> Self {
        Self {
            row: row_start,
            row_stop,
            column: column_start,
            column_start,
            column_stop,
            done: row_start > row_stop || column_start > column_stop,
        }
    }
}

impl Iterator for GridCells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let cell = (self.row, self.column);
        if self.column < self.column_stop {
            self.column += 1;
        } else if self.row < self.row_stop {
            self.row += 1;
            self.column = self.column_start;
        } else {
            self.done = true;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let columns = self.column_stop - self.column_start + 1;
        let remaining_in_row = self.column_stop - self.column + 1;
        let remaining = (self.row_stop - self.row) * columns + remaining_in_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridCells {}

impl FusedIterator for GridCells {}

/// Controller for a windowed grid with independent row and column axes.
///
/// Rows are windowed against the viewport height and the vertical scroll
/// offset (`scroll_top`); columns against the viewport width and the
/// horizontal offset (`scroll_left`). Both axes share one [`Overscan`] policy
/// but track their scroll direction separately.
#[derive(Debug)]
pub struct WindowedGrid<R, C>
where
    R: AxisModel,
    C: AxisModel<Scalar = R::Scalar>,
{
    rows: WindowedList<R>,
    columns: WindowedList<C>,
}

impl<R, C> WindowedGrid<R, C>
where
    R: AxisModel,
    C: AxisModel<Scalar = R::Scalar>,
{
    /// Creates a grid over `row_model` and `column_model` with a viewport of
    /// `width` by `height`.
    #[must_use]
    pub fn new(row_model: R, column_model: C, width: R::Scalar, height: R::Scalar) -> Self {
        Self {
            rows: WindowedList::new(row_model, height).with_orientation(Orientation::Vertical),
            columns: WindowedList::new(column_model, width)
                .with_orientation(Orientation::Horizontal),
        }
    }

    /// Sets the overscan policy for both axes.
    #[must_use]
    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.set_overscan(overscan);
        self
    }

    /// Returns the row axis controller.
    #[must_use]
    pub fn rows(&self) -> &WindowedList<R> {
        &self.rows
    }

    /// Returns the row axis controller mutably.
    pub fn rows_mut(&mut self) -> &mut WindowedList<R> {
        &mut self.rows
    }

    /// Returns the column axis controller.
    #[must_use]
    pub fn columns(&self) -> &WindowedList<C> {
        &self.columns
    }

    /// Returns the column axis controller mutably.
    pub fn columns_mut(&mut self) -> &mut WindowedList<C> {
        &mut self.columns
    }

    /// Returns the row model.
    #[must_use]
    pub fn row_model(&self) -> &R {
        self.rows.model()
    }

    /// Returns the column model.
    #[must_use]
    pub fn column_model(&self) -> &C {
        self.columns.model()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the horizontal scroll offset.
    #[must_use]
    pub fn scroll_left(&self) -> R::Scalar {
        self.columns.scroll_offset()
    }

    /// Returns the vertical scroll offset.
    #[must_use]
    pub fn scroll_top(&self) -> R::Scalar {
        self.rows.scroll_offset()
    }

    /// Sets both scroll offsets. Each axis records its own direction.
    pub fn set_scroll_offsets(&mut self, scroll_left: R::Scalar, scroll_top: R::Scalar) {
        self.columns.set_scroll_offset(scroll_left);
        self.rows.set_scroll_offset(scroll_top);
    }

    /// Sets the horizontal scroll offset only.
    pub fn set_scroll_left(&mut self, scroll_left: R::Scalar) {
        self.columns.set_scroll_offset(scroll_left);
    }

    /// Sets the vertical scroll offset only.
    pub fn set_scroll_top(&mut self, scroll_top: R::Scalar) {
        self.rows.set_scroll_offset(scroll_top);
    }

    /// Adjusts both scroll offsets.
    pub fn scroll_by(&mut self, dx: R::Scalar, dy: R::Scalar) {
        self.columns.scroll_by(dx);
        self.rows.scroll_by(dy);
    }

    /// Sets the viewport size.
    pub fn set_viewport_size(&mut self, width: R::Scalar, height: R::Scalar) {
        self.columns.set_viewport_size(width, height);
        self.rows.set_viewport_size(width, height);
    }

    /// Sets the overscan policy for both axes.
    pub fn set_overscan(&mut self, overscan: Overscan) {
        self.rows.set_overscan(overscan);
        self.columns.set_overscan(overscan);
    }

    /// Computes or returns the cached grid window.
    ///
    /// Returns `None` if there are no rows or no columns. Each axis caches its
    /// own window, so scrolling one axis does not recompute the other.
    #[must_use]
    pub fn window(&mut self) -> Option<GridWindow> {
        if self.rows.is_empty() || self.columns.is_empty() {
            return None;
        }
        Some(GridWindow {
            rows: self.rows.window()?,
            columns: self.columns.window()?,
        })
    }

    /// Projected total width of the grid.
    #[must_use]
    pub fn estimated_total_width(&mut self) -> R::Scalar {
        self.columns.estimated_total_extent()
    }

    /// Projected total height of the grid.
    #[must_use]
    pub fn estimated_total_height(&mut self) -> R::Scalar {
        self.rows.estimated_total_extent()
    }

    /// Returns the `(left, top)` offset of a cell, or `None` if out of range.
    #[must_use]
    pub fn cell_offset(&mut self, row: usize, column: usize) -> Option<(R::Scalar, R::Scalar)> {
        let top = self.rows.item_offset(row)?;
        let left = self.columns.item_offset(column)?;
        Some((left, top))
    }

    /// Returns the `(width, height)` of a cell, or `None` if out of range.
    #[must_use]
    pub fn cell_size(&mut self, row: usize, column: usize) -> Option<(R::Scalar, R::Scalar)> {
        let height = self.rows.item_size(row)?;
        let width = self.columns.item_size(column)?;
        Some((width, height))
    }

    /// Scrolls both axes so the cell is brought into view.
    pub fn scroll_to_cell(&mut self, row: usize, column: usize, align: ScrollAlign) {
        self.rows.scroll_to_index(row, align);
        self.columns.scroll_to_index(column, align);
    }
}

#[cfg(feature = "kurbo")]
impl<R, C> WindowedGrid<R, C>
where
    R: AxisModel<Scalar = f64>,
    C: AxisModel<Scalar = f64>,
{
    /// Returns the rectangle a cell occupies in content coordinates.
    #[must_use]
    pub fn cell_rect(&mut self, row: usize, column: usize) -> Option<kurbo::Rect> {
        let y = self.rows.item_metadata(row)?;
        let x = self.columns.item_metadata(column)?;
        Some(kurbo::Rect::new(x.offset, y.offset, x.end(), y.end()))
    }

    /// Returns the projected size of the scroll surface.
    #[must_use]
    pub fn content_size(&mut self) -> kurbo::Size {
        kurbo::Size::new(self.estimated_total_width(), self.estimated_total_height())
    }

    /// Sets the viewport from a [`kurbo::Size`].
    pub fn set_viewport(&mut self, size: kurbo::Size) {
        self.set_viewport_size(size.width, size.height);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{GridWindow, WindowedGrid};
    use crate::{FixedAxis, ScrollAlign, ScrollDirection, VariableAxis, WindowRange};

    fn range(start: usize, stop: usize) -> WindowRange {
        WindowRange {
            overscan_start: start,
            overscan_stop: stop,
            visible_start: start,
            visible_stop: stop,
        }
    }

    #[test]
    fn cells_are_the_cartesian_product() {
        let window = GridWindow {
            rows: range(3, 4),
            columns: range(7, 9),
        };
        let cells: Vec<_> = window.cells().collect();
        assert_eq!(
            cells,
            [(3, 7), (3, 8), (3, 9), (4, 7), (4, 8), (4, 9)]
        );
        assert_eq!(window.cells().len(), 6);
        assert_eq!(window.render_len(), 6);
        assert!(window.is_rendered(4, 8));
        assert!(!window.is_rendered(5, 8));
    }

    #[test]
    fn size_hint_tracks_progress() {
        let window = GridWindow {
            rows: range(0, 1),
            columns: range(0, 1),
        };
        let mut cells = window.cells();
        assert_eq!(cells.len(), 4);
        cells.next();
        cells.next();
        cells.next();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells.next(), Some((1, 1)));
        assert_eq!(cells.len(), 0);
        assert_eq!(cells.next(), None);
    }

    #[test]
    fn axes_window_independently() {
        let rows = FixedAxis::try_new(100, 20.0_f64).unwrap();
        let columns = FixedAxis::try_new(50, 100.0_f64).unwrap();
        let mut grid = WindowedGrid::new(rows, columns, 250.0, 100.0);

        let window = grid.window().unwrap();
        assert_eq!(window.rows.visible_indices(), 0..=5);
        assert_eq!(window.columns.visible_indices(), 0..=2);

        grid.set_scroll_offsets(300.0, 400.0);
        let window = grid.window().unwrap();
        assert_eq!(window.rows.visible_indices(), 20..=25);
        assert_eq!(window.columns.visible_indices(), 3..=5);

        // Scroll back only horizontally.
        grid.set_scroll_left(100.0);
        assert_eq!(grid.columns().scroll_direction(), ScrollDirection::Backward);
        assert_eq!(grid.rows().scroll_direction(), ScrollDirection::Forward);
        let window = grid.window().unwrap();
        assert_eq!(window.columns.render_indices(), 0..=4);
        assert_eq!(window.rows.render_indices(), 19..=27);
    }

    #[test]
    fn scrolling_rows_keeps_the_column_window() {
        let rows = FixedAxis::try_new(1000, 20.0_f64).unwrap();
        let columns = FixedAxis::try_new(50, 100.0_f64).unwrap();
        let mut grid = WindowedGrid::new(rows, columns, 250.0, 100.0);
        grid.set_scroll_left(300.0);
        let columns_before = grid.window().unwrap().columns;

        grid.set_scroll_top(800.0);
        grid.set_scroll_top(400.0);
        let window = grid.window().unwrap();
        assert_eq!(window.columns, columns_before);
        assert_eq!(window.rows.visible_indices(), 20..=25);
        assert_eq!(grid.rows().scroll_direction(), ScrollDirection::Backward);
        assert_eq!(grid.columns().scroll_direction(), ScrollDirection::Forward);
        assert_eq!(grid.scroll_left(), 300.0);
    }

    #[test]
    fn empty_axis_yields_no_window() {
        let rows = FixedAxis::try_new(0, 20.0_f32).unwrap();
        let columns = FixedAxis::try_new(10, 20.0_f32).unwrap();
        let mut grid = WindowedGrid::new(rows, columns, 100.0, 100.0);
        assert_eq!(grid.window(), None);
        assert_eq!(grid.cell_offset(0, 0), None);
    }

    #[test]
    fn cell_geometry_and_scroll_to_cell() {
        let rows = VariableAxis::new(10, |i| (i + 1) as f32 * 10.0);
        let columns = FixedAxis::try_new(10, 50.0_f32).unwrap();
        let mut grid = WindowedGrid::new(rows, columns, 100.0, 100.0);

        assert_eq!(grid.cell_offset(3, 2), Some((100.0, 60.0)));
        assert_eq!(grid.cell_size(3, 2), Some((50.0, 40.0)));
        assert_eq!(grid.cell_size(10, 2), None);

        grid.scroll_to_cell(5, 6, ScrollAlign::Start);
        assert_eq!(grid.scroll_top(), 150.0);
        assert_eq!(grid.scroll_left(), 300.0);
        assert_eq!(grid.estimated_total_width(), 500.0);
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn cell_rects_use_content_coordinates() {
        let rows = FixedAxis::try_new(10, 20.0).unwrap();
        let columns = FixedAxis::try_new(10, 50.0).unwrap();
        let mut grid = WindowedGrid::new(rows, columns, 100.0, 100.0);
        assert_eq!(
            grid.cell_rect(2, 1),
            Some(kurbo::Rect::new(50.0, 40.0, 100.0, 60.0))
        );
        assert_eq!(grid.content_size(), kurbo::Size::new(500.0, 200.0));
    }
}
