//! Background grid used to accelerate the minimum-distance check.
//!
//! Cells are `radius / √2` wide, so each cell can hold at most one accepted point
//! and every point closer than `radius` to a query lies within two cells of it.
//! Cell coordinates are relative to the grid origin (the region's minimum corner).
use std::f32::consts::SQRT_2;

use glam::Vec2;

/// Number of cells scanned on each side of the query cell.
const NEIGHBOR_REACH: usize = 2;

/// Upper bound on the number of cells a single run may allocate.
pub(crate) const MAX_GRID_CELLS: usize = 1 << 26;

/// Cell size that fits at most one point per cell for the given minimum distance.
#[inline]
pub(crate) fn cell_size_for(radius: f32) -> f32 {
    radius / SQRT_2
}

fn axis_cells(length: f32, cell_size: f32) -> Option<usize> {
    let cells = (length / cell_size).floor();
    if !cells.is_finite() || cells < 0.0 || cells >= MAX_GRID_CELLS as f32 {
        return None;
    }
    (cells as usize).checked_add(1)
}

/// Column/row of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct CellIndex {
    pub(crate) col: usize,
    pub(crate) row: usize,
}

/// Fixed-resolution grid mapping each cell to the store index of its point.
#[derive(Clone, Debug)]
pub(crate) struct SpatialGrid {
    origin: Vec2,
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl SpatialGrid {
    /// Grid dimensions `(cols, rows)` covering `extent`, each `floor(extent / cell_size) + 1`.
    ///
    /// Returns `None` when the grid would exceed [`MAX_GRID_CELLS`].
    pub(crate) fn dimensions_for(cell_size: f32, extent: Vec2) -> Option<(usize, usize)> {
        let cols = axis_cells(extent.x, cell_size)?;
        let rows = axis_cells(extent.y, cell_size)?;
        let total = cols.checked_mul(rows)?;
        (total <= MAX_GRID_CELLS).then_some((cols, rows))
    }

    /// Creates an empty grid anchored at `origin` with dimensions from [`Self::dimensions_for`].
    pub(crate) fn new(origin: Vec2, cell_size: f32, (cols, rows): (usize, usize)) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be > 0");
        debug_assert!(cols * rows <= MAX_GRID_CELLS, "grid exceeds MAX_GRID_CELLS");

        Self {
            origin,
            cell_size,
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    #[inline]
    pub(crate) fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub(crate) fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Maps a point to its cell.
    ///
    /// Points outside the grid are clamped onto the nearest border cell.
    #[inline]
    pub(crate) fn cell_index(&self, point: Vec2) -> CellIndex {
        let local = point - self.origin;
        let col = ((local.x / self.cell_size).floor() as isize).clamp(0, self.cols as isize - 1);
        let row = ((local.y / self.cell_size).floor() as isize).clamp(0, self.rows as isize - 1);
        CellIndex {
            col: col as usize,
            row: row as usize,
        }
    }

    #[inline]
    fn slot(&self, cell: CellIndex) -> usize {
        cell.row * self.cols + cell.col
    }

    #[inline]
    pub(crate) fn get(&self, cell: CellIndex) -> Option<usize> {
        self.cells[self.slot(cell)]
    }

    /// Records `store_index` in the cell containing `point`.
    ///
    /// The cell is expected to be empty: two accepted points can never share one.
    pub(crate) fn insert(&mut self, point: Vec2, store_index: usize) {
        let slot = self.slot(self.cell_index(point));
        self.cells[slot] = Some(store_index);
    }

    /// Store indices of all points in the 5×5 block of cells around `point`.
    pub(crate) fn neighbors(&self, point: Vec2) -> impl Iterator<Item = usize> + '_ {
        let center = self.cell_index(point);
        let start_col = center.col.saturating_sub(NEIGHBOR_REACH);
        let end_col = (center.col + NEIGHBOR_REACH + 1).min(self.cols);
        let start_row = center.row.saturating_sub(NEIGHBOR_REACH);
        let end_row = (center.row + NEIGHBOR_REACH + 1).min(self.rows);

        (start_row..end_row).flat_map(move |row| {
            (start_col..end_col).filter_map(move |col| self.get(CellIndex { col, row }))
        })
    }
}
