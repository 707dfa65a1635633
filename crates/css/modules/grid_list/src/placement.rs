//! Tile placement algorithm.
//!
//! Tiles are packed left to right, top to bottom, in input order. Each column
//! keeps a countdown of how many more rows it stays occupied; a tile goes into
//! the first run of free columns at or after the cursor that is wide enough,
//! moving down a row whenever the current one has no such run.

use crate::error::GridListError;
use crate::types::{Tile, TilePosition};

/// Per-column occupancy tracker plus the placement cursor.
///
/// `tracker[i]` is the number of rows, counting the current one, for which
/// column `i` is still covered by an already placed tile. Zero means free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    tracker: Vec<usize>,
    column_index: usize,
    row_index: usize,
}

impl Occupancy {
    /// Create an empty tracker for a grid of `columns` columns.
    pub fn new(columns: usize) -> Self {
        Self {
            tracker: vec![0; columns],
            column_index: 0,
            row_index: 0,
        }
    }

    /// Number of columns tracked.
    pub fn columns(&self) -> usize {
        self.tracker.len()
    }

    /// Row the cursor is on.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Column the next gap search starts from.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Remaining occupied rows per column.
    pub fn tracker(&self) -> &[usize] {
        &self.tracker
    }

    /// Largest remaining occupancy over all columns.
    pub fn max_remaining(&self) -> usize {
        self.tracker.iter().copied().max().unwrap_or(0)
    }

    /// Place a tile and return its position.
    ///
    /// The caller guarantees `1 <= colspan <= self.columns()`; otherwise the
    /// gap search can never succeed.
    pub fn place(&mut self, colspan: usize, rowspan: usize) -> TilePosition {
        let gap_start = self.find_matching_gap(colspan);
        self.mark(gap_start, colspan, rowspan);
        self.column_index = gap_start + colspan;
        TilePosition::new(self.row_index, gap_start)
    }

    /// Find the start of the first run of `tile_cols` free columns, moving
    /// down rows as needed.
    fn find_matching_gap(&mut self, tile_cols: usize) -> usize {
        loop {
            let gap_start;
            let gap_end;

            if self.column_index + tile_cols > self.tracker.len() {
                // Not enough columns left on this row.
                self.advance_row();
                gap_start = self.first_free_from(self.column_index);
                gap_end = self.gap_end(gap_start);
            } else if let Some(start) = self.first_free_from(self.column_index) {
                gap_start = Some(start);
                gap_end = self.gap_end(gap_start);
                // A run that turns out too short is retried one column later.
                self.column_index = start + 1;
            } else {
                // Every remaining column on this row is covered.
                self.advance_row();
                gap_start = self.first_free_from(self.column_index);
                gap_end = self.gap_end(gap_start);
            }

            if let Some(start) = gap_start
                && gap_end - start >= tile_cols
            {
                return start;
            }
        }
    }

    /// Move the cursor to the start of the next row; every column is one row
    /// closer to being free.
    fn advance_row(&mut self) {
        self.column_index = 0;
        self.row_index += 1;
        for remaining in &mut self.tracker {
            *remaining = remaining.saturating_sub(1);
        }
    }

    fn first_free_from(&self, start: usize) -> Option<usize> {
        self.tracker
            .iter()
            .skip(start)
            .position(|&remaining| remaining == 0)
            .map(|offset| start + offset)
    }

    /// Exclusive end of the free run beginning at `gap_start`. With no gap
    /// start the scan covers the whole row, yielding 0 when column 0 is taken.
    fn gap_end(&self, gap_start: Option<usize>) -> usize {
        let scan_from = gap_start.map_or(0, |start| start + 1);
        self.tracker
            .iter()
            .skip(scan_from)
            .position(|&remaining| remaining != 0)
            .map_or(self.tracker.len(), |offset| scan_from + offset)
    }

    fn mark(&mut self, start: usize, colspan: usize, rowspan: usize) {
        for remaining in &mut self.tracker[start..start + colspan] {
            *remaining = rowspan;
        }
    }
}

/// Computes the grid position of every tile in a grid list.
#[derive(Debug, Clone, Default)]
pub struct TileCoordinator {
    occupancy: Occupancy,
    positions: Vec<TilePosition>,
}

impl TileCoordinator {
    /// Create a coordinator with no placed tiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the positions of `tiles` in a grid of `num_columns` columns.
    ///
    /// Every call starts from an empty grid. Positions are stored in input
    /// order.
    ///
    /// # Errors
    /// Returns `GridListError::OversizedTile` when a tile's colspan exceeds
    /// `num_columns`. No positions are kept in that case.
    pub fn update<T: Tile>(
        &mut self,
        num_columns: usize,
        tiles: &[T],
    ) -> Result<(), GridListError> {
        self.occupancy = Occupancy::new(num_columns);
        self.positions.clear();
        self.positions.reserve(tiles.len());

        for (index, tile) in tiles.iter().enumerate() {
            let colspan = tile.colspan();
            if colspan > num_columns {
                self.positions.clear();
                log::warn!(
                    "Tile {index} with colspan {colspan} does not fit in {num_columns} columns"
                );
                return Err(GridListError::OversizedTile {
                    colspan,
                    columns: num_columns,
                });
            }

            let position = self.occupancy.place(colspan, tile.rowspan());
            tracing::trace!(
                "Placed tile {}: {}x{} at row {}, col {}",
                index,
                colspan,
                tile.rowspan(),
                position.row,
                position.col
            );
            self.positions.push(position);
        }

        tracing::debug!(
            "Placed {} tiles in {} columns: {} rows, rowspan {}",
            tiles.len(),
            num_columns,
            self.row_count(),
            self.rowspan()
        );
        Ok(())
    }

    /// Positions from the last `update`, one per tile, in input order.
    pub fn positions(&self) -> &[TilePosition] {
        &self.positions
    }

    /// Number of rows touched by the last `update`.
    pub fn row_count(&self) -> usize {
        self.occupancy.row_index() + 1
    }

    /// Total rows spanned, including tiles hanging past the last row.
    pub fn rowspan(&self) -> usize {
        let last_row_max = self.occupancy.max_remaining();
        if last_row_max > 1 {
            self.row_count() + last_row_max - 1
        } else {
            self.row_count()
        }
    }

    /// Tracker state after the last `update`.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }
}

/// Place `tiles` in a grid of `num_columns` columns.
///
/// # Errors
/// Returns `GridListError::OversizedTile` when a tile is wider than the grid.
pub fn place_tiles<T: Tile>(
    num_columns: usize,
    tiles: &[T],
) -> Result<Vec<TilePosition>, GridListError> {
    let mut coordinator = TileCoordinator::new();
    coordinator.update(num_columns, tiles)?;
    Ok(coordinator.positions)
}
