//! Grid index mapping
//!
//! A grid is the rectangular arrangement of data cells in a rendered table.
//! Cells are addressed by a flat index in row-major reading order; this module
//! converts between flat indices, (row, column) coordinates and the
//! column-major ordering used for "down the column" ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Linear position of a cell in row-major reading order
pub type FlatIndex = usize;

/// Errors raised while building a grid from a table's structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Zero rows or zero columns
    #[error("grid must have at least one row and one column (rows: {rows}, columns: {columns})")]
    EmptyGrid { rows: usize, columns: usize },

    /// A data row whose length differs from the first row
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Total cell count is not rows * columns
    #[error("{cells} cells cannot be split evenly into {rows} rows")]
    CellCountMismatch { cells: usize, rows: usize },
}

/// A (row, column) position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Swap row and column
    pub fn transpose(self) -> Self {
        Self {
            row: self.column,
            column: self.row,
        }
    }
}

/// Immutable grid dimensions, snapshotted once from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    row_count: usize,
    columns_per_row: usize,
}

impl Grid {
    /// Create a grid with the given dimensions. Both must be positive.
    pub fn new(row_count: usize, columns_per_row: usize) -> Result<Self, GridError> {
        if row_count == 0 || columns_per_row == 0 {
            return Err(GridError::EmptyGrid {
                rows: row_count,
                columns: columns_per_row,
            });
        }
        Ok(Self {
            row_count,
            columns_per_row,
        })
    }

    /// Derive the grid from a total cell count and the number of data rows
    pub fn from_cell_count(total_cells: usize, row_count: usize) -> Result<Self, GridError> {
        if row_count == 0 || total_cells == 0 {
            return Err(GridError::EmptyGrid {
                rows: row_count,
                columns: if row_count == 0 { 0 } else { total_cells / row_count },
            });
        }
        if total_cells % row_count != 0 {
            return Err(GridError::CellCountMismatch {
                cells: total_cells,
                rows: row_count,
            });
        }
        Self::new(row_count, total_cells / row_count)
    }

    /// Derive the grid from the number of data cells found in each row.
    ///
    /// Rows without data cells (header rows) must already be filtered out.
    /// Every remaining row has to match the first one; a short final row is
    /// rejected instead of being mapped onto the wrong cells.
    pub fn from_row_lengths(lengths: &[usize]) -> Result<Self, GridError> {
        let expected = lengths.first().copied().unwrap_or(0);
        if let Some((row, &found)) = lengths
            .iter()
            .enumerate()
            .find(|&(_, &len)| len != expected)
        {
            return Err(GridError::RaggedGrid {
                row,
                expected,
                found,
            });
        }
        Self::new(lengths.len(), expected)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns_per_row(&self) -> usize {
        self.columns_per_row
    }

    pub fn total_cells(&self) -> usize {
        self.row_count * self.columns_per_row
    }

    pub fn contains(&self, flat: FlatIndex) -> bool {
        flat < self.total_cells()
    }

    pub fn to_coordinate(&self, flat: FlatIndex) -> Coordinate {
        debug_assert!(self.contains(flat), "flat index {} outside grid", flat);
        Coordinate {
            row: flat / self.columns_per_row,
            column: flat % self.columns_per_row,
        }
    }

    pub fn to_flat_index(&self, coord: Coordinate) -> FlatIndex {
        debug_assert!(coord.row < self.row_count && coord.column < self.columns_per_row);
        coord.row * self.columns_per_row + coord.column
    }

    /// Re-index a cell as if the grid were read column by column.
    ///
    /// The transposed coordinate is flattened with `row_count` as the row
    /// length, so walking down a column of the original grid yields
    /// consecutive indices.
    pub fn to_column_major_index(&self, flat: FlatIndex) -> FlatIndex {
        let t = self.to_coordinate(flat).transpose();
        t.row * self.row_count + t.column
    }

    /// Inverse of [`Grid::to_column_major_index`]
    pub fn from_column_major_index(&self, column_major: FlatIndex) -> FlatIndex {
        debug_assert!(self.contains(column_major));
        let t = Coordinate {
            row: column_major / self.row_count,
            column: column_major % self.row_count,
        };
        self.to_flat_index(t.transpose())
    }

    /// First and last flat index of a row
    pub fn row_bounds(&self, row: usize) -> (FlatIndex, FlatIndex) {
        debug_assert!(row < self.row_count);
        let first = row * self.columns_per_row;
        (first, first + self.columns_per_row - 1)
    }

    /// First and last flat index (row-major) of a column
    pub fn column_bounds(&self, column: usize) -> (FlatIndex, FlatIndex) {
        debug_assert!(column < self.columns_per_row);
        (
            column,
            column + (self.row_count - 1) * self.columns_per_row,
        )
    }

    /// Flat indices of a row, left to right
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = FlatIndex> {
        let (first, last) = self.row_bounds(row);
        first..=last
    }

    /// Flat indices of a column, top to bottom
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = FlatIndex> {
        let (first, last) = self.column_bounds(column);
        (first..=last).step_by(self.columns_per_row)
    }
}
