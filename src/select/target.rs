//! Pointer input classification
//!
//! Raw DOM events are reduced to a [`PointerInput`]: which button, which
//! modifier keys, and what was hit (a data cell, a row header or a column
//! header).

use serde::{Deserialize, Serialize};
use crate::models::grid::{FlatIndex, Grid};

/// Mouse button, following `MouseEvent.button` numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl From<i16> for PointerButton {
    fn from(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// Modifier keys held during the click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        shift: true,
    };
}

/// What the pointer went down on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Data cell, by flat index
    Cell(FlatIndex),
    /// Row header, by 0-based row
    RowHeader(usize),
    /// Column header, by 0-based column
    ColumnHeader(usize),
}

impl Target {
    /// First and last row-major flat index covered by the target
    pub fn bounds(&self, grid: &Grid) -> (FlatIndex, FlatIndex) {
        match *self {
            Target::Cell(i) => (i, i),
            Target::RowHeader(row) => grid.row_bounds(row),
            Target::ColumnHeader(column) => grid.column_bounds(column),
        }
    }

    /// Every flat index covered by the target, ascending
    pub fn cells(&self, grid: &Grid) -> Vec<FlatIndex> {
        match *self {
            Target::Cell(i) => vec![i],
            Target::RowHeader(row) => grid.row_cells(row).collect(),
            Target::ColumnHeader(column) => grid.column_cells(column).collect(),
        }
    }

    pub fn is_within(&self, grid: &Grid) -> bool {
        match *self {
            Target::Cell(i) => grid.contains(i),
            Target::RowHeader(row) => row < grid.row_count(),
            Target::ColumnHeader(column) => column < grid.columns_per_row(),
        }
    }
}

/// One classified pointer-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerInput {
    pub button: PointerButton,
    pub modifiers: Modifiers,
    pub target: Target,
}

impl PointerInput {
    /// Primary-button press
    pub fn primary(target: Target, modifiers: Modifiers) -> Self {
        Self {
            button: PointerButton::Primary,
            modifiers,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_numbering() {
        assert_eq!(PointerButton::from(0), PointerButton::Primary);
        assert_eq!(PointerButton::from(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from(4), PointerButton::Other(4));
    }

    #[test]
    fn test_target_bounds_and_cells() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(Target::Cell(5).bounds(&grid), (5, 5));
        assert_eq!(Target::RowHeader(2).bounds(&grid), (8, 11));
        assert_eq!(Target::ColumnHeader(1).bounds(&grid), (1, 9));
        assert_eq!(Target::ColumnHeader(1).cells(&grid), vec![1, 5, 9]);
        assert!(!Target::RowHeader(3).is_within(&grid));
    }
}
