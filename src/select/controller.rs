//! Interaction controller for table selection
//!
//! Every pointer-down is classified fresh from its modifier keys; the only
//! state kept between events is the selection flags and the pivot pair.
//!
//! | Modifiers    | Effect                                                   |
//! |--------------|----------------------------------------------------------|
//! | none         | clear, select the target, pivots = target bounds         |
//! | ctrl         | toggle the target's cells, pivots = target bounds        |
//! | shift        | clear, select pivot..target span                         |
//! | ctrl + shift | add pivot..target span to the current selection          |

use serde::{Deserialize, Serialize};
use crate::models::grid::{FlatIndex, Grid};
use crate::models::selection::SelectionState;
use crate::select::target::{Modifiers, PointerButton, PointerInput, Target};

/// Bounds of the last explicit (non-range) selection or toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotPair {
    pub min: FlatIndex,
    pub max: FlatIndex,
}

impl PivotPair {
    pub fn new(a: FlatIndex, b: FlatIndex) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

/// Index ordering a range is taken in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOrder {
    /// Reading order, left to right then down
    RowMajor,
    /// Down each column, then across
    ColumnMajor,
}

/// Selection engine for one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSelection {
    grid: Grid,
    state: SelectionState,
    pivots: Option<PivotPair>,
}

impl TableSelection {
    pub fn new(grid: Grid) -> Self {
        Self {
            state: SelectionState::for_grid(&grid),
            grid,
            pivots: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn pivots(&self) -> Option<PivotPair> {
        self.pivots
    }

    pub fn is_selected(&self, index: FlatIndex) -> bool {
        self.state.is_selected(index)
    }

    /// Selected flat indices, ascending
    pub fn find_selected(&self) -> Vec<FlatIndex> {
        self.state.snapshot_selected()
    }

    /// Unselect everything and drop the pivots
    pub fn clear(&mut self) {
        self.state.clear_all();
        self.pivots = None;
    }

    /// Primary-button click shorthand
    pub fn click(&mut self, target: Target, modifiers: Modifiers) -> bool {
        self.handle(PointerInput::primary(target, modifiers))
    }

    /// Apply one pointer-down. Returns false when the input was ignored.
    pub fn handle(&mut self, input: PointerInput) -> bool {
        if input.button != PointerButton::Primary {
            return false;
        }
        let target = input.target;
        if !target.is_within(&self.grid) {
            log::warn!("pointer target {:?} outside {:?}", target, self.grid);
            return false;
        }

        let mods = input.modifiers;
        match (mods.ctrl, mods.shift) {
            (false, false) => {
                self.state.clear_all();
                for i in target.cells(&self.grid) {
                    self.state.set(i, true);
                }
                self.set_pivots(target);
            }
            (true, false) => {
                for i in target.cells(&self.grid) {
                    self.state.toggle(i);
                }
                self.set_pivots(target);
            }
            (false, true) => {
                self.state.clear_all();
                self.select_span(target);
            }
            (true, true) => {
                self.select_span(target);
            }
        }

        log::debug!(
            "{:?} on {:?}: {} selected, pivots {:?}",
            mods,
            target,
            self.state.selected_count(),
            self.pivots
        );
        true
    }

    fn set_pivots(&mut self, target: Target) {
        let (first, last) = target.bounds(&self.grid);
        self.pivots = Some(PivotPair::new(first, last));
    }

    /// Ordering for a span ending on `target`.
    ///
    /// Column headers, anchors spanning a column and vertical cell drags
    /// (pivots and cell all in one column) run down rows; everything else
    /// runs in reading order.
    pub fn range_order(&self, target: Target, pivots: PivotPair) -> RangeOrder {
        match target {
            Target::ColumnHeader(_) => RangeOrder::ColumnMajor,
            Target::RowHeader(_) => RangeOrder::RowMajor,
            Target::Cell(i) => {
                let pivot_column = self.grid.to_coordinate(pivots.min).column;
                let vertical_pivots =
                    self.grid.to_coordinate(pivots.max).column == pivot_column;
                // A column-header anchor spans its column; a cell anchor
                // only runs down rows when the target shares its column
                let spans_column = pivots.min != pivots.max;
                let same_column = self.grid.to_coordinate(i).column == pivot_column;
                if vertical_pivots && (spans_column || same_column) {
                    RangeOrder::ColumnMajor
                } else {
                    RangeOrder::RowMajor
                }
            }
        }
    }

    /// Select everything between the pivots and the target, inclusive
    fn select_span(&mut self, target: Target) {
        let (first, last) = target.bounds(&self.grid);
        let pivots = match self.pivots {
            Some(p) => p,
            None => {
                // Nothing to extend from: the target becomes the anchor
                for i in target.cells(&self.grid) {
                    self.state.set(i, true);
                }
                self.pivots = Some(PivotPair::new(first, last));
                return;
            }
        };

        let bounds = [pivots.min, pivots.max, first, last];
        match self.range_order(target, pivots) {
            RangeOrder::RowMajor => {
                let lo = bounds.iter().copied().min().unwrap_or(first);
                let hi = bounds.iter().copied().max().unwrap_or(last);
                self.state.set_range(lo, hi, true);
            }
            RangeOrder::ColumnMajor => {
                let grid = self.grid;
                let cms = bounds.map(|i| grid.to_column_major_index(i));
                let lo = cms.iter().copied().min().unwrap_or(cms[2]);
                let hi = cms.iter().copied().max().unwrap_or(cms[3]);
                self.state.set_column_major_range(&grid, lo, hi, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x4() -> TableSelection {
        TableSelection::new(Grid::new(3, 4).unwrap())
    }

    #[test]
    fn test_plain_click_selects_single_cell() {
        let mut sel = grid_3x4();
        sel.click(Target::RowHeader(0), Modifiers::NONE);
        sel.click(Target::Cell(7), Modifiers::NONE);
        assert_eq!(sel.find_selected(), vec![7]);
        assert_eq!(sel.pivots(), Some(PivotPair::new(7, 7)));
    }

    #[test]
    fn test_non_primary_button_ignored() {
        let mut sel = grid_3x4();
        sel.click(Target::Cell(1), Modifiers::NONE);
        let handled = sel.handle(PointerInput {
            button: PointerButton::Secondary,
            modifiers: Modifiers::NONE,
            target: Target::Cell(5),
        });
        assert!(!handled);
        assert_eq!(sel.find_selected(), vec![1]);
        assert_eq!(sel.pivots(), Some(PivotPair::new(1, 1)));
    }

    #[test]
    fn test_header_click_sets_pivots_to_bounds() {
        let mut sel = grid_3x4();
        sel.click(Target::RowHeader(1), Modifiers::NONE);
        assert_eq!(sel.pivots(), Some(PivotPair::new(4, 7)));

        sel.click(Target::ColumnHeader(3), Modifiers::NONE);
        assert_eq!(sel.find_selected(), vec![3, 7, 11]);
        assert_eq!(sel.pivots(), Some(PivotPair::new(3, 11)));
    }

    #[test]
    fn test_ctrl_click_row_toggles_cells() {
        let mut sel = grid_3x4();
        sel.click(Target::Cell(5), Modifiers::NONE);
        sel.click(Target::RowHeader(1), Modifiers::CTRL);
        // Cell 5 was selected, so the row toggle turns it off
        assert_eq!(sel.find_selected(), vec![4, 6, 7]);
        assert_eq!(sel.pivots(), Some(PivotPair::new(4, 7)));
    }

    #[test]
    fn test_range_order_choice() {
        let sel = grid_3x4();
        let vertical = PivotPair::new(2, 2);
        assert_eq!(sel.range_order(Target::Cell(10), vertical), RangeOrder::ColumnMajor);
        assert_eq!(sel.range_order(Target::Cell(9), vertical), RangeOrder::RowMajor);
        assert_eq!(
            sel.range_order(Target::Cell(6), PivotPair::new(1, 9)),
            RangeOrder::ColumnMajor
        );
        assert_eq!(sel.range_order(Target::RowHeader(0), vertical), RangeOrder::RowMajor);
        assert_eq!(
            sel.range_order(Target::ColumnHeader(0), vertical),
            RangeOrder::ColumnMajor
        );
    }

    #[test]
    fn test_shift_without_pivot_anchors_on_target() {
        let mut sel = grid_3x4();
        sel.click(Target::Cell(6), Modifiers::SHIFT);
        assert_eq!(sel.find_selected(), vec![6]);
        assert_eq!(sel.pivots(), Some(PivotPair::new(6, 6)));
    }

    #[test]
    fn test_out_of_grid_target_ignored() {
        let mut sel = grid_3x4();
        assert!(!sel.click(Target::Cell(12), Modifiers::NONE));
        assert!(!sel.click(Target::ColumnHeader(4), Modifiers::NONE));
        assert!(sel.find_selected().is_empty());
    }
}
