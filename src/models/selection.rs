//! Per-cell selection flags
//!
//! One boolean per grid cell, keyed by flat index. This is the only mutable
//! state of a table selection besides the pivots.

use serde::{Deserialize, Serialize};
use crate::models::grid::{FlatIndex, Grid};

/// Selected flags for every cell of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    flags: Vec<bool>,
}

impl SelectionState {
    /// All cells unselected
    pub fn new(total_cells: usize) -> Self {
        Self {
            flags: vec![false; total_cells],
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.total_cells())
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_selected(&self, index: FlatIndex) -> bool {
        self.flags[index]
    }

    pub fn selected_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn set(&mut self, index: FlatIndex, selected: bool) {
        self.flags[index] = selected;
    }

    /// Set every cell in `[lo, hi]` (row-major, inclusive)
    pub fn set_range(&mut self, lo: FlatIndex, hi: FlatIndex, selected: bool) {
        debug_assert!(lo <= hi);
        for flag in &mut self.flags[lo..=hi] {
            *flag = selected;
        }
    }

    /// Set every cell whose column-major index lies in `[lo_cm, hi_cm]`
    pub fn set_column_major_range(
        &mut self,
        grid: &Grid,
        lo_cm: FlatIndex,
        hi_cm: FlatIndex,
        selected: bool,
    ) {
        debug_assert!(lo_cm <= hi_cm);
        for cm in lo_cm..=hi_cm {
            self.flags[grid.from_column_major_index(cm)] = selected;
        }
    }

    pub fn toggle(&mut self, index: FlatIndex) {
        self.flags[index] = !self.flags[index];
    }

    pub fn clear_all(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = false);
    }

    /// Selected indices in ascending (row-major) order
    pub fn snapshot_selected(&self) -> Vec<FlatIndex> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect()
    }
}
