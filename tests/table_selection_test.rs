// Test cherry-picking selection behaviour across click modes and grid shapes

use tracker_ui_wasm::{Grid, Modifiers, PivotPair, TableSelection, Target};

fn selection(rows: usize, cols: usize) -> TableSelection {
    TableSelection::new(Grid::new(rows, cols).expect("valid grid"))
}

#[test]
fn test_index_round_trips_hold_for_every_cell() {
    for (rows, cols) in [(8, 12), (3, 4), (4, 3), (1, 1), (2, 7)] {
        let grid = Grid::new(rows, cols).unwrap();
        for i in 0..grid.total_cells() {
            assert_eq!(grid.to_flat_index(grid.to_coordinate(i)), i);
            assert_eq!(grid.from_column_major_index(grid.to_column_major_index(i)), i);
        }
    }
}

#[test]
fn test_plain_click_replaces_any_prior_selection() {
    let mut sel = selection(3, 4);
    sel.click(Target::ColumnHeader(0), Modifiers::NONE);
    sel.click(Target::Cell(5), Modifiers::CTRL);
    sel.click(Target::Cell(11), Modifiers::NONE);

    assert_eq!(sel.find_selected(), vec![11], "plain click should leave only the clicked cell");
}

#[test]
fn test_row_header_selects_whole_row() {
    let mut sel = selection(3, 4);
    sel.click(Target::RowHeader(2), Modifiers::NONE);
    assert_eq!(sel.find_selected(), vec![8, 9, 10, 11]);
}

#[test]
fn test_column_header_selects_whole_column() {
    let mut sel = selection(3, 4);
    sel.click(Target::ColumnHeader(1), Modifiers::NONE);
    assert_eq!(sel.find_selected(), vec![1, 5, 9]);
}

#[test]
fn test_shift_down_a_column_selects_column_block() {
    // Cell 2, then shift-click two rows down in the same column
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(2), Modifiers::NONE);
    sel.click(Target::Cell(10), Modifiers::SHIFT);

    assert_eq!(
        sel.find_selected(),
        vec![2, 6, 10],
        "vertical shift-click should not select the reading-order run 2..=10"
    );
}

#[test]
fn test_shift_across_rows_selects_reading_order_run() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(2), Modifiers::NONE);
    sel.click(Target::Cell(5), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![2, 3, 4, 5]);

    // Backwards works too
    sel.click(Target::Cell(0), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![0, 1, 2]);
}

#[test]
fn test_shift_keeps_pivots() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(6), Modifiers::NONE);
    sel.click(Target::Cell(8), Modifiers::SHIFT);
    sel.click(Target::Cell(4), Modifiers::SHIFT);

    assert_eq!(sel.pivots(), Some(PivotPair::new(6, 6)));
    assert_eq!(sel.find_selected(), vec![4, 5, 6]);
}

#[test]
fn test_shift_between_row_headers() {
    let mut sel = selection(4, 3);
    sel.click(Target::RowHeader(1), Modifiers::NONE);
    sel.click(Target::RowHeader(3), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), (3..12).collect::<Vec<_>>());
}

#[test]
fn test_shift_between_column_headers() {
    let mut sel = selection(3, 4);
    sel.click(Target::ColumnHeader(3), Modifiers::NONE);
    sel.click(Target::ColumnHeader(1), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![1, 2, 3, 5, 6, 7, 9, 10, 11]);
}

#[test]
fn test_column_header_then_cell_in_same_column() {
    let mut sel = selection(3, 4);
    sel.click(Target::ColumnHeader(2), Modifiers::NONE);
    sel.click(Target::Cell(6), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![2, 6, 10]);
}

#[test]
fn test_column_header_then_cell_in_next_column() {
    // Column 1 anchor, then shift-click row 1 of column 2
    let mut sel = selection(3, 4);
    sel.click(Target::ColumnHeader(1), Modifiers::NONE);
    sel.click(Target::Cell(6), Modifiers::SHIFT);
    assert_eq!(
        sel.find_selected(),
        vec![1, 2, 5, 6, 9],
        "range from a column anchor should run down columns, never into columns 0 or 3"
    );

    sel.click(Target::Cell(10), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![1, 2, 5, 6, 9, 10]);
}

#[test]
fn test_ctrl_click_twice_toggles_back() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(0), Modifiers::NONE);
    sel.click(Target::Cell(9), Modifiers::CTRL);
    assert_eq!(sel.find_selected(), vec![0, 9]);

    sel.click(Target::Cell(9), Modifiers::CTRL);
    assert_eq!(sel.find_selected(), vec![0], "second ctrl-click should unselect only that cell");
}

#[test]
fn test_ctrl_click_column_header_toggles_column() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(4), Modifiers::NONE);
    sel.click(Target::ColumnHeader(0), Modifiers::CTRL);
    assert_eq!(sel.find_selected(), vec![0, 8]);
    assert_eq!(sel.pivots(), Some(PivotPair::new(0, 8)));
}

#[test]
fn test_ctrl_shift_adds_range_to_selection() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(0), Modifiers::NONE);
    sel.click(Target::Cell(11), Modifiers::CTRL);
    sel.click(Target::Cell(7), Modifiers::CTRL_SHIFT);

    // 11 anchors a vertical span up column 3; cell 0 stays selected
    assert_eq!(sel.find_selected(), vec![0, 7, 11]);
}

#[test]
fn test_plain_shift_clears_before_range() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(0), Modifiers::NONE);
    sel.click(Target::Cell(11), Modifiers::CTRL);
    sel.click(Target::Cell(7), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![7, 11]);
}

#[test]
fn test_single_row_grid() {
    let mut sel = selection(1, 6);
    sel.click(Target::Cell(1), Modifiers::NONE);
    sel.click(Target::Cell(4), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![1, 2, 3, 4]);

    sel.click(Target::ColumnHeader(5), Modifiers::NONE);
    assert_eq!(sel.find_selected(), vec![5]);
}

#[test]
fn test_single_column_grid() {
    let mut sel = selection(6, 1);
    sel.click(Target::Cell(4), Modifiers::NONE);
    sel.click(Target::Cell(2), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![2, 3, 4]);

    sel.click(Target::RowHeader(0), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_form_fields_ascending_regardless_of_click_order() {
    let mut sel = selection(3, 4);
    sel.click(Target::Cell(9), Modifiers::NONE);
    sel.click(Target::Cell(1), Modifiers::CTRL);
    sel.click(Target::Cell(5), Modifiers::CTRL);

    let fields = sel.form_fields("key");
    let pairs: Vec<(String, String)> = fields.into_iter().map(|f| (f.name, f.value)).collect();
    assert_eq!(
        pairs,
        vec![
            ("key[0]".to_string(), "1".to_string()),
            ("key[1]".to_string(), "5".to_string()),
            ("key[2]".to_string(), "9".to_string()),
        ]
    );
}

#[test]
fn test_plate_96_well_column_pick() {
    // 8 x 12 plate, pick column 3 wells B..E by dragging down
    let mut sel = selection(8, 12);
    sel.click(Target::Cell(12 + 3), Modifiers::NONE);
    sel.click(Target::Cell(4 * 12 + 3), Modifiers::SHIFT);
    assert_eq!(sel.find_selected(), vec![15, 27, 39, 51]);
}
