//! Properties of the toggle rule over generated boards.

use lightspad_core::*;
use proptest::prelude::*;

fn arb_coords() -> impl Strategy<Value = Coord2> {
    (0..GRID_SIZE, 0..GRID_SIZE)
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(arb_coords(), 0..CELL_COUNT)
        .prop_map(|cells| Grid::from_lit_cells(cells))
}

proptest! {
    #[test]
    fn pressing_twice_is_identity(grid in arb_grid(), coords in arb_coords()) {
        let mut pressed = grid.clone();
        pressed.press(coords);
        pressed.press(coords);
        prop_assert_eq!(pressed, grid);
    }

    #[test]
    fn press_flips_only_cross(grid in arb_grid(), coords in arb_coords()) {
        let mut pressed = grid.clone();
        pressed.press(coords);

        let (x, y) = coords;
        for cell in iter_cells() {
            let (cx, cy) = cell;
            let in_cross = cell == coords || (cx.abs_diff(x) + cy.abs_diff(y) == 1);
            prop_assert_eq!(pressed.is_lit(cell) != grid.is_lit(cell), in_cross);
        }
    }

    #[test]
    fn presses_commute(grid in arb_grid(), a in arb_coords(), b in arb_coords()) {
        let mut ab = grid.clone();
        ab.press(a);
        ab.press(b);

        let mut ba = grid.clone();
        ba.press(b);
        ba.press(a);

        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn solution_clears_solvable_grids(presses in proptest::collection::vec(arb_coords(), 0..12)) {
        let mut grid = Grid::new();
        for &coords in &presses {
            grid.press(coords);
        }

        let solution = solve(&grid);
        prop_assert!(solution.is_some());
        for coords in solution.unwrap() {
            grid.press(coords);
        }
        prop_assert!(grid.is_cleared());
    }
}
