use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lit state of the 5x5 playfield, all off by default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    lit: Array2<bool>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            lit: Array2::default((GRID_SIZE, GRID_SIZE).to_nd_index()),
        }
    }

    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let mut grid = Self::new();
        for &coords in puzzle.cells() {
            grid.lit[coords.to_nd_index()] = true;
        }
        grid
    }

    pub fn from_lit_cells(cells: impl IntoIterator<Item = Coord2>) -> Self {
        let mut grid = Self::new();
        for coords in cells {
            grid.lit[coords.to_nd_index()] = true;
        }
        grid
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.lit[coords.to_nd_index()]
    }

    /// Flips a single cell.
    pub fn toggle(&mut self, coords: Coord2) {
        let cell = &mut self.lit[coords.to_nd_index()];
        *cell = !*cell;
    }

    /// Applies the toggle rule: the pressed cell and each in-bounds orthogonal neighbor flip.
    pub fn press(&mut self, coords: Coord2) {
        self.toggle(coords);
        for neighbor in NeighborIter::new(coords) {
            self.toggle(neighbor);
        }
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&lit| lit).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.lit.iter().all(|&lit| !lit)
    }

    pub fn iter_lit(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_cells().filter(|&coords| self.is_lit(coords))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.lit[coords.to_nd_index()]
    }
}
