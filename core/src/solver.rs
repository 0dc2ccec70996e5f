//! Press-set solver for the 5x5 board.
//!
//! Each cell's final state is the XOR of its initial state and every press
//! that reaches it, so clearing the board is a linear system over GF(2) with
//! one equation and one unknown per cell. Rows are packed into `u32` masks.

use crate::*;

type Mask = u32;

/// Cells affected by pressing `coords`, as a cell mask.
fn press_mask(coords: Coord2) -> Mask {
    NeighborIter::new(coords).fold(1 << cell_index(coords), |mask, neighbor| {
        mask | 1 << cell_index(neighbor)
    })
}

fn grid_mask(grid: &Grid) -> Mask {
    grid.iter_lit().fold(0, |mask, coords| mask | 1 << cell_index(coords))
}

struct Reduced {
    /// Solution with every free unknown set to zero.
    particular: Mask,
    /// Basis of presses that leave every cell unchanged.
    null_space: Vec<Mask>,
}

/// Gauss-Jordan elimination. `None` when the system is inconsistent.
fn reduce(target: Mask) -> Option<Reduced> {
    // The press relation is symmetric, so row `i` (which presses reach cell `i`)
    // equals the mask of cells reached by pressing `i`.
    let mut rows: Vec<(Mask, bool)> = (0..CELL_COUNT)
        .map(|i| (press_mask(cell_at_index(i)), target & (1 << i) != 0))
        .collect();

    let mut pivots: Vec<usize> = Vec::with_capacity(CELL_COUNT);
    let mut free: Vec<usize> = Vec::new();
    let mut rank = 0;

    for column in 0..CELL_COUNT {
        let bit = 1 << column;
        let Some(pivot) = (rank..CELL_COUNT).find(|&row| rows[row].0 & bit != 0) else {
            free.push(column);
            continue;
        };
        rows.swap(rank, pivot);

        let (pivot_mask, pivot_rhs) = rows[rank];
        for (row, entry) in rows.iter_mut().enumerate() {
            if row != rank && entry.0 & bit != 0 {
                entry.0 ^= pivot_mask;
                entry.1 ^= pivot_rhs;
            }
        }

        pivots.push(column);
        rank += 1;
    }

    if rows[rank..].iter().any(|&(_, rhs)| rhs) {
        return None;
    }

    let particular: Mask = pivots
        .iter()
        .enumerate()
        .filter(|&(row, _)| rows[row].1)
        .fold(0, |mask, (_, &column)| mask | 1 << column);

    let null_space = free
        .iter()
        .map(|&free_column| {
            let free_bit: Mask = 1 << free_column;
            pivots
                .iter()
                .enumerate()
                .filter(|&(row, _)| rows[row].0 & free_bit != 0)
                .fold(free_bit, |mask, (_, &column)| mask | 1 << column)
        })
        .collect();

    Some(Reduced {
        particular,
        null_space,
    })
}

/// Returns the smallest set of presses that clears `grid`, in row-major order,
/// or `None` when the configuration cannot be cleared.
pub fn solve(grid: &Grid) -> Option<Vec<Coord2>> {
    let Reduced {
        particular,
        null_space,
    } = reduce(grid_mask(grid))?;

    let best = (0..1usize << null_space.len())
        .map(|selection| {
            null_space
                .iter()
                .enumerate()
                .filter(|&(i, _)| selection & (1 << i) != 0)
                .fold(particular, |mask, (_, &kernel)| mask ^ kernel)
        })
        .min_by_key(|mask| mask.count_ones())
        .unwrap_or(particular);

    Some(
        (0..CELL_COUNT)
            .filter(|&i| best & (1 << i) != 0)
            .map(cell_at_index)
            .collect(),
    )
}

/// Whether `grid` can be cleared at all.
pub fn is_solvable(grid: &Grid) -> bool {
    reduce(grid_mask(grid)).is_some()
}
