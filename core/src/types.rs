/// Single logical coordinate axis, `0..GRID_SIZE`.
pub type Coord = u8;

/// Logical playfield coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Single physical coordinate axis as reported by the controller.
pub type PhysicalCoord = i16;

/// Physical surface coordinates `(x, y)`.
pub type PhysicalPos = (PhysicalCoord, PhysicalCoord);

/// Width and height of the logical playfield.
pub const GRID_SIZE: Coord = 5;

/// Number of cells in the logical playfield.
pub const CELL_COUNT: usize = GRID_SIZE as usize * GRID_SIZE as usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((x, y): Coord2) -> bool {
    x < GRID_SIZE && y < GRID_SIZE
}

/// Row-major index of a cell, used by the solver's linear system.
pub const fn cell_index((x, y): Coord2) -> usize {
    y as usize * GRID_SIZE as usize + x as usize
}

pub const fn cell_at_index(index: usize) -> Coord2 {
    (
        (index % GRID_SIZE as usize) as Coord,
        (index / GRID_SIZE as usize) as Coord,
    )
}

/// Iterates every playfield cell, column by column.
pub fn iter_cells() -> impl Iterator<Item = Coord2> {
    (0..GRID_SIZE).flat_map(|x| (0..GRID_SIZE).map(move |y| (x, y)))
}

const DISPLACEMENTS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains on the playfield.
fn apply_delta(coords: Coord2, delta: (i8, i8)) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    let next_y = y.checked_add_signed(dy)?;

    in_bounds((next_x, next_y)).then_some((next_x, next_y))
}

/// In-bounds orthogonal neighbors of a cell. Edge cells simply have fewer.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta) {
                return Some(next_item);
            }
        }
    }
}
