use serde::{Deserialize, Serialize};

use crate::*;

/// Physical position of logical cell `(0, 0)`.
pub const GRID_ORIGIN: PhysicalPos = (1, 1);

/// Where a physical press landed relative to the playfield.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Playfield(Coord2),
    Border,
    Outside,
}

pub const fn to_physical((x, y): Coord2) -> PhysicalPos {
    (
        x as PhysicalCoord + GRID_ORIGIN.0,
        y as PhysicalCoord + GRID_ORIGIN.1,
    )
}

pub fn classify((px, py): PhysicalPos) -> Region {
    let (Some(x), Some(y)) = (px.checked_sub(GRID_ORIGIN.0), py.checked_sub(GRID_ORIGIN.1))
    else {
        return Region::Outside;
    };
    let size = PhysicalCoord::from(GRID_SIZE);

    let inside = |v: PhysicalCoord| (0..size).contains(&v);
    let within_ring = |v: PhysicalCoord| (-1..=size).contains(&v);

    if inside(x) && inside(y) {
        // both axes are in 0..GRID_SIZE so they fit a Coord
        Region::Playfield((x as Coord, y as Coord))
    } else if within_ring(x) && within_ring(y) {
        Region::Border
    } else {
        Region::Outside
    }
}

/// Physical positions of the reset ring, clockwise from the top-left corner.
pub fn border_ring() -> impl Iterator<Item = PhysicalPos> {
    let size = PhysicalCoord::from(GRID_SIZE);
    let (ox, oy) = GRID_ORIGIN;
    let (min_x, min_y) = (ox - 1, oy - 1);
    let (max_x, max_y) = (ox + size, oy + size);

    let top = (min_x..max_x).map(move |x| (x, min_y));
    let right = (min_y..max_y).map(move |y| (max_x, y));
    let bottom = ((min_x + 1)..=max_x).rev().map(move |x| (x, max_y));
    let left = ((min_y + 1)..=max_y).rev().map(move |y| (min_x, y));

    top.chain(right).chain(bottom).chain(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playfield_round_trips() {
        for coords in iter_cells() {
            assert_eq!(classify(to_physical(coords)), Region::Playfield(coords));
        }
    }

    #[test]
    fn origin_is_offset_by_one() {
        assert_eq!(to_physical((0, 0)), (1, 1));
        assert_eq!(to_physical((4, 4)), (5, 5));
        assert_eq!(classify((1, 1)), Region::Playfield((0, 0)));
    }

    #[test]
    fn ring_cells_are_border() {
        let ring: Vec<_> = border_ring().collect();
        assert_eq!(ring.len(), 24);
        for pos in &ring {
            assert_eq!(classify(*pos), Region::Border, "{:?}", pos);
        }
        assert!(ring.contains(&(0, 0)));
        assert!(ring.contains(&(6, 6)));
        assert!(ring.contains(&(0, 6)));
        assert!(ring.contains(&(6, 0)));
    }

    #[test]
    fn ring_has_no_duplicates() {
        let mut ring: Vec<_> = border_ring().collect();
        ring.sort();
        ring.dedup();
        assert_eq!(ring.len(), 24);
    }

    #[test]
    fn beyond_ring_is_outside() {
        assert_eq!(classify((7, 3)), Region::Outside);
        assert_eq!(classify((3, 7)), Region::Outside);
        assert_eq!(classify((8, 8)), Region::Outside);
        assert_eq!(classify((-1, 0)), Region::Outside);
    }

    #[test]
    fn extreme_positions_are_outside() {
        assert_eq!(classify((PhysicalCoord::MIN, 0)), Region::Outside);
        assert_eq!(classify((0, PhysicalCoord::MIN)), Region::Outside);
        assert_eq!(
            classify((PhysicalCoord::MAX, PhysicalCoord::MIN)),
            Region::Outside
        );
        assert_eq!(
            classify((PhysicalCoord::MAX, PhysicalCoord::MAX)),
            Region::Outside
        );
    }
}
