use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use crate::*;

/// Cells lit at the start of a puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Puzzle {
    cells: Vec<Coord2>,
}

impl Puzzle {
    /// Builds a puzzle, rejecting cells off the playfield. Repeated cells are kept once,
    /// in first-seen order.
    pub fn new(
        cells: impl IntoIterator<Item = Coord2>,
    ) -> core::result::Result<Self, PuzzleError> {
        let mut unique: Vec<Coord2> = Vec::new();
        for coords in cells {
            if !in_bounds(coords) {
                let (x, y) = coords;
                return Err(PuzzleError::OutOfBounds { x, y });
            }
            if !unique.contains(&coords) {
                unique.push(coords);
            }
        }
        Ok(Self { cells: unique })
    }

    pub fn cells(&self) -> &[Coord2] {
        &self.cells
    }

    pub fn lit_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

const BUILTIN_PUZZLES: [&[Coord2]; 2] = [
    &[
        (3, 0),
        (2, 1),
        (3, 1),
        (4, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (1, 4),
    ],
    &[
        (0, 0),
        (1, 0),
        (3, 0),
        (4, 0),
        (0, 1),
        (4, 1),
        (0, 3),
        (4, 3),
        (0, 4),
        (1, 4),
        (3, 4),
        (4, 4),
    ],
];

/// Ordered, never empty, sequence of puzzles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PuzzleStore {
    puzzles: Vec<Puzzle>,
}

impl PuzzleStore {
    pub fn new(puzzles: Vec<Puzzle>) -> core::result::Result<Self, PuzzleError> {
        if puzzles.is_empty() {
            return Err(PuzzleError::Empty);
        }

        for (index, puzzle) in puzzles.iter().enumerate() {
            if solve(&Grid::from_puzzle(puzzle)).is_none() {
                log::warn!("Puzzle {} has no solution", index);
            }
        }

        Ok(Self { puzzles })
    }

    /// The two puzzles used when no dataset is available.
    pub fn builtin() -> Self {
        let puzzles = BUILTIN_PUZZLES
            .iter()
            .map(|cells| Puzzle {
                cells: cells.to_vec(),
            })
            .collect();
        Self { puzzles }
    }

    /// Parses a dataset of the form `[[[x, y], ...], ...]`.
    pub fn from_json_str(json: &str) -> core::result::Result<Self, PuzzleError> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> core::result::Result<Self, PuzzleError> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> core::result::Result<Self, PuzzleError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a dataset, falling back to [`PuzzleStore::builtin`] on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => {
                log::info!("Loaded {} puzzles from {}", store.len(), path.display());
                store
            }
            Err(err) => {
                log::warn!(
                    "Could not load puzzles from {}, using built-in set: {}",
                    path.display(),
                    err
                );
                Self::builtin()
            }
        }
    }

    fn from_raw(raw: Vec<Vec<Coord2>>) -> core::result::Result<Self, PuzzleError> {
        let puzzles = raw
            .into_iter()
            .map(Puzzle::new)
            .collect::<core::result::Result<Vec<_>, _>>()?;
        Self::new(puzzles)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    /// Index following `index`, wrapping back to the first puzzle after the last.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }
}

impl Default for PuzzleStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl core::ops::Index<usize> for PuzzleStore {
    type Output = Puzzle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.puzzles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_rejects_out_of_bounds_cell() {
        let err = Puzzle::new([(0, 0), (5, 1)]).unwrap_err();
        assert!(matches!(err, PuzzleError::OutOfBounds { x: 5, y: 1 }));
    }

    #[test]
    fn puzzle_collapses_duplicates() {
        let puzzle = Puzzle::new([(1, 1), (2, 2), (1, 1)]).unwrap();
        assert_eq!(puzzle.cells(), &[(1, 1), (2, 2)]);
    }

    #[test]
    fn parses_dataset_json() {
        let store = PuzzleStore::from_json_str("[[[0, 0], [1, 0], [0, 1]], [[2, 2]]]").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().cells(), &[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(store.get(1).unwrap().cells(), &[(2, 2)]);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            PuzzleStore::from_json_str("[]"),
            Err(PuzzleError::Empty)
        ));
    }

    #[test]
    fn malformed_dataset_is_rejected() {
        assert!(matches!(
            PuzzleStore::from_json_str("{\"puzzles\": 3}"),
            Err(PuzzleError::Json(_))
        ));
        assert!(matches!(
            PuzzleStore::from_json_str("[[[7, 0]]]"),
            Err(PuzzleError::OutOfBounds { x: 7, y: 0 })
        ));
    }

    #[test]
    fn load_errors_carry_their_cause() {
        let err = PuzzleStore::from_json_str("[[[0, 0], [1").unwrap_err();
        assert!(err.to_string().contains("line 1"), "{}", err);

        let err = PuzzleStore::load("/nonexistent/lightspad/puzzles.json").unwrap_err();
        let PuzzleError::Io(cause) = &err else {
            panic!("expected an io error, got {:?}", err);
        };
        assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().ends_with(&cause.to_string()), "{}", err);
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let store = PuzzleStore::load_or_default("/nonexistent/lightspad/puzzles.json");
        assert_eq!(store, PuzzleStore::builtin());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn next_index_wraps() {
        let store = PuzzleStore::builtin();
        assert_eq!(store.next_index(0), 1);
        assert_eq!(store.next_index(1), 0);
    }

    #[test]
    fn serializes_back_to_dataset_format() {
        let store = PuzzleStore::from_json_str("[[[3,0],[2,1]]]").unwrap();
        assert_eq!(serde_json::to_string(&store).unwrap(), "[[[3,0],[2,1]]]");
    }
}
