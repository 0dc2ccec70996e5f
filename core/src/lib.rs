pub use engine::*;
pub use error::*;
pub use grid::*;
pub use layout::*;
pub use puzzle::*;
pub use solver::*;
pub use surface::*;
pub use types::*;

mod engine;
mod error;
mod grid;
mod layout;
mod puzzle;
mod solver;
mod surface;
mod types;

/// Outcome of a button press
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Press landed outside the playfield and its border
    Ignored,
    Toggled,
    /// Border pressed, current puzzle restarted
    Reset,
    /// Toggle cleared the board, next puzzle started
    Solved,
}

impl PressOutcome {
    /// Whether this outcome could have changed the lights
    pub const fn has_update(self) -> bool {
        use PressOutcome::*;
        match self {
            Ignored => false,
            Toggled => true,
            Reset => true,
            Solved => true,
        }
    }
}
