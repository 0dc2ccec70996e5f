use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Playing
/// - Playing -> Cleared
/// - Cleared -> Playing
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Constructed, nothing drawn yet
    Idle,
    /// A puzzle is on the board
    Playing,
    /// The current puzzle was just solved, the next one is being set up
    Cleared,
}

impl EngineState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub palette: Palette,
    /// Puzzle played first, reduced modulo the store length.
    pub start_index: usize,
    /// Polls per second in [`Engine::run`].
    pub tick_rate: u32,
    /// Pause between cells of the start animation.
    pub animation_step: Duration,
}

impl EngineConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            start_index: 0,
            tick_rate: 20,
            animation_step: Duration::from_millis(60),
        }
    }
}

/// Runs the game against a light surface.
#[derive(Debug)]
pub struct Engine<S> {
    surface: S,
    store: PuzzleStore,
    config: EngineConfig,
    grid: Grid,
    state: EngineState,
    current_puzzle: usize,
    puzzles_solved: usize,
    // Last frame sent to the surface, `None` when the playfield lights are unknown.
    shown: Option<Grid>,
}

impl<S: LightSurface> Engine<S> {
    /// Draws the border and starts the configured puzzle.
    pub fn new(surface: S, store: PuzzleStore, config: EngineConfig) -> Result<Self> {
        let mut engine = Self::idle(surface, store, config);
        engine.begin()?;
        Ok(engine)
    }

    /// Builds the engine without touching the surface.
    pub fn idle(surface: S, store: PuzzleStore, config: EngineConfig) -> Self {
        Self {
            surface,
            store,
            config,
            grid: Grid::new(),
            state: EngineState::Idle,
            current_puzzle: 0,
            puzzles_solved: 0,
            shown: None,
        }
    }

    pub fn begin(&mut self) -> Result<()> {
        self.draw_border()?;
        self.start_puzzle(self.config.start_index)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_puzzle(&self) -> usize {
        self.current_puzzle
    }

    pub fn puzzles_solved(&self) -> usize {
        self.puzzles_solved
    }

    pub fn store(&self) -> &PuzzleStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Polls and sleeps until the surface fails.
    pub fn run(&mut self) -> Result<()> {
        let period = self.config.tick_period();
        log::debug!("Polling every {:?}", period);
        loop {
            self.tick()?;
            std::thread::sleep(period);
        }
    }

    /// Drains pending surface events. Returns the number of presses handled.
    pub fn tick(&mut self) -> Result<usize> {
        let mut presses = 0;
        while let Some(event) = self.surface.poll()? {
            if event.pressed {
                let outcome = self.handle_press(event.pos)?;
                if outcome.has_update() {
                    log::trace!("{:?} pressed: {:?}", event.pos, outcome);
                } else {
                    log::trace!("{:?} pressed, nothing to do", event.pos);
                }
                presses += 1;
            } else {
                log::trace!("{:?} released", event.pos);
            }
        }
        Ok(presses)
    }

    pub fn handle_press(&mut self, pos: PhysicalPos) -> Result<PressOutcome> {
        if !self.state.is_playing() {
            log::debug!("Ignoring press at {:?} while {:?}", pos, self.state);
            return Ok(PressOutcome::Ignored);
        }

        match classify(pos) {
            Region::Outside => Ok(PressOutcome::Ignored),
            Region::Border => {
                log::debug!("Reset requested from {:?}", pos);
                self.start_puzzle(self.current_puzzle)?;
                Ok(PressOutcome::Reset)
            }
            Region::Playfield(coords) => {
                log::debug!("Toggle at {:?}", coords);
                self.grid.press(coords);

                if self.grid.is_cleared() {
                    self.finish_puzzle()?;
                    Ok(PressOutcome::Solved)
                } else {
                    self.render()?;
                    Ok(PressOutcome::Toggled)
                }
            }
        }
    }

    pub fn start_puzzle(&mut self, index: usize) -> Result<()> {
        let (index, puzzle) = match self.store.get(index) {
            Some(puzzle) => (index, puzzle),
            None => {
                let wrapped = index % self.store.len();
                log::warn!(
                    "Puzzle {} does not exist, only {} loaded, starting {} instead",
                    index,
                    self.store.len(),
                    wrapped
                );
                (wrapped, &self.store[wrapped])
            }
        };
        log::info!(
            "Starting puzzle {}/{} ({} lit)",
            index + 1,
            self.store.len(),
            puzzle.lit_count()
        );

        self.current_puzzle = index;
        self.grid = Grid::from_puzzle(puzzle);
        self.state = EngineState::Playing;

        self.animate_start()?;
        self.render()
    }

    /// Brings the playfield lights in line with the grid.
    pub fn render(&mut self) -> Result<()> {
        let palette = self.config.palette;
        let mut changed = 0;

        for coords in iter_cells() {
            let lit = self.grid.is_lit(coords);
            let stale = match &self.shown {
                Some(shown) => shown.is_lit(coords) != lit,
                None => true,
            };
            if stale {
                let color = if lit { palette.on } else { palette.off };
                self.surface.light(to_physical(coords), color)?;
                changed += 1;
            }
        }

        log::trace!("Rendered {} cells", changed);
        self.shown = Some(self.grid.clone());
        Ok(())
    }

    fn finish_puzzle(&mut self) -> Result<()> {
        self.state = EngineState::Cleared;
        self.puzzles_solved += 1;
        log::info!("Puzzle {} solved", self.current_puzzle + 1);

        let next = self.store.next_index(self.current_puzzle);
        if next == 0 {
            log::info!("Every puzzle solved, starting over");
        }
        self.start_puzzle(next)
    }

    fn draw_border(&mut self) -> Result<()> {
        let color = self.config.palette.border;
        for pos in border_ring() {
            self.surface.light(pos, color)?;
        }
        Ok(())
    }

    fn animate_start(&mut self) -> Result<()> {
        self.shown = None;

        let flash = self.config.palette.flash;
        let step = self.config.animation_step;
        let Some(puzzle) = self.store.get(self.current_puzzle) else {
            return Ok(());
        };

        for &coords in puzzle.cells() {
            self.surface.light(to_physical(coords), flash)?;
            if !step.is_zero() {
                std::thread::sleep(step);
            }
        }
        Ok(())
    }
}
