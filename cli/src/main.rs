use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use lightspad_core::{Engine, EngineConfig, GameError, LightSurface, PuzzleStore, SurfaceError};

mod launchpad;
mod terminal;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SurfaceKind {
    /// Novation Launchpad over MIDI
    Launchpad,
    /// Text board on stdout, taps read from stdin as `x y`
    Terminal,
}

impl Default for SurfaceKind {
    fn default() -> Self {
        if cfg!(feature = "launchpad") {
            Self::Launchpad
        } else {
            Self::Terminal
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Lights Off on a MIDI grid controller", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Puzzle dataset, a JSON list of puzzles each listing its lit `[x, y]` cells
    #[arg(short, long, env = "LIGHTSPAD_PUZZLES")]
    puzzles: Option<PathBuf>,

    /// Puzzle to start with
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Controller polls per second
    #[arg(long, default_value_t = 20)]
    tick_rate: u32,

    /// Delay between cells of the puzzle start animation
    #[arg(long, default_value_t = 60)]
    animation_ms: u64,

    #[arg(long, value_enum, default_value_t = SurfaceKind::default())]
    surface: SurfaceKind,

    /// Substring of the controller's MIDI port name
    #[arg(long, default_value = "Launchpad")]
    device: String,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            start_index: self.start,
            tick_rate: self.tick_rate,
            animation_step: Duration::from_millis(self.animation_ms),
            ..Default::default()
        }
    }

    fn puzzle_store(&self) -> PuzzleStore {
        match &self.puzzles {
            Some(path) => PuzzleStore::load_or_default(path),
            None => {
                log::info!("No puzzle dataset given, using built-in puzzles");
                PuzzleStore::builtin()
            }
        }
    }
}

fn play<S: LightSurface>(
    surface: S,
    store: PuzzleStore,
    config: EngineConfig,
) -> anyhow::Result<()> {
    let mut engine = Engine::new(surface, store, config).context("Could not start the game")?;
    engine.run().context("Controller failed")
}

#[cfg(feature = "launchpad")]
fn play_launchpad(args: &Args, store: PuzzleStore, config: EngineConfig) -> anyhow::Result<()> {
    let surface = launchpad::LaunchpadSurface::connect(&args.device)
        .context("Could not open the controller")?;
    play(surface, store, config)
}

#[cfg(not(feature = "launchpad"))]
fn play_launchpad(
    args: &Args,
    _store: PuzzleStore,
    _config: EngineConfig,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "Cannot drive {:?}: built without the `launchpad` feature, try --surface terminal",
        args.device
    )
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();
    log::debug!("{:?}", args);

    let store = args.puzzle_store();
    let config = args.engine_config();

    match args.surface {
        SurfaceKind::Launchpad => play_launchpad(&args, store, config),
        SurfaceKind::Terminal => {
            let surface = terminal::TerminalSurface::spawn(config.palette);
            match play(surface, store, config) {
                Err(err)
                    if matches!(
                        err.downcast_ref::<GameError>(),
                        Some(GameError::Surface(SurfaceError::Disconnected))
                    ) =>
                {
                    log::info!("Input closed, bye");
                    Ok(())
                }
                result => result,
            }
        }
    }
}
