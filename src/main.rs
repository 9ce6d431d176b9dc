use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::engine::{GameStepEngine, StepOutcome};
use grid_snake::error::ConfigError;
use grid_snake::input::poll_input;
use grid_snake::renderer;
use grid_snake::session::{Control, Session};
use grid_snake::terminal_runtime::{TerminalGuard, install_panic_hook};

/// Upper bound on how long one loop iteration waits for input.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of grid columns.
    #[arg(long)]
    cols: Option<u16>,

    /// Number of grid rows.
    #[arg(long)]
    rows: Option<u16>,

    /// Step interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Points per food eaten.
    #[arg(long)]
    score_increment: Option<u32>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::load_default_location()?,
        };

        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(score_increment) = self.score_increment {
            config.score_increment = score_increment;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let engine = match cli.resolve_config().and_then(|config| match cli.seed {
        Some(seed) => GameStepEngine::new_with_seed(config, seed),
        None => GameStepEngine::new(config),
    }) {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();
    match run(engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(engine: GameStepEngine) -> io::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut session = Session::new(engine, Instant::now());

    loop {
        guard
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session))?;

        let wait = session
            .time_until_next_tick(Instant::now())
            .map_or(MAX_INPUT_WAIT, |left| left.min(MAX_INPUT_WAIT));
        if let Some(input) = poll_input(wait)? {
            if session.handle_input(input, Instant::now()) == Control::Quit {
                break;
            }
        }

        if let Some(StepOutcome::Ended(reason)) = session.update(Instant::now()) {
            log::info!("final score {} ({reason:?})", session.engine().score());
        }
    }

    log::info!("best score this run: {}", session.best_score());
    Ok(())
}
