use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gridsnake::cli::Cli;
use gridsnake::config::{is_ci_environment, GameConfig, RunMode};
use gridsnake::display::{DisplayContext, DisplayMode};
use gridsnake::driver::{FixedRateClock, GameLoop, RunSummary};
use gridsnake::{logging, GameState};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error running game: {err:#}");
            eprintln!("{err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config(is_ci_environment()).context("invalid configuration")?;
    logging::init(cli.log_file.as_deref(), config.is_headless())?;

    if config.is_headless() {
        println!("Running in test/headless mode");
    }

    let summary = play(&config)?;

    match config.mode {
        RunMode::Headless { .. } => println!("Test mode: Successfully ran {} ticks", summary.ticks),
        RunMode::Interactive => println!("Game over! Final score: {}", summary.score),
    }
    Ok(())
}

/// Owns the display for exactly the duration of the loop, so the terminal is
/// restored before anything is printed.
fn play(config: &GameConfig) -> Result<RunSummary> {
    let state = match config.seed {
        Some(seed) => GameState::with_seed(config.grid, seed),
        None => GameState::new(config.grid),
    };
    let (mode, mut game) = match config.mode {
        RunMode::Interactive => (DisplayMode::Terminal, GameLoop::new(state)),
        RunMode::Headless { ticks } => (DisplayMode::Headless, GameLoop::new(state).with_tick_limit(ticks)),
    };

    let mut display = DisplayContext::acquire(mode, &config.grid).context("failed to initialise display")?;
    let (mut input, mut sink) = display.surfaces();
    let mut clock = FixedRateClock::new(config.tick_rate);
    let summary = game.run(input.as_mut(), sink.as_mut(), &mut clock)?;
    Ok(summary)
}
