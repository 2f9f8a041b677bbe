use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    grid_for_window, GameConfig, RunMode, CELL_SIZE, DEFAULT_HEADLESS_TICKS, DEFAULT_TICK_RATE, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use crate::error::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "gridsnake", version, about = "Classic snake on a fixed grid, in your terminal")]
pub struct Cli {
    /// Run headless for a fixed number of ticks and exit
    #[arg(long)]
    pub test: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value_t = DEFAULT_HEADLESS_TICKS)]
    pub ticks: u64,

    /// Simulation ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    pub tick_rate: u32,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub window_width: u32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub window_height: u32,

    /// Pixels per grid cell; the grid is the window size divided by this
    #[arg(long, default_value_t = CELL_SIZE)]
    pub cell_size: u32,

    /// Write logs to this file (interactive runs log nowhere otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self, ci: bool) -> Result<GameConfig, ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let grid = grid_for_window(self.window_width, self.window_height, self.cell_size)?;
        let mode = if self.test || ci {
            RunMode::Headless { ticks: self.ticks }
        } else {
            RunMode::Interactive
        };
        Ok(GameConfig {
            grid,
            tick_rate: self.tick_rate,
            mode,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gridsnake").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_are_interactive() {
        let config = parse(&[]).to_config(false).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flag_selects_headless() {
        let config = parse(&["--test"]).to_config(false).unwrap();
        assert_eq!(config.mode, RunMode::Headless { ticks: 30 });
    }

    #[test]
    fn ci_forces_headless() {
        let config = parse(&["--ticks", "5"]).to_config(true).unwrap();
        assert_eq!(config.mode, RunMode::Headless { ticks: 5 });
    }

    #[test]
    fn overrides_and_validation() {
        let config = parse(&["--cell-size", "30", "--seed", "4"]).to_config(false).unwrap();
        assert_eq!(config.grid, Grid::new(20, 20));
        assert_eq!(config.seed, Some(4));

        assert_eq!(parse(&["--tick-rate", "0"]).to_config(false), Err(ConfigError::ZeroTickRate));
        assert_eq!(parse(&["--cell-size", "0"]).to_config(false), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["gridsnake", "--bogus"]).is_err());
    }
}
