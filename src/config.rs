use std::env;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::snake::INITIAL_LENGTH;

pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 20;
pub const DEFAULT_TICK_RATE: u32 = 10;
pub const DEFAULT_HEADLESS_TICKS: u64 = 30;
// Food placement scans the whole board on every spawn.
pub const MAX_GRID_SIDE: u16 = 200;

pub const CI_ENV_VARS: [&str; 2] = ["CI", "GITHUB_ACTIONS"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Headless { ticks: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub tick_rate: u32,
    pub mode: RunMode,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(
                (WINDOW_WIDTH / CELL_SIZE) as u16,
                (WINDOW_HEIGHT / CELL_SIZE) as u16,
            ),
            tick_rate: DEFAULT_TICK_RATE,
            mode: RunMode::Interactive,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn is_headless(&self) -> bool {
        matches!(self.mode, RunMode::Headless { .. })
    }
}

pub fn grid_for_window(window_width: u32, window_height: u32, cell_size: u32) -> Result<Grid, ConfigError> {
    if cell_size == 0 {
        return Err(ConfigError::ZeroCellSize);
    }
    let grid = Grid::from_window(window_width, window_height, cell_size).ok_or(ConfigError::GridOverflow {
        window_width,
        window_height,
        cell_size,
    })?;
    // The snake spawns leftward from the center column and needs one spare cell for food.
    if usize::from(grid.width() / 2) + 1 < INITIAL_LENGTH || grid.height() == 0 {
        return Err(ConfigError::GridTooSmall {
            width: grid.width(),
            height: grid.height(),
        });
    }
    if grid.width() > MAX_GRID_SIDE || grid.height() > MAX_GRID_SIDE {
        return Err(ConfigError::GridTooLarge {
            width: grid.width(),
            height: grid.height(),
            max: MAX_GRID_SIDE,
        });
    }
    Ok(grid)
}

pub fn is_ci_environment() -> bool {
    is_ci_with(|name| env::var(name).ok())
}

pub fn is_ci_with(lookup: impl Fn(&str) -> Option<String>) -> bool {
    CI_ENV_VARS
        .iter()
        .any(|name| lookup(name).is_some_and(|value| value == "true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_thirty_square() {
        let config = GameConfig::default();
        assert_eq!(config.grid, Grid::new(30, 30));
        assert_eq!(config.tick_rate, 10);
        assert!(!config.is_headless());
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert_eq!(grid_for_window(600, 600, 0), Err(ConfigError::ZeroCellSize));
        assert_eq!(
            grid_for_window(60, 600, 20),
            Err(ConfigError::GridTooSmall { width: 3, height: 30 })
        );
        assert_eq!(
            grid_for_window(600, 10, 20),
            Err(ConfigError::GridTooSmall { width: 30, height: 0 })
        );
        assert_eq!(grid_for_window(80, 20, 20), Ok(Grid::new(4, 1)));
    }

    #[test]
    fn caps_the_board_size() {
        assert_eq!(
            grid_for_window(65535, 65535, 1),
            Err(ConfigError::GridTooLarge { width: 65535, height: 65535, max: MAX_GRID_SIDE })
        );
        assert_eq!(
            grid_for_window(4000, 100, 10),
            Err(ConfigError::GridTooLarge { width: 400, height: 10, max: MAX_GRID_SIDE })
        );
        assert_eq!(grid_for_window(200, 200, 1), Ok(Grid::new(200, 200)));
    }

    #[test]
    fn ci_detection_needs_true() {
        assert!(is_ci_with(|name| (name == "CI").then(|| "true".to_string())));
        assert!(is_ci_with(|name| (name == "GITHUB_ACTIONS").then(|| "true".to_string())));
        assert!(!is_ci_with(|_| Some("1".to_string())));
        assert!(!is_ci_with(|_| None));
    }
}
