use std::io;

use thiserror::Error;

/// Failures of the terminal backend. The game logic itself has no error states.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to set up the terminal")]
    Setup(#[source] io::Error),
    #[error("failed to draw a frame")]
    Render(#[source] io::Error),
    #[error("failed to read keyboard input")]
    Input(#[source] io::Error),
    #[error("terminal is {cols}x{rows}, the board needs at least {needed_cols}x{needed_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        needed_cols: u16,
        needed_rows: u16,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("tick rate must be greater than zero")]
    ZeroTickRate,
    #[error("window {window_width}x{window_height} is too large for cells of {cell_size}px")]
    GridOverflow {
        window_width: u32,
        window_height: u32,
        cell_size: u32,
    },
    #[error("a {width}x{height} grid cannot hold the starting snake and its food")]
    GridTooSmall { width: u16, height: u16 },
    #[error("a {width}x{height} grid exceeds the {max}x{max} limit")]
    GridTooLarge { width: u16, height: u16, max: u16 },
}
