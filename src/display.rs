use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, warn};

use crate::error::DisplayError;
use crate::grid::Grid;
use crate::input::{InputSource, ScriptedInput, TerminalInput};
use crate::render::{HeadlessRenderer, RenderSink, TerminalRenderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Terminal,
    Headless,
}

/// Raw mode plus alternate screen, held for the lifetime of the value.
/// Dropping it puts the terminal back, whichever way the game ends.
pub struct TerminalSession {
    stdout: Stdout,
}

/// Columns and rows needed to draw `grid`: two columns per cell plus the
/// border, and the border plus score and status lines.
pub fn required_terminal_size(grid: &Grid) -> (u16, u16) {
    (
        grid.width().saturating_mul(2).saturating_add(2),
        grid.height().saturating_add(4),
    )
}

pub fn ensure_fits(grid: &Grid, (cols, rows): (u16, u16)) -> Result<(), DisplayError> {
    let (needed_cols, needed_rows) = required_terminal_size(grid);
    if cols < needed_cols || rows < needed_rows {
        return Err(DisplayError::TerminalTooSmall {
            cols,
            rows,
            needed_cols,
            needed_rows,
        });
    }
    Ok(())
}

impl TerminalSession {
    pub fn acquire(grid: &Grid) -> Result<Self, DisplayError> {
        ensure_fits(grid, terminal::size().map_err(DisplayError::Setup)?)?;
        terminal::enable_raw_mode().map_err(DisplayError::Setup)?;
        // From here on Drop undoes whatever part of the setup succeeded.
        let mut session = Self { stdout: io::stdout() };
        execute!(session.stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))
            .map_err(DisplayError::Setup)?;
        debug!("terminal session acquired");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.stdout, Show, LeaveAlternateScreen) {
            warn!(%err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
        debug!("terminal session released");
    }
}

/// The display backend for one run. Constructed before the game loop and
/// handed to it; never a global.
pub enum DisplayContext {
    Terminal(TerminalSession),
    Headless,
}

impl DisplayContext {
    pub fn acquire(mode: DisplayMode, grid: &Grid) -> Result<Self, DisplayError> {
        match mode {
            DisplayMode::Terminal => TerminalSession::acquire(grid).map(DisplayContext::Terminal),
            DisplayMode::Headless => Ok(DisplayContext::Headless),
        }
    }

    pub fn surfaces(&mut self) -> (Box<dyn InputSource + '_>, Box<dyn RenderSink + '_>) {
        match self {
            DisplayContext::Terminal(session) => (
                Box::new(TerminalInput),
                Box::new(TerminalRenderer::new(&mut session.stdout)),
            ),
            DisplayContext::Headless => (Box::new(ScriptedInput::default()), Box::new(HeadlessRenderer::default())),
        }
    }
}
