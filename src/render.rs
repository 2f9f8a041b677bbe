use std::collections::VecDeque;
use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use tracing::trace;

use crate::error::DisplayError;
use crate::grid::{Cell, Grid};

const HEAD: &str = "▓▓";
const BODY: &str = "██";
const FOOD: &str = "()";
const EMPTY: &str = "  ";
const BORDER: char = '#';

pub const HELP_TEXT: &str = "Arrows/WASD to steer, Esc or q to quit";
pub const GAME_OVER_TEXT: &str = "Game Over! Press SPACE to restart";

/// Everything a sink needs to draw one tick, borrowed from a consistent state.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub grid: Grid,
    pub snake: &'a VecDeque<Cell>,
    pub food: Cell,
    pub score: u32,
    pub game_over: bool,
}

pub trait RenderSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), DisplayError>;
}

/// Lays a frame out as text: the bordered board, then the score and a status line.
pub fn frame_lines(frame: &Frame<'_>) -> Vec<String> {
    let width = usize::from(frame.grid.width());
    let border: String = std::iter::repeat(BORDER).take(width * EMPTY.len() + 2).collect();

    let mut lines = Vec::with_capacity(usize::from(frame.grid.height()) + 4);
    lines.push(border.clone());
    for y in 0..i32::from(frame.grid.height()) {
        let mut row = String::with_capacity(width * 6 + 2);
        row.push(BORDER);
        for x in 0..i32::from(frame.grid.width()) {
            let cell = Cell::new(x, y);
            let glyph = if frame.snake.front() == Some(&cell) {
                HEAD
            } else if frame.snake.contains(&cell) {
                BODY
            } else if frame.food == cell {
                FOOD
            } else {
                EMPTY
            };
            row.push_str(glyph);
        }
        row.push(BORDER);
        lines.push(row);
    }
    lines.push(border);
    lines.push(format!("Score: {}", frame.score));
    lines.push(if frame.game_over { GAME_OVER_TEXT } else { HELP_TEXT }.to_string());
    lines
}

pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), DisplayError> {
        for (row, line) in frame_lines(frame).iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row), Print(line), Clear(ClearType::UntilNewLine))
                .map_err(DisplayError::Render)?;
        }
        self.out.flush().map_err(DisplayError::Render)
    }
}

/// Sink for runs without a display. Counts frames and draws nothing.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
}

impl HeadlessRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for HeadlessRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), DisplayError> {
        self.frames += 1;
        trace!(frame = self.frames, score = frame.score, length = frame.snake.len(), "headless frame");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(snake: &VecDeque<Cell>, game_over: bool) -> Frame<'_> {
        Frame {
            grid: Grid::new(5, 3),
            snake,
            food: Cell::new(4, 2),
            score: 30,
            game_over,
        }
    }

    #[test]
    fn lays_out_board_and_status() {
        let snake: VecDeque<Cell> = [Cell::new(2, 1), Cell::new(1, 1)].into_iter().collect();
        let lines = frame_lines(&frame(&snake, false));

        assert_eq!(lines.len(), 3 + 2 + 2);
        assert_eq!(lines[0], "#".repeat(12));
        assert_eq!(lines[1], format!("#{}#", " ".repeat(10)));
        assert_eq!(lines[2], "#  ██▓▓    #");
        assert_eq!(lines[3], "#        ()#");
        assert_eq!(lines[5], "Score: 30");
        assert_eq!(lines[6], HELP_TEXT);
    }

    #[test]
    fn game_over_banner_replaces_help() {
        let snake: VecDeque<Cell> = [Cell::new(0, 0)].into_iter().collect();
        let lines = frame_lines(&frame(&snake, true));
        assert_eq!(lines.last().map(String::as_str), Some(GAME_OVER_TEXT));
    }

    #[test]
    fn off_board_head_is_not_drawn() {
        let snake: VecDeque<Cell> = [Cell::new(-1, 0), Cell::new(0, 0)].into_iter().collect();
        let lines = frame_lines(&frame(&snake, true));
        assert_eq!(lines[1], format!("#{}{}#", BODY, " ".repeat(8)));
    }

    #[test]
    fn terminal_renderer_writes_every_line() {
        let snake: VecDeque<Cell> = [Cell::new(2, 1)].into_iter().collect();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&frame(&snake, false)).unwrap();
        let written = String::from_utf8(renderer.out).unwrap();
        assert!(written.contains("Score: 30"));
        assert!(written.contains(HEAD));
        assert!(written.contains(FOOD));
    }

    #[test]
    fn headless_counts_frames() {
        let snake: VecDeque<Cell> = [Cell::new(2, 1)].into_iter().collect();
        let mut sink = HeadlessRenderer::default();
        sink.render(&frame(&snake, false)).unwrap();
        sink.render(&frame(&snake, false)).unwrap();
        assert_eq!(sink.frames(), 2);
    }
}
