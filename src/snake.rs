use std::collections::VecDeque;

use crate::direction::Direction;
use crate::grid::{Cell, Grid};

pub const INITIAL_LENGTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// The player's snake. `body[0]` is the head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    // direction of the last executed move
    heading: Direction,
    pending_growth: bool,
}

impl Snake {
    /// Canonical start: three segments laid out horizontally, head on the
    /// board center, facing right.
    pub fn spawn(grid: &Grid) -> Self {
        let center = grid.center();
        Self {
            body: (0..INITIAL_LENGTH as i32)
                .map(|i| Cell::new(center.x - i, center.y))
                .collect(),
            direction: Direction::Right,
            heading: Direction::Right,
            pending_growth: false,
        }
    }

    /// Builds a snake from explicit segments, head first. `None` if `body` is empty.
    pub fn from_body(body: impl IntoIterator<Item = Cell>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Cell> = body.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            heading: direction,
            pending_growth: false,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> bool {
        self.pending_growth
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn next_head(&self) -> Cell {
        self.head().offset(self.direction.delta())
    }

    /// Turns the snake unless `requested` would reverse it, either against the
    /// current direction or against the move it actually made last. Reversals
    /// are dropped silently; the return value only reports whether the turn
    /// took effect.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.direction) || requested.is_opposite(self.heading) {
            return false;
        }
        self.direction = requested;
        true
    }

    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    pub fn advance(&mut self) {
        let new_head = self.next_head();
        self.body.push_front(new_head);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
        self.heading = self.direction;
    }

    /// Checks the post-move body: head off the board, or head on another segment.
    pub fn collision(&self, grid: &Grid) -> Option<Collision> {
        let head = self.head();
        if !grid.in_bounds(head) {
            return Some(Collision::Wall);
        }
        if self.body.iter().skip(1).any(|segment| *segment == head) {
            return Some(Collision::SelfBite);
        }
        None
    }

    pub fn check_collision(&self, grid: &Grid) -> bool {
        self.collision(grid).is_some()
    }
}
