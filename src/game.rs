use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::direction::Direction;
use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::render::Frame;
use crate::snake::{Collision, Snake};

pub const FOOD_REWARD: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake filled every cell, so no food could be placed.
    BoardFilled,
}

impl From<Collision> for GameOverReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => GameOverReason::WallCollision,
            Collision::SelfBite => GameOverReason::SelfCollision,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(GameOverReason),
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    status: GameStatus,
    rng: StdRng,
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(grid: Grid, rng: StdRng) -> Self {
        Self::from_snake(grid, Snake::spawn(&grid), rng)
    }

    /// Starts a game from an arbitrary snake. Food goes to a random free cell;
    /// if there is none the game starts over with `BoardFilled`.
    pub fn from_snake(grid: Grid, snake: Snake, mut rng: StdRng) -> Self {
        let (food, status) = match Food::spawn(&grid, snake.body(), &mut rng) {
            Some(food) => (food, GameStatus::Playing),
            None => (Food::at(snake.head()), GameStatus::GameOver(GameOverReason::BoardFilled)),
        };
        Self {
            grid,
            snake,
            food,
            score: 0,
            status,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    /// Forwards a steering request to the snake. Ignored once the game is over.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.is_game_over() {
            return;
        }
        if !self.snake.change_direction(direction) {
            debug!(?direction, current = ?self.snake.direction(), "turn rejected");
        }
    }

    /// Moves the food to `cell`. Refused for cells off the board or under the snake.
    pub fn place_food(&mut self, cell: Cell) -> bool {
        if !self.grid.in_bounds(cell) || self.snake.occupies(cell) {
            return false;
        }
        self.food = Food::at(cell);
        true
    }

    pub fn update(&mut self) {
        if self.is_game_over() {
            return;
        }

        // The post-move head is known up front, so growth lands on this move.
        let ate = self.snake.next_head() == self.food.position();
        if ate {
            self.snake.grow();
        }
        self.snake.advance();

        if ate {
            self.score += FOOD_REWARD;
            debug!(score = self.score, length = self.snake.len(), "food eaten");
            if !self.food.respawn(&self.grid, self.snake.body(), &mut self.rng) {
                self.finish(GameOverReason::BoardFilled);
                return;
            }
        }

        if let Some(collision) = self.snake.collision(&self.grid) {
            self.finish(collision.into());
        }
    }

    pub fn reset(&mut self) {
        let snake = Snake::spawn(&self.grid);
        let fresh = Self::from_snake(self.grid, snake, self.rng.clone());
        *self = fresh;
        info!("game reset");
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid: self.grid,
            snake: self.snake.body(),
            food: self.food.position(),
            score: self.score,
            game_over: self.is_game_over(),
        }
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.status = GameStatus::GameOver(reason);
        info!(?reason, score = self.score, length = self.snake.len(), "game over");
    }
}
