pub mod cli;
pub mod config;
pub mod direction;
pub mod display;
pub mod driver;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod snake;

pub use direction::Direction;
pub use error::{ConfigError, DisplayError};
pub use food::Food;
pub use game::{GameOverReason, GameState, GameStatus, FOOD_REWARD};
pub use grid::{Cell, Grid};
pub use snake::{Collision, Snake};
