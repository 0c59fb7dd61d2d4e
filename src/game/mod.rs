//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Every tick moves the snake one cell, grows it on food, and ends the game on
//! a wall or self collision, or once the snake fills the grid.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use grid::{CellState, Grid, Position};
pub use snake::Snake;
pub use state::{CollisionType, GameState, GameStatus};
