use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Largest supported side length; keeps coordinates well inside `i32`
pub const MAX_GRID_SIDE: usize = 1024;

/// Slowest supported snake; one move every 1000 seconds
pub const MIN_MOVES_PER_SECOND: f32 = 0.001;

/// Fastest supported render rate
pub const MAX_FRAME_RATE: u32 = 1000;

/// Configuration for the game, fixed once a game starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Snake moves per second (tick rate)
    pub moves_per_second: f32,
    /// Render frames per second
    pub frame_rate: u32,
    /// Seed for food placement; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// Reasons a configuration cannot be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid side may not exceed {max}, got {width}x{height}", max = MAX_GRID_SIDE)]
    GridTooLarge { width: usize, height: usize },
    #[error("moves per second must be at least {min}, got {0}", min = MIN_MOVES_PER_SECOND)]
    InvalidSpeed(f32),
    #[error("frame rate must be between 1 and {max}, got {0}", max = MAX_FRAME_RATE)]
    InvalidFrameRate(u32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 25,
            moves_per_second: 10.0,
            frame_rate: 120,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Use a fixed seed so food placement is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.moves_per_second.is_finite() || self.moves_per_second < MIN_MOVES_PER_SECOND {
            return Err(ConfigError::InvalidSpeed(self.moves_per_second));
        }
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        Ok(())
    }

    /// Real time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.moves_per_second)
    }

    /// Real time between two rendered frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate
    }
}
