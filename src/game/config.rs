use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration the game cannot run with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("bonus period must be at least 1")]
    ZeroBonusPeriod,
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Milliseconds between game ticks
    pub tick_interval_ms: u64,
    /// A bonus food appears every this many points
    pub bonus_period: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Retry cap for rejection-sampled food placement
    pub max_spawn_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval_ms: 150,
            bonus_period: 4,
            initial_snake_length: 1,
            max_spawn_attempts: 10_000,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Reject degenerate values before any game is built from them.
    /// A zero bonus period would divide by zero in the level and bonus
    /// arithmetic; a grid under 2 cells has no room for snake plus food.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.bonus_period == 0 {
            return Err(ConfigError::ZeroBonusPeriod);
        }
        Ok(())
    }
}
