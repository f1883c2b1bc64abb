//! Core game logic module for Snake
//!
//! This module contains the whole state machine without any I/O or
//! rendering dependencies: grid, snake, food placement, collision
//! detection, scoring and the pause/reset transitions. The outside world
//! drives it through queued commands and a periodic `tick()`, and observes
//! it through `Snapshot` and `EventSink`.

pub mod command;
pub mod config;
pub mod engine;
pub mod events;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use command::{Command, Direction};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, GameStatus, Snapshot};
pub use events::{EventSink, GameEvent};
pub use food::{Food, FoodSpawner, SpawnExhausted};
pub use grid::{Grid, Position};
pub use snake::Snake;
