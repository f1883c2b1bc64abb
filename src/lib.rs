//! Snake Arcade - a tick-driven terminal snake game
//!
//! This library provides:
//! - Core game state machine (game module): grid, snake, food and bonus
//!   food, collisions, scoring, pause/reset
//! - Keyboard input translation (input module)
//! - TUI rendering of engine snapshots (render module)
//! - Session metrics (metrics module)
//! - The interactive play loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
