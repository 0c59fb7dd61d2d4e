//! Grid Snake - the classic Snake game on a fixed grid
//!
//! This library provides:
//! - Core game logic: grid, snake, food placement and the tick state machine (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive frame loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
