//! Keyboard input: control keys and held directional keys

pub mod handler;
pub mod mapper;

pub use handler::{InputHandler, KeyAction, KeyboardState};
pub use mapper::{InputMapper, KeySource};
