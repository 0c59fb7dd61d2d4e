//! Terminal rendering with ratatui

pub mod renderer;

pub use renderer::{BORDER_COLOR, GridView, Renderer, cell_color};
