use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::game::{CellState, GameState, Grid};
use crate::metrics::GameMetrics;

/// Outline drawn around every cell
pub const BORDER_COLOR: Color = Color::DarkGray;

/// Fill color for a cell
pub fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::Black,
        CellState::Body => Color::Green,
        CellState::Head => Color::Rgb(0, 117, 44),
        CellState::Food => Color::Red,
    }
}

/// Draws a grid as filled rectangles, one per cell, scaled to the area
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Terminal cells per grid cell, `None` when the area is too small
    pub fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let width = area.width as usize / self.grid.width().max(1);
        let height = area.height as usize / self.grid.height().max(1);
        if width == 0 || height == 0 {
            return None;
        }
        Some((width as u16, height as u16))
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((cell_width, cell_height)) = self.cell_size(area) else {
            Paragraph::new("Terminal too small")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .render(area, buf);
            return;
        };

        for (pos, state) in self.grid.cells() {
            let rect = Rect::new(
                area.x + pos.x as u16 * cell_width,
                area.y + pos.y as u16 * cell_height,
                cell_width,
                cell_height,
            );
            let fill = Style::default().bg(cell_color(state));
            buf.set_style(rect, fill);

            if cell_width >= 2 && cell_height >= 2 {
                Block::bordered()
                    .border_style(Style::default().fg(BORDER_COLOR))
                    .render(rect, buf);
            }
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let board = centered_board(chunks[1], state.grid());
        frame.render_widget(GridView::new(state.grid()), board);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shrink `area` to a whole number of cells per grid cell and center it
fn centered_board(area: Rect, grid: &Grid) -> Rect {
    let Some((cell_width, cell_height)) = GridView::new(grid).cell_size(area) else {
        return area;
    };
    let width = cell_width * grid.width() as u16;
    let height = cell_height * grid.height() as u16;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Snake};

    #[test]
    fn test_cell_colors() {
        assert_eq!(cell_color(CellState::Empty), Color::Black);
        assert_eq!(cell_color(CellState::Body), Color::Green);
        assert_eq!(cell_color(CellState::Head), Color::Rgb(0, 117, 44));
        assert_eq!(cell_color(CellState::Food), Color::Red);
    }

    #[test]
    fn test_cell_size_scales_with_area() {
        let grid = Grid::new(10, 5);
        let view = GridView::new(&grid);
        assert_eq!(view.cell_size(Rect::new(0, 0, 40, 20)), Some((4, 4)));
        assert_eq!(view.cell_size(Rect::new(0, 0, 25, 9)), Some((2, 1)));
        assert_eq!(view.cell_size(Rect::new(0, 0, 9, 20)), None);
    }

    #[test]
    fn test_fills_each_cell_with_its_color() {
        let mut grid = Grid::new(2, 2);
        grid.set_state(Position::new(1, 0), CellState::Food);
        grid.set_state(Position::new(0, 1), CellState::Head);

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        GridView::new(&grid).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Black);
        assert_eq!(buf[(1, 0)].bg, Color::Red);
        assert_eq!(buf[(0, 1)].bg, Color::Rgb(0, 117, 44));
    }

    #[test]
    fn test_large_cells_get_outlines() {
        let mut grid = Grid::new(1, 1);
        grid.set_state(Position::new(0, 0), CellState::Body);

        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        GridView::new(&grid).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, BORDER_COLOR);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(1, 1)].bg, Color::Green);
    }

    #[test]
    fn test_header_shows_session_stats() {
        let state = GameState::new(10, 10, Snake::new(Position::new(5, 5)), None);
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(7);
        metrics.on_game_over(3);

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Renderer::new().render_stats(&state, &metrics).render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.contains("Best: 7"), "{line}");
        assert!(line.contains("Games: 2"), "{line}");
        assert!(line.contains("Length: 1"), "{line}");
    }

    #[test]
    fn test_centered_board() {
        let grid = Grid::new(10, 10);
        let board = centered_board(Rect::new(0, 0, 45, 23), &grid);
        assert_eq!(board, Rect::new(2, 1, 40, 20));
    }
}
