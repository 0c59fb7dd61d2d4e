use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// What occupies a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Body,
    Head,
    Food,
}

/// Fixed-size board of cell states, stored row-major.
///
/// The grid does not check bounds on access: indexing outside of it is a
/// programming error and panics. Use [`Grid::contains`] first when a position
/// may be off the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn state(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    pub fn set_state(&mut self, pos: Position, state: CellState) {
        let idx = self.index(pos);
        self.cells[idx] = state;
    }

    /// Every cell with its position, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, state)| (self.position_of(i), *state))
    }

    /// Positions of all empty cells, row by row
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(|(_, state)| *state == CellState::Empty)
            .map(|(pos, _)| pos)
    }

    /// Number of cells that are not empty
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| **state != CellState::Empty)
            .count()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{pos:?} is outside the grid");
        pos.y as usize * self.width + pos.x as usize
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::None), pos);
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.cells().all(|(_, state)| state == CellState::Empty));
    }

    #[test]
    fn test_cells_record_their_positions() {
        let grid = Grid::new(3, 2);
        let positions: Vec<Position> = grid.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(2, 0));
        assert_eq!(positions[3], Position::new(0, 1));
        assert_eq!(positions[5], Position::new(2, 1));
    }

    #[test]
    fn test_set_and_get_state() {
        let mut grid = Grid::new(5, 5);
        let pos = Position::new(3, 1);
        grid.set_state(pos, CellState::Food);

        assert_eq!(grid.state(pos), CellState::Food);
        assert_eq!(grid.state(Position::new(1, 3)), CellState::Empty);
        assert_eq!(grid.occupied_count(), 1);
        assert!(!grid.empty_cells().any(|p| p == pos));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 10);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 9)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, 10)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_access_panics() {
        let grid = Grid::new(2, 2);
        grid.state(Position::new(0, 5));
    }
}
