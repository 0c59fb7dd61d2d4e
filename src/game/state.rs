use super::direction::Direction;
use super::food;
use super::grid::{CellState, Grid, Position};
use super::snake::Snake;
use rand::Rng;

/// Where a game stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete game state.
///
/// The grid mirrors the snake and the food at all times: every mutating
/// method updates both together.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    pub score: u32,
    pub ticks: u32,
    pub status: GameStatus,
    /// Direction applied on every tick
    pub direction: Direction,
    /// Direction waiting for the next tick boundary
    pub queued_direction: Direction,
}

impl GameState {
    /// Create a game state from an existing snake and optional food.
    ///
    /// Snake and food must lie inside the grid and must not overlap.
    pub fn new(width: usize, height: usize, snake: Snake, food: Option<Position>) -> Self {
        let mut grid = Grid::new(width, height);
        for segment in snake.iter().skip(1) {
            grid.set_state(segment, CellState::Body);
        }
        grid.set_state(snake.head(), CellState::Head);
        if let Some(food) = food {
            debug_assert!(!snake.contains(food), "food placed on the snake");
            grid.set_state(food, CellState::Food);
        }

        Self {
            grid,
            snake,
            food,
            score: 0,
            ticks: 0,
            status: GameStatus::Running,
            direction: Direction::None,
            queued_direction: Direction::None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    /// True once the snake covers every cell of the grid
    pub fn is_filled(&self) -> bool {
        self.snake.len() == self.grid.cell_count()
    }

    /// Queue a turn for the next tick. Reversing onto the neck and `None`
    /// are refused; returns whether the turn was queued.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if direction == Direction::None || self.direction.is_opposite(direction) {
            return false;
        }
        self.queued_direction = direction;
        true
    }

    /// Promote the queued direction, if any, to the committed one
    pub fn commit_queued_direction(&mut self) {
        if self.queued_direction != Direction::None {
            self.direction = self.queued_direction;
            self.queued_direction = Direction::None;
        }
    }

    /// Check whether moving the head to `new_head` ends the game
    pub fn check_collision(&self, new_head: Position) -> Option<CollisionType> {
        if !self.is_in_bounds(new_head) {
            return Some(CollisionType::Wall);
        }

        let growing = self.grid.state(new_head) == CellState::Food;

        // The tail moves out of the way on a non-growing move
        if !growing && new_head == self.snake.tail() {
            return None;
        }

        if self.snake.contains(new_head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Non-growing move: the head advances and the tail cell is vacated
    pub fn advance_to(&mut self, new_head: Position) {
        if self.snake.len() > 1 {
            self.grid.set_state(self.snake.head(), CellState::Body);
        }
        self.snake.push_head(new_head);
        if let Some(tail) = self.snake.pop_tail() {
            self.grid.set_state(tail, CellState::Empty);
        }
        self.grid.set_state(new_head, CellState::Head);
    }

    /// Growing move: the head advances onto food and the tail stays put
    pub fn grow_to(&mut self, new_head: Position) {
        self.grid.set_state(self.snake.head(), CellState::Body);
        self.snake.push_head(new_head);
        self.grid.set_state(new_head, CellState::Head);
        if self.food == Some(new_head) {
            self.food = None;
        }
        self.score += 1;
    }

    /// Put food on a random empty cell. Leaves `food` empty when the snake
    /// fills the grid.
    pub fn place_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if let Some(old) = self.food.take() {
            if self.grid.state(old) == CellState::Food {
                self.grid.set_state(old, CellState::Empty);
            }
        }

        self.food = food::place_food(&self.grid, rng);
        if let Some(pos) = self.food {
            self.grid.set_state(pos, CellState::Food);
        }
        self.food
    }
}
