use super::{
    config::GameConfig,
    direction::Direction,
    grid::{CellState, Position},
    snake::Snake,
    state::{CollisionType, GameState, GameStatus},
};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Status after the step
    pub status: GameStatus,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn new(status: GameStatus, ate_food: bool, collision_type: Option<CollisionType>) -> Self {
        Self {
            status,
            info: StepInfo {
                ate_food,
                collision_type,
            },
        }
    }

    /// Whether the game has ended
    pub fn terminated(&self) -> bool {
        self.status.is_terminal()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state: a one-segment snake in the middle of
    /// the grid, standing still, and one piece of food
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );

        let mut state = GameState::new(
            self.config.grid_width,
            self.config.grid_height,
            Snake::new(center),
            None,
        );
        let food = state.place_food(&mut self.rng);

        info!(
            "new game on a {}x{} grid, head at {:?}, food at {:?}",
            self.config.grid_width, self.config.grid_height, center, food
        );
        state
    }

    /// Execute one tick of the game using the queued or committed direction
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.status.is_terminal() {
            return StepResult::new(state.status, false, None);
        }

        state.commit_queued_direction();
        state.ticks += 1;

        if state.is_filled() {
            state.status = GameStatus::Won;
            info!("snake fills the grid after {} ticks, score {}", state.ticks, state.score);
            return StepResult::new(state.status, false, None);
        }

        // Standing still until the first turn
        if state.direction == Direction::None {
            return StepResult::new(state.status, false, None);
        }

        let new_head = state.snake().head().moved_in_direction(state.direction);

        if let Some(collision) = state.check_collision(new_head) {
            state.status = GameStatus::Lost;
            info!(
                "{:?} collision at {:?} on tick {}, final score {}",
                collision, new_head, state.ticks, state.score
            );
            return StepResult::new(state.status, false, Some(collision));
        }

        let ate_food = match state.grid().state(new_head) {
            CellState::Food => {
                state.grow_to(new_head);
                let food = state.place_food(&mut self.rng);
                debug!("ate food at {:?}, score {}, new food at {:?}", new_head, state.score, food);
                true
            }
            CellState::Empty | CellState::Body | CellState::Head => {
                state.advance_to(new_head);
                false
            }
        };

        StepResult::new(state.status, ate_food, None)
    }
}
