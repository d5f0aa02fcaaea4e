use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::{
    action::Direction,
    config::GameConfig,
    food::place_food,
    geometry::{Cell, Grid},
    state::{GameState, Phase, Snake},
};

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Whether the new head landed on the food
    pub ate_food: bool,
    /// Food was eaten and no free cell is left for the next one
    pub board_full: bool,
}

/// Builds game states and moves the snake
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            grid: config.grid(),
            config,
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Fresh running game: snake centered heading right, food placed
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            self.grid.center(),
            Direction::Right,
            self.config.initial_snake_length,
            self.grid.cell_size,
        );
        let food = self.place_food(&snake);

        GameState::new(snake, Direction::Right, food, self.grid)
    }

    /// The layout shown before the first game starts
    pub fn idle(&mut self) -> GameState {
        let mut state = self.reset();
        state.phase = Phase::Stopped;
        state
    }

    /// Move the snake one cell along its velocity, growing onto food.
    ///
    /// The new head is pushed before food is replaced, so the next food is
    /// never placed under it.
    pub fn advance(&mut self, state: &mut GameState) -> Advance {
        let velocity = state.velocity();
        let new_head = state.snake.head().moved_by(velocity.dx, velocity.dy);
        let ate_food = state.food == Some(new_head);

        state.snake.advance_to(new_head, ate_food);
        state.ticks += 1;

        let mut board_full = false;
        if ate_food {
            state.score += 1;
            state.food = self.place_food(&state.snake);
            board_full = state.food.is_none();
            debug!(score = state.score, food = ?state.food, "food eaten");
        }

        Advance {
            ate_food,
            board_full,
        }
    }

    fn place_food(&mut self, snake: &Snake) -> Option<Cell> {
        place_food(
            &mut self.rng,
            &self.grid,
            &snake.body,
            self.config.max_food_attempts,
        )
    }
}
