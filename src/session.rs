//! The single owner of a running game.
//!
//! `GameSession` holds the game state together with the engine, the tick
//! scheduler and the drawing targets, and implements the three things that
//! can happen to a game: start, player input and a scheduler tick.

use std::time::Duration;

use tracing::{info, trace};

use crate::game::{collision, GameConfig, GameEngine, GameState, Input, Outcome, Steer};
use crate::input::KeyAction;
use crate::render::{FrameBuffer, Hud, Painter, ScoreBoard};
use crate::scheduler::TickScheduler;

/// Result of processing one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game continues, next tick armed
    Continue,
    /// Game ended this tick
    Ended(Outcome),
    /// Tick arrived while stopped and was dropped
    Idle,
}

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    scheduler: TickScheduler,
    painter: Painter,
    frame: FrameBuffer,
    hud: Hud,
}

impl GameSession {
    /// Build an idle session showing the start prompt
    pub fn new(config: GameConfig) -> Self {
        let delay = Duration::from_millis(config.tick_delay_ms);
        let mut engine = GameEngine::new(config);
        let state = engine.idle();
        let grid = engine.grid();
        let painter = Painter::new();
        let mut frame = FrameBuffer::new(grid);
        painter.draw_intro(&mut frame, &grid);

        Self {
            engine,
            state,
            scheduler: TickScheduler::new(delay),
            painter,
            frame,
            hud: Hud::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn is_tick_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Replace the state with a fresh game and arm the first tick.
    ///
    /// Any tick still pending from the previous game is cancelled first. A
    /// snake that already covers the whole grid ends the game at once.
    pub fn start(&mut self) {
        self.scheduler.cancel();
        self.state = self.engine.reset();
        self.hud.publish_score(0);
        self.hud.set_end_screen_visible(false);

        self.painter.clear(&mut self.frame);
        self.painter.draw_food(&mut self.frame, &self.state);
        self.painter.draw_snake(&mut self.frame, &self.state);

        if self.state.food.is_none() {
            self.end(Outcome::BoardFull);
            return;
        }

        self.scheduler.schedule();
        info!(food = ?self.state.food, "game started");
    }

    /// Route one key action; `Restart` works in any phase, `Start` only when stopped
    pub fn handle_key(&mut self, action: KeyAction) -> Steer {
        let input = match action {
            KeyAction::Turn(direction) => Input::Turn(direction),
            KeyAction::Start => Input::Start,
            KeyAction::Restart => {
                self.start();
                return Steer::Start;
            }
            KeyAction::Quit | KeyAction::None => return Steer::Ignored,
        };

        let steer = self.state.steer(input);
        if steer == Steer::Start {
            self.start();
        }
        steer
    }

    /// Wait for the armed tick. Pends forever while no tick is armed.
    pub async fn tick_due(&mut self) {
        self.scheduler.fired().await;
    }

    /// Run one tick: unlock, draw, advance, check for the end of the game
    pub fn on_tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }

        // A stale deadline never outlives the tick that handles it
        self.scheduler.cancel();
        self.state.unlock_direction();
        self.painter.clear(&mut self.frame);
        self.painter.draw_food(&mut self.frame, &self.state);

        let step = self.engine.advance(&mut self.state);
        if step.ate_food {
            self.hud.publish_score(self.state.score);
        }

        self.painter.draw_snake(&mut self.frame, &self.state);
        trace!(tick = self.state.ticks, head = ?self.state.snake.head(), "tick");

        let grid = self.engine.grid();
        let outcome = match collision::check(&self.state.snake, &grid) {
            Some(kind) => Outcome::Crashed(kind),
            None if step.board_full => Outcome::BoardFull,
            None => {
                self.scheduler.schedule();
                return TickOutcome::Continue;
            }
        };

        self.end(outcome);
        TickOutcome::Ended(outcome)
    }

    fn end(&mut self, outcome: Outcome) {
        self.scheduler.cancel();
        self.state.finish(outcome);
        self.hud.publish_final_score(self.state.score);
        self.hud.set_end_screen_visible(true);
        info!(score = self.state.score, ?outcome, "game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, CollisionType, Direction, Phase, Snake};
    use crate::render::surface::{FOOD_COLOR, SNAKE_COLOR};
    use tokio::time::{timeout, Instant};

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(5),
            ..Default::default()
        }
    }

    fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
        points.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn started() -> GameSession {
        let mut session = GameSession::new(config());
        session.start();
        // Keep food out of the way unless a test places it
        session.state.food = Some(Cell::new(0, 380));
        session
    }

    #[test]
    fn test_new_session_shows_intro() {
        let session = GameSession::new(config());
        assert!(!session.state().is_running());
        assert!(!session.is_tick_pending());
        assert_eq!(session.frame().texts().len(), 2);
        assert_eq!(session.frame().texts()[0].text, "Press Enter to start");
    }

    #[test]
    fn test_turns_ignored_before_start() {
        let mut session = GameSession::new(config());
        assert_eq!(session.handle_key(KeyAction::Turn(Direction::Up)), Steer::Ignored);
        assert!(!session.state().is_running());
    }

    #[tokio::test]
    async fn test_enter_starts_game() {
        let mut session = GameSession::new(config());
        assert_eq!(session.handle_key(KeyAction::Start), Steer::Start);

        let state = session.state();
        assert!(state.is_running());
        assert_eq!(state.snake.body, cells(&[(200, 200), (180, 200), (160, 200)]));
        assert_eq!(state.velocity().dx, 20);
        assert_eq!(state.velocity().dy, 0);
        assert_eq!(state.score, 0);
        assert!(session.is_tick_pending());
        assert!(!session.hud().end_screen_visible);
        assert!(session.frame().texts().is_empty());
    }

    #[tokio::test]
    async fn test_one_tick_without_input() {
        let mut session = started();

        assert_eq!(session.on_tick(), TickOutcome::Continue);
        assert_eq!(
            session.state().snake.body,
            cells(&[(220, 200), (200, 200), (180, 200)])
        );
        assert_eq!(session.state().score, 0);
        assert!(session.is_tick_pending());
        assert_eq!(session.frame().color_at(220, 200), Some(SNAKE_COLOR));
        assert_eq!(session.frame().color_at(0, 380), Some(FOOD_COLOR));
    }

    #[tokio::test]
    async fn test_eating_grows_and_publishes_score() {
        let mut session = started();
        session.state.food = Some(Cell::new(220, 200));

        assert_eq!(session.on_tick(), TickOutcome::Continue);

        let state = session.state();
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert!(!state.snake.contains(state.food.unwrap()));
        assert_eq!(session.hud().score, 1);
    }

    #[tokio::test]
    async fn test_left_wall_ends_game() {
        let mut session = started();
        session.state.snake = Snake::from_cells(cells(&[(0, 200), (20, 200), (40, 200)]));
        session.state.direction = Direction::Left;
        session.state.score = 3;

        assert_eq!(
            session.on_tick(),
            TickOutcome::Ended(Outcome::Crashed(CollisionType::Wall))
        );
        assert_eq!(session.state().snake.head(), Cell::new(-20, 200));
        assert!(!session.state().is_running());
        assert!(!session.is_tick_pending());
        assert_eq!(session.hud().final_score, Some(3));
        assert!(session.hud().end_screen_visible);
    }

    #[tokio::test]
    async fn test_self_collision_ends_game() {
        let mut session = started();
        // Turning down then left then up runs into the body
        session.state.snake = Snake::from_cells(cells(&[
            (200, 200),
            (180, 200),
            (160, 200),
            (140, 200),
            (120, 200),
        ]));

        for direction in [Direction::Down, Direction::Left] {
            session.handle_key(KeyAction::Turn(direction));
            assert_eq!(session.on_tick(), TickOutcome::Continue);
        }
        session.handle_key(KeyAction::Turn(Direction::Up));
        assert_eq!(
            session.on_tick(),
            TickOutcome::Ended(Outcome::Crashed(CollisionType::SelfCollision))
        );
    }

    #[tokio::test]
    async fn test_inputs_coalesce_until_tick() {
        let mut session = started();

        assert_eq!(
            session.handle_key(KeyAction::Turn(Direction::Up)),
            Steer::Turned(Direction::Up)
        );
        assert_eq!(session.handle_key(KeyAction::Turn(Direction::Left)), Steer::Ignored);
        assert_eq!(session.state().phase, Phase::Locked);

        session.on_tick();
        assert_eq!(session.state().snake.head(), Cell::new(200, 180));
        assert_eq!(session.state().phase, Phase::Steering);
        assert_eq!(
            session.handle_key(KeyAction::Turn(Direction::Left)),
            Steer::Turned(Direction::Left)
        );
    }

    #[tokio::test]
    async fn test_reverse_input_rejected() {
        let mut session = started();
        assert_eq!(session.handle_key(KeyAction::Turn(Direction::Left)), Steer::Ignored);
        session.on_tick();
        assert_eq!(session.state().snake.head(), Cell::new(220, 200));
    }

    #[tokio::test]
    async fn test_start_ignored_while_running_restart_is_not() {
        let mut session = started();
        session.on_tick();

        assert_eq!(session.handle_key(KeyAction::Start), Steer::Ignored);
        assert_eq!(session.state().ticks, 1);

        assert_eq!(session.handle_key(KeyAction::Restart), Steer::Start);
        assert_eq!(session.state().ticks, 0);
        assert!(session.is_tick_pending());
    }

    #[tokio::test]
    async fn test_enter_after_game_over_restarts() {
        let mut session = started();
        session.state.snake = Snake::from_cells(cells(&[(380, 200), (360, 200), (340, 200)]));
        assert!(matches!(session.on_tick(), TickOutcome::Ended(_)));

        assert_eq!(session.handle_key(KeyAction::Turn(Direction::Up)), Steer::Ignored);
        assert_eq!(session.handle_key(KeyAction::Start), Steer::Start);
        assert!(session.state().is_running());
        assert_eq!(session.state().outcome, None);
        assert_eq!(session.hud().score, 0);
        assert!(!session.hud().end_screen_visible);
    }

    #[tokio::test]
    async fn test_tick_while_stopped_is_idle() {
        let mut session = GameSession::new(config());
        assert_eq!(session.on_tick(), TickOutcome::Idle);
        assert_eq!(session.state().ticks, 0);
    }

    #[tokio::test]
    async fn test_board_full_is_a_win() {
        let mut session = GameSession::new(GameConfig {
            canvas_width: 60,
            canvas_height: 20,
            initial_snake_length: 2,
            seed: Some(9),
            ..Default::default()
        });
        session.start();
        assert_eq!(session.state().food, Some(Cell::new(40, 0)));

        assert_eq!(session.on_tick(), TickOutcome::Ended(Outcome::BoardFull));
        assert_eq!(session.hud().final_score, Some(1));
        assert!(!session.is_tick_pending());
    }

    #[tokio::test]
    async fn test_start_on_full_board_ends_at_once() {
        // 2x1 board, fully covered by the starting snake
        let mut session = GameSession::new(GameConfig {
            canvas_width: 40,
            canvas_height: 20,
            initial_snake_length: 2,
            seed: Some(4),
            ..Default::default()
        });

        assert_eq!(session.handle_key(KeyAction::Start), Steer::Start);
        assert_eq!(session.state().food, None);
        assert_eq!(session.state().outcome, Some(Outcome::BoardFull));
        assert!(!session.state().is_running());
        assert!(!session.is_tick_pending());
        assert_eq!(session.hud().final_score, Some(0));
        assert!(session.hud().end_screen_visible);
        assert_eq!(session.on_tick(), TickOutcome::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_spaced_by_delay() {
        let mut session = started();
        let start = Instant::now();

        session.tick_due().await;
        assert_eq!(session.on_tick(), TickOutcome::Continue);
        session.tick_due().await;
        assert_eq!(session.on_tick(), TickOutcome::Continue);

        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_leaves_single_pending_tick() {
        let mut session = started();
        tokio::time::advance(Duration::from_millis(100)).await;

        // Restart just before the old tick would have fired
        session.handle_key(KeyAction::Restart);
        let restarted = Instant::now();

        session.tick_due().await;
        assert!(restarted.elapsed() >= Duration::from_millis(150));
        session.on_tick();

        // Exactly one tick fired; the next one is a fresh 150ms away
        assert_eq!(session.state().ticks, 1);
        let early = timeout(Duration::from_millis(100), session.tick_due()).await;
        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_game_over() {
        let mut session = started();
        session.state.snake = Snake::from_cells(cells(&[(380, 0), (360, 0)]));
        session.tick_due().await;
        assert!(matches!(session.on_tick(), TickOutcome::Ended(_)));

        let waited = timeout(Duration::from_secs(5), session.tick_due()).await;
        assert!(waited.is_err());
    }
}
