use super::action::{Direction, Velocity};
use super::geometry::{Cell, Grid};

/// The snake, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a straight snake whose body extends against `direction`
    pub fn new(head: Cell, direction: Direction, length: usize, cell_size: i32) -> Self {
        let back = direction.velocity(cell_size).reversed();
        let mut body = Vec::with_capacity(length);
        let mut segment = head;

        for _ in 0..length.max(1) {
            body.push(segment);
            segment = segment.moved_by(back.dx, back.dy);
        }

        Self { body }
    }

    pub fn from_cells(body: Vec<Cell>) -> Self {
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Push a new head; drop the tail unless growing
    pub fn advance_to(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crashed(CollisionType),
    /// Every cell is occupied by the snake
    BoardFull,
}

/// Running flag and direction lock as one state machine.
///
/// `Locked` is entered when a turn is accepted and left at the start of the
/// next tick, so at most one turn takes effect per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No ticks are scheduled; only start input is honored
    Stopped,
    /// Running, a turn may be accepted
    Steering,
    /// Running, a turn was already accepted this tick
    Locked,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    /// `None` once the board is full
    pub food: Option<Cell>,
    pub grid: Grid,
    pub score: u32,
    pub ticks: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Create a running game state heading in `direction`
    pub fn new(snake: Snake, direction: Direction, food: Option<Cell>, grid: Grid) -> Self {
        Self {
            snake,
            direction,
            food,
            grid,
            score: 0,
            ticks: 0,
            phase: Phase::Steering,
            outcome: None,
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.direction.velocity(self.grid.cell_size)
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    pub fn is_direction_locked(&self) -> bool {
        self.phase == Phase::Locked
    }

    /// Release the direction lock; called at the start of every tick
    pub fn unlock_direction(&mut self) {
        if self.phase == Phase::Locked {
            self.phase = Phase::Steering;
        }
    }

    /// Stop the game, recording why it ended
    pub fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Stopped;
        self.outcome = Some(outcome);
    }
}
