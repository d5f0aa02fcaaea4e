//! Direction controller: turns player input into heading changes.

use tracing::debug;

use super::action::Direction;
use super::state::{GameState, Phase};

/// Input the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Start,
}

/// What an input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// Caller should reset and start a new game
    Start,
    /// Heading changed and the lock is now held
    Turned(Direction),
    Ignored,
}

impl GameState {
    /// Apply one input to the `Stopped -> Steering <-> Locked` state machine.
    ///
    /// A turn onto the exact opposite heading is rejected without taking the
    /// lock, so a valid turn can still follow within the same tick.
    pub fn steer(&mut self, input: Input) -> Steer {
        match (self.phase, input) {
            (Phase::Stopped, Input::Start) => Steer::Start,
            (Phase::Stopped, Input::Turn(_)) => Steer::Ignored,
            (Phase::Locked, _) | (Phase::Steering, Input::Start) => Steer::Ignored,
            (Phase::Steering, Input::Turn(candidate)) => {
                if self.direction.is_opposite(candidate) {
                    return Steer::Ignored;
                }
                debug!(from = ?self.direction, to = ?candidate, "turn accepted");
                self.direction = candidate;
                self.phase = Phase::Locked;
                Steer::Turned(candidate)
            }
        }
    }
}
