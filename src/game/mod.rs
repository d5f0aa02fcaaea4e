//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies,
//! so state transitions can be tested without a terminal.

pub mod action;
pub mod collision;
pub mod config;
pub mod controller;
pub mod engine;
pub mod food;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use collision::is_game_over;
pub use config::GameConfig;
pub use controller::{Input, Steer};
pub use engine::{Advance, GameEngine};
pub use geometry::{Cell, Grid};
pub use state::{CollisionType, GameState, Outcome, Phase, Snake};
