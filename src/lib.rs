//! Grid Snake - a fixed-cadence snake game for the terminal
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - A cancellable tick timer (scheduler module)
//! - The session that owns one game and drives it (session module)
//! - Drawing surfaces and the TUI layout (render module)
//! - Keyboard mapping (input module) and the interactive loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scheduler;
pub mod session;
