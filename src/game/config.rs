use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use super::geometry::Grid;

/// Largest grid that still fits a terminal buffer, two columns per cell
pub const MAX_GRID_COLUMNS: i32 = u16::MAX as i32 / 2;
pub const MAX_GRID_ROWS: i32 = u16::MAX as i32;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub canvas_width: i32,
    /// Canvas height in pixels
    pub canvas_height: i32,
    /// Side of one grid cell in pixels
    pub cell_size: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Delay between ticks in milliseconds
    pub tick_delay_ms: u64,
    /// Random food samples before scanning for a free cell
    pub max_food_attempts: usize,
    /// Fixed RNG seed, for reproducible food sequences
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            cell_size: 20,
            initial_snake_length: 3,
            tick_delay_ms: 150,
            max_food_attempts: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom canvas size
    pub fn new(canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Default::default()
        }
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::from_canvas(self.canvas_width, self.canvas_height, self.cell_size)
    }

    /// Check that the canvas divides into cells and the starting snake fits
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.canvas_width > 0 && self.canvas_height > 0,
            "canvas dimensions must be positive"
        );
        ensure!(
            self.canvas_width % self.cell_size == 0 && self.canvas_height % self.cell_size == 0,
            "canvas {}x{} is not a multiple of the cell size {}",
            self.canvas_width,
            self.canvas_height,
            self.cell_size
        );
        ensure!(self.initial_snake_length > 0, "snake needs at least one segment");

        let grid = self.grid();
        ensure!(
            grid.width <= MAX_GRID_COLUMNS && grid.height <= MAX_GRID_ROWS,
            "grid of {}x{} cells is larger than {}x{}",
            grid.width,
            grid.height,
            MAX_GRID_COLUMNS,
            MAX_GRID_ROWS
        );
        ensure!(
            grid.cell_count() > self.initial_snake_length,
            "a snake of length {} leaves no free cell for food on a {}x{} grid",
            self.initial_snake_length,
            grid.width,
            grid.height
        );
        ensure!(
            (grid.width / 2) as usize + 1 >= self.initial_snake_length,
            "a snake of length {} does not fit left of center on a {}-column grid",
            self.initial_snake_length,
            grid.width
        );
        ensure!(self.tick_delay_ms > 0, "tick delay must be positive");
        Ok(())
    }
}
