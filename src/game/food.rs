//! Food placement on a free cell.

use rand::Rng;
use tracing::warn;

use super::geometry::{Cell, Grid};

/// Pick a random cell of `grid` that is not in `excluding`.
///
/// Samples uniformly for up to `max_attempts` tries, then scans the grid in
/// row-major order for the first free cell. Returns `None` only when every
/// cell is excluded.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
    excluding: &[Cell],
    max_attempts: usize,
) -> Option<Cell> {
    if grid.cell_count() == 0 {
        return None;
    }

    for _ in 0..max_attempts {
        let column = rng.gen_range(0..grid.width);
        let row = rng.gen_range(0..grid.height);
        let cell = grid.cell_at(column, row);

        if !excluding.contains(&cell) {
            return Some(cell);
        }
    }

    warn!(
        attempts = max_attempts,
        occupied = excluding.len(),
        "random food placement exhausted, scanning for a free cell"
    );
    grid.cells().find(|cell| !excluding.contains(cell))
}
