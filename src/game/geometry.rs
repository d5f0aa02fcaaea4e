//! Playfield geometry: the canvas split into square cells.

/// A grid-aligned position in pixel units (always a multiple of the cell size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by a pixel delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The discrete playfield: canvas dimensions divided by the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
    /// Side of one cell in pixels
    pub cell_size: i32,
}

impl Grid {
    /// Derive the grid from a canvas size in pixels
    pub fn from_canvas(canvas_width: i32, canvas_height: i32, cell_size: i32) -> Self {
        Self {
            width: canvas_width / cell_size,
            height: canvas_height / cell_size,
            cell_size,
        }
    }

    pub fn pixel_width(&self) -> i32 {
        self.width * self.cell_size
    }

    pub fn pixel_height(&self) -> i32 {
        self.height * self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Cell at the given column and row
    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size)
    }

    /// Center cell, rounding down on even dimensions
    pub fn center(&self) -> Cell {
        self.cell_at(self.width / 2, self.height / 2)
    }

    /// Whether the cell lies inside [0, width) x [0, height) in pixels
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.pixel_width() && cell.y >= 0 && cell.y < self.pixel_height()
    }

    /// Column and row of a pixel position, if it is on the grid
    pub fn column_row(&self, cell: Cell) -> Option<(usize, usize)> {
        if !self.contains(cell) {
            return None;
        }
        Some((
            (cell.x / self.cell_size) as usize,
            (cell.y / self.cell_size) as usize,
        ))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| self.cell_at(col, row)))
    }
}
