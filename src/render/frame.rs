//! In-memory canvas the game draws on, painted into the terminal by ratatui.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::surface::{Align, Font, Surface, BACKGROUND_COLOR, TEXT_COLOR};
use crate::game::{Cell, Grid};

/// Terminal columns per grid cell; terminal glyphs are about twice as tall as wide
pub const COLUMNS_PER_CELL: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font: Font,
    pub align: Align,
}

/// Grid of cell colors plus any text drawn since the last clear
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    grid: Grid,
    cells: Vec<Color>,
    texts: Vec<TextItem>,
}

impl FrameBuffer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![BACKGROUND_COLOR; grid.cell_count()],
            texts: Vec::new(),
        }
    }

    /// Color of the cell at pixel position (x, y), `None` off the canvas
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(Cell::new(x, y)).map(|i| self.cells[i])
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    /// Size of the painted canvas in terminal cells, saturating at `u16::MAX`
    pub fn terminal_size(&self) -> (u16, u16) {
        let width = u16::try_from(self.grid.width.max(0)).unwrap_or(u16::MAX);
        let height = u16::try_from(self.grid.height.max(0)).unwrap_or(u16::MAX);
        (width.saturating_mul(COLUMNS_PER_CELL), height)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let (column, row) = self.grid.column_row(cell)?;
        Some(row * self.grid.width as usize + column)
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self) {
        self.cells.fill(BACKGROUND_COLOR);
        self.texts.clear();
    }

    fn draw_cell(&mut self, x: i32, y: i32, color: Color) {
        // Off-canvas draws (a head that just left the grid) are clipped
        if let Some(i) = self.index(Cell::new(x, y)) {
            self.cells[i] = color;
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font, align: Align) {
        self.texts.push(TextItem {
            text: text.to_string(),
            x,
            y,
            font,
            align,
        });
    }
}

impl Widget for &FrameBuffer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.terminal_size();
        let width = width.min(area.width);
        let height = height.min(area.height);
        let cell_size = self.grid.cell_size.max(1);

        for row in 0..height {
            for column in 0..width {
                let i = row as usize * self.grid.width as usize
                    + (column / COLUMNS_PER_CELL) as usize;
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol(" ").set_bg(self.cells[i]);
                }
            }
        }

        for item in &self.texts {
            let row = item.y / cell_size;
            if row < 0 || row >= height as i32 {
                continue;
            }

            let anchor = item.x * COLUMNS_PER_CELL as i32 / cell_size;
            let len = item.text.chars().count() as i32;
            let start = match item.align {
                Align::Left => anchor,
                Align::Center => anchor - len / 2,
                Align::Right => anchor - len,
            }
            .clamp(0, width as i32);

            let style = match item.font {
                Font::Title => Style::default()
                    .fg(TEXT_COLOR)
                    .bg(BACKGROUND_COLOR)
                    .add_modifier(Modifier::BOLD),
                Font::Hint => Style::default()
                    .fg(TEXT_COLOR)
                    .bg(BACKGROUND_COLOR)
                    .add_modifier(Modifier::DIM),
            };
            let room = (width as i32 - start) as usize;
            buf.set_stringn(
                area.x + start as u16,
                area.y + row as u16,
                &item.text,
                room,
                style,
            );
        }
    }
}
