use ratatui::style::Color;

pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
pub const FOOD_COLOR: Color = Color::Rgb(255, 80, 80);
pub const TEXT_COLOR: Color = Color::White;

/// Text size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Title,
    Hint,
}

/// Horizontal anchoring of text relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Drawing primitives the game needs. Coordinates are canvas pixels.
pub trait Surface {
    /// Fill the whole canvas with the background
    fn clear(&mut self);

    /// Fill one grid cell whose top-left corner is at (x, y)
    fn draw_cell(&mut self, x: i32, y: i32, color: Color);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font, align: Align);
}
