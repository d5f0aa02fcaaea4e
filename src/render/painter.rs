use super::surface::{Align, Font, Surface, FOOD_COLOR, SNAKE_COLOR};
use crate::game::{GameState, Grid};

/// Issues the drawing calls for a game state on any [`Surface`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Painter;

impl Painter {
    pub fn new() -> Self {
        Self
    }

    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
    }

    pub fn draw_food<S: Surface + ?Sized>(&self, surface: &mut S, state: &GameState) {
        if let Some(food) = state.food {
            surface.draw_cell(food.x, food.y, FOOD_COLOR);
        }
    }

    pub fn draw_snake<S: Surface + ?Sized>(&self, surface: &mut S, state: &GameState) {
        for segment in &state.snake.body {
            surface.draw_cell(segment.x, segment.y, SNAKE_COLOR);
        }
    }

    /// Start prompt shown before the first game
    pub fn draw_intro<S: Surface + ?Sized>(&self, surface: &mut S, grid: &Grid) {
        let x = grid.pixel_width() / 2;
        let y = grid.pixel_height() / 2;

        surface.clear();
        surface.draw_text("Press Enter to start", x, y, Font::Title, Align::Center);
        surface.draw_text("(use the arrow keys)", x, y + 30, Font::Hint, Align::Center);
    }
}
