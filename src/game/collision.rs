//! Wall and self collision checks.

use super::geometry::Grid;
use super::state::{CollisionType, Snake};

/// Which collision, if any, the snake's head is in
pub fn check(snake: &Snake, grid: &Grid) -> Option<CollisionType> {
    let head = snake.head();

    if !grid.contains(head) {
        return Some(CollisionType::Wall);
    }

    if snake.body_segments().contains(&head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// True if the head is off the grid or on a non-head segment
pub fn is_game_over(snake: &Snake, grid: &Grid) -> bool {
    check(snake, grid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::Cell;

    fn grid() -> Grid {
        Grid::from_canvas(400, 400, 20)
    }

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)).collect())
    }

    #[test]
    fn test_no_collision() {
        let s = snake(&[(200, 200), (180, 200), (160, 200)]);
        assert_eq!(check(&s, &grid()), None);
        assert!(!is_game_over(&s, &grid()));
    }

    #[test]
    fn test_each_wall() {
        for head in [(-20, 200), (400, 200), (200, -20), (200, 400)] {
            let s = snake(&[head, (200, 200)]);
            assert_eq!(check(&s, &grid()), Some(CollisionType::Wall), "{head:?}");
        }
    }

    #[test]
    fn test_edges_are_inside() {
        for head in [(0, 0), (380, 0), (0, 380), (380, 380)] {
            let s = snake(&[head]);
            assert!(!is_game_over(&s, &grid()), "{head:?}");
        }
    }

    #[test]
    fn test_self_collision() {
        let s = snake(&[(100, 100), (120, 100), (100, 100)]);
        assert_eq!(check(&s, &grid()), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_single_segment_never_self_collides() {
        let s = snake(&[(100, 100)]);
        assert!(!is_game_over(&s, &grid()));
    }
}
