use super::action::Direction;
use super::map::Viewport;
use super::point::Point;
use super::texture::Texture;

/// The player's snake: a single tile travelling across the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub pos: Point,
    pub direction: Direction,
}

impl Snake {
    pub fn new(pos: Point, direction: Direction) -> Self {
        Self { pos, direction }
    }

    /// Texture matching the current heading
    pub fn texture(&self) -> Texture {
        Texture::Snake(self.direction)
    }

    /// Tile origin the snake moves to next, wrapping at the viewport edges
    pub fn next_position(&self, viewport: &Viewport) -> Point {
        self.pos
            .moved(self.direction, viewport.tile_size)
            .wrapped(viewport.max_x(), viewport.max_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        // 4 columns, 3 rows
        Viewport::new(128, 96, 32)
    }

    #[test]
    fn test_advance() {
        let snake = Snake::new(Point::new(32, 32), Direction::Right);
        assert_eq!(snake.next_position(&viewport()), Point::new(64, 32));
    }

    #[test]
    fn test_wraps_at_every_edge() {
        let vp = viewport();
        let right = Snake::new(Point::new(96, 0), Direction::Right);
        assert_eq!(right.next_position(&vp), Point::new(0, 0));

        let left = Snake::new(Point::new(0, 32), Direction::Left);
        assert_eq!(left.next_position(&vp), Point::new(96, 32));

        let up = Snake::new(Point::new(64, 0), Direction::Up);
        assert_eq!(up.next_position(&vp), Point::new(64, 64));

        let down = Snake::new(Point::new(64, 64), Direction::Down);
        assert_eq!(down.next_position(&vp), Point::new(64, 0));
    }

    #[test]
    fn test_texture_follows_direction() {
        let mut snake = Snake::new(Point::new(0, 0), Direction::Right);
        assert_eq!(snake.texture(), Texture::Snake(Direction::Right));
        snake.direction = Direction::Up;
        assert_eq!(snake.texture(), Texture::Snake(Direction::Up));
    }
}
