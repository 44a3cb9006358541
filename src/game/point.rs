use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A pixel position on the plane. Tiles are addressed by their top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `step` pixels in a direction
    pub fn moved(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * step,
            y: self.y + dy * step,
        }
    }

    /// Wrap an off-plane position to the opposite edge.
    ///
    /// `max_x` and `max_y` are the origins of the last tile column and row,
    /// so a position past the right edge lands at 0 and one past the left
    /// edge lands on the last column.
    pub fn wrapped(&self, max_x: i32, max_y: i32) -> Self {
        let mut x = self.x;
        let mut y = self.y;

        if x < 0 {
            x = max_x;
        } else if x > max_x {
            x = 0;
        }

        if y < 0 {
            y = max_y;
        } else if y > max_y {
            y = 0;
        }

        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
