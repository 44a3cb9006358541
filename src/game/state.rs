use super::map::{TileMap, Viewport};
use super::point::Point;
use super::snake::Snake;
use super::texture::{AppleVariant, Texture};

/// A piece of food on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub pos: Point,
    pub variant: AppleVariant,
}

impl Apple {
    pub fn texture(&self) -> Texture {
        Texture::Apple(self.variant)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub map: TileMap,
    pub snake: Snake,
    pub apple: Option<Apple>,
    /// Apples eaten so far
    pub score: u32,
    /// Ticks since the game started
    pub steps: u32,
    /// Current time between ticks
    pub interval_ms: u64,
    pub zoom: f32,
}

impl GameState {
    /// Create a new game state
    pub fn new(map: TileMap, snake: Snake, interval_ms: u64) -> Self {
        Self {
            map,
            snake,
            apple: None,
            score: 0,
            steps: 0,
            interval_ms,
            zoom: 1.0,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        self.map.viewport()
    }

    /// Check if a tile origin is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Point) -> bool {
        self.snake.pos == pos
    }

    /// Put an apple on the map, replacing the previous one.
    ///
    /// Refused (returns `false`) when `apple.pos` has no tile or holds the snake.
    pub fn place_apple(&mut self, apple: Apple) -> bool {
        if self.is_occupied_by_snake(apple.pos) || !self.map.contains(apple.pos) {
            return false;
        }
        self.clear_apple();
        if let Some(tile) = self.map.tile_mut(apple.pos) {
            tile.add_texture(apple.texture());
        }
        self.apple = Some(apple);
        true
    }

    /// Take the apple off the map
    pub fn clear_apple(&mut self) -> Option<Apple> {
        let apple = self.apple.take()?;
        if let Some(tile) = self.map.tile_mut(apple.pos) {
            tile.remove_texture(apple.texture());
        }
        Some(apple)
    }
}
