use rand::Rng;

use super::point::Point;
use super::texture::Texture;
use super::tile::Tile;

/// The pixel region covered by whole tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Surface width in pixels
    pub width: i32,
    /// Surface height in pixels
    pub height: i32,
    pub tile_size: i32,
    pub columns: i32,
    pub rows: i32,
}

impl Viewport {
    /// Fit as many whole tiles as possible into a `width` x `height` surface
    pub fn new(width: i32, height: i32, tile_size: i32) -> Self {
        let tile_size = tile_size.max(1);
        Self {
            width,
            height,
            tile_size,
            columns: (width / tile_size).max(0),
            rows: (height / tile_size).max(0),
        }
    }

    pub fn tile_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Origin x of the last column
    pub fn max_x(&self) -> i32 {
        (self.columns - 1) * self.tile_size
    }

    /// Origin y of the last row
    pub fn max_y(&self) -> i32 {
        (self.rows - 1) * self.tile_size
    }

    /// Whether `pos` is the origin of a tile inside the viewport
    pub fn contains(&self, pos: Point) -> bool {
        self.index_of(pos).is_some()
    }

    fn index_of(&self, pos: Point) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x % self.tile_size != 0 || pos.y % self.tile_size != 0
        {
            return None;
        }
        let column = pos.x / self.tile_size;
        let row = pos.y / self.tile_size;
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some((row * self.columns + column) as usize)
    }

    /// Clamp any point onto a tile origin inside the viewport
    pub fn snap(&self, pos: Point) -> Point {
        let column = (pos.x.div_euclid(self.tile_size)).clamp(0, (self.columns - 1).max(0));
        let row = (pos.y.div_euclid(self.tile_size)).clamp(0, (self.rows - 1).max(0));
        Point::new(column * self.tile_size, row * self.tile_size)
    }
}

/// Row-major grid of tiles covering a viewport
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    viewport: Viewport,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Tile the whole viewport, every tile starting out as grass
    pub fn build(viewport: Viewport) -> Self {
        let mut tiles = Vec::with_capacity(viewport.tile_count());
        for row in 0..viewport.rows {
            for column in 0..viewport.columns {
                let mut tile = Tile::new(Point::new(
                    column * viewport.tile_size,
                    row * viewport.tile_size,
                ));
                tile.add_texture(Texture::Grass);
                tiles.push(tile);
            }
        }

        Self { viewport, tiles }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, pos: Point) -> Option<&Tile> {
        self.viewport.index_of(pos).and_then(|i| self.tiles.get(i))
    }

    pub fn tile_mut(&mut self, pos: Point) -> Option<&mut Tile> {
        self.viewport.index_of(pos).and_then(|i| self.tiles.get_mut(i))
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.tile(pos).is_some()
    }

    /// Origin of a uniformly chosen tile, `None` if the map is empty
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        if self.tiles.is_empty() {
            return None;
        }
        Some(self.tiles[rng.gen_range(0..self.tiles.len())].pos())
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
