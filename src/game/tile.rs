use super::point::Point;
use super::texture::Texture;

/// One cell of the grid with its stack of textures, bottom layer first
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pos: Point,
    textures: Vec<Texture>,
}

impl Tile {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            textures: Vec::new(),
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Layers in drawing order
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    pub fn add_texture(&mut self, texture: Texture) {
        self.textures.push(texture);
    }

    /// Remove and return the top layer
    pub fn pop_texture(&mut self) -> Option<Texture> {
        self.textures.pop()
    }

    /// Remove the topmost layer equal to `texture`. Returns whether one was found.
    pub fn remove_texture(&mut self, texture: Texture) -> bool {
        match self.textures.iter().rposition(|t| *t == texture) {
            Some(index) => {
                self.textures.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the topmost layer matching a predicate
    pub fn take_texture(&mut self, pred: impl Fn(&Texture) -> bool) -> Option<Texture> {
        let index = self.textures.iter().rposition(pred)?;
        Some(self.textures.remove(index))
    }

    pub fn top_texture(&self) -> Option<Texture> {
        self.textures.last().copied()
    }

    pub fn has_snake(&self) -> bool {
        self.textures.iter().any(Texture::is_snake)
    }

    pub fn has_apple(&self) -> bool {
        self.textures.iter().any(Texture::is_apple)
    }
}
