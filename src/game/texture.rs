use rand::Rng;

use super::action::Direction;

/// Number of distinct apple looks
pub const APPLE_VARIANTS: u8 = 8;

/// Which of the apple looks a piece of food uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppleVariant(u8);

impl AppleVariant {
    /// Returns `None` for indices outside `0..APPLE_VARIANTS`
    pub fn new(index: u8) -> Option<Self> {
        (index < APPLE_VARIANTS).then_some(Self(index))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..APPLE_VARIANTS))
    }

    pub fn index(&self) -> u8 {
        self.0
    }
}

/// One layer of a tile's texture stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    Grass,
    /// Snake head, drawn facing its direction of travel
    Snake(Direction),
    Apple(AppleVariant),
}

impl Texture {
    pub fn is_snake(&self) -> bool {
        matches!(self, Texture::Snake(_))
    }

    pub fn is_apple(&self) -> bool {
        matches!(self, Texture::Apple(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_variant_bounds() {
        assert!(AppleVariant::new(0).is_some());
        assert!(AppleVariant::new(APPLE_VARIANTS - 1).is_some());
        assert!(AppleVariant::new(APPLE_VARIANTS).is_none());
    }

    #[test]
    fn test_random_variant_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(AppleVariant::random(&mut rng).index() < APPLE_VARIANTS);
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Texture::Snake(Direction::Up).is_snake());
        assert!(!Texture::Grass.is_snake());
        let apple = Texture::Apple(AppleVariant::new(3).unwrap());
        assert!(apple.is_apple());
        assert!(!apple.is_snake());
    }
}
