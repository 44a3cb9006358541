//! Game errors

use thiserror::Error;

use super::point::Point;

/// Errors that can occur while updating the game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Viewport {width}x{height} holds {tiles} tile(s), need at least 2")]
    ViewportTooSmall { width: i32, height: i32, tiles: usize },

    #[error("No free tile to place an apple on")]
    NoFreeTile,

    #[error("No tile at {0} to move the snake to")]
    MissingTile(Point),
}
