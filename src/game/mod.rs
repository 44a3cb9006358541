//! Core game logic module for Snake
//!
//! This module contains the tile map and the update loop without any I/O or
//! rendering dependencies.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod map;
pub mod point;
pub mod snake;
pub mod state;
pub mod texture;
pub mod tile;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use error::GameError;
pub use map::{TileMap, Viewport};
pub use point::Point;
pub use snake::Snake;
pub use state::{Apple, GameState};
pub use texture::{APPLE_VARIANTS, AppleVariant, Texture};
pub use tile::Tile;
