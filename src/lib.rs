//! Tile Snake - a tile-map Snake game for the terminal
//!
//! This library provides:
//! - Core game logic: tile map, apple placement, movement and speed-up (game module)
//! - TUI rendering (render module)
//! - Keyboard and mouse input mapping (input module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
