use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Largest accepted tile edge, keeps pixel sizes well inside `i32`
pub const MAX_TILE_SIZE: i32 = 4096;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of a square tile in pixels
    pub tile_size: i32,
    /// Where the snake appears when a game starts
    pub start_position: Point,

    // Speed progression
    /// Tick interval of a fresh game
    pub initial_interval_ms: u64,
    /// The interval never drops below this
    pub min_interval_ms: u64,
    /// The n-th apple shortens the interval by n times this
    pub speedup_step_ms: u64,

    // View
    /// Zoom change per wheel notch or key press
    pub zoom_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 32,
            start_position: Point::new(32, 32),
            initial_interval_ms: 400,
            min_interval_ms: 200,
            speedup_step_ms: 3,
            zoom_step: 0.1,
            min_zoom: 0.5,
            max_zoom: 3.0,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings the game can't run with
    pub fn validate(&self) -> Result<()> {
        if self.tile_size <= 0 || self.tile_size > MAX_TILE_SIZE {
            bail!(
                "tile_size must be between 1 and {MAX_TILE_SIZE}, got {}",
                self.tile_size
            );
        }
        if self.min_interval_ms == 0 {
            bail!("min_interval_ms must be positive");
        }
        if self.initial_interval_ms < self.min_interval_ms {
            bail!(
                "initial_interval_ms ({}) is below min_interval_ms ({})",
                self.initial_interval_ms,
                self.min_interval_ms
            );
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            bail!(
                "zoom range {}..={} is empty or not positive",
                self.min_zoom,
                self.max_zoom
            );
        }
        Ok(())
    }

    /// Interval after `apples_eaten` apples, starting from `current`.
    ///
    /// Each apple shortens the interval by `apples_eaten * speedup_step_ms`.
    /// A step that would cross the floor is skipped entirely.
    pub fn next_interval(&self, current: u64, apples_eaten: u32) -> u64 {
        let cut = u64::from(apples_eaten) * self.speedup_step_ms;
        match current.checked_sub(cut) {
            Some(next) if next >= self.min_interval_ms => next,
            _ => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.start_position, Point::new(32, 32));
        assert_eq!(config.initial_interval_ms, 400);
        assert_eq!(config.min_interval_ms, 200);
    }

    #[test]
    fn test_speedup_accumulates() {
        let config = GameConfig::default();
        let mut interval = config.initial_interval_ms;
        interval = config.next_interval(interval, 1);
        assert_eq!(interval, 397);
        interval = config.next_interval(interval, 2);
        assert_eq!(interval, 391);
        interval = config.next_interval(interval, 3);
        assert_eq!(interval, 382);
    }

    #[test]
    fn test_speedup_respects_floor() {
        let config = GameConfig::default();
        assert_eq!(config.next_interval(205, 1), 202);
        assert_eq!(config.next_interval(205, 2), 205);
        assert_eq!(config.next_interval(200, 1), 200);
        assert_eq!(config.next_interval(10, 100), 10);

        let mut interval = config.initial_interval_ms;
        for eaten in 1..=100 {
            interval = config.next_interval(interval, eaten);
            assert!(interval >= config.min_interval_ms);
        }
    }

    #[test]
    fn test_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{ "tile_size": 16 }"#).unwrap();
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.initial_interval_ms, 400);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tile_size() {
        for tile_size in [0, -32, MAX_TILE_SIZE + 1, i32::MAX] {
            let config = GameConfig {
                tile_size,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err(), "tile_size {tile_size} accepted");
        }
    }

    #[test]
    fn test_rejects_zero_floor() {
        let config = GameConfig {
            min_interval_ms: 0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_interval_ms"));
    }

    #[test]
    fn test_rejects_start_below_floor() {
        let config = GameConfig {
            initial_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_interval_ms: 199,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_zoom() {
        let config = GameConfig {
            min_zoom: 2.0,
            max_zoom: 1.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("tile_snake_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "min_interval_ms": 0 }"#).unwrap();

        let err = GameConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file(Path::new("/nonexistent/snake.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
