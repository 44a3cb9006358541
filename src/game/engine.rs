use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    error::GameError,
    map::{TileMap, Viewport},
    point::Point,
    snake::Snake,
    state::{Apple, GameState},
    texture::{AppleVariant, Texture},
};

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Score after the step
    pub score: u32,
    /// Tick interval to use from now on
    pub interval_ms: u64,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose apple placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game on a `width` x `height` pixel surface
    pub fn reset(&mut self, width: i32, height: i32) -> Result<GameState, GameError> {
        let viewport = self.viewport_for(width, height)?;
        let mut map = TileMap::build(viewport);

        let snake = Snake::new(viewport.snap(self.config.start_position), Direction::Right);
        if let Some(tile) = map.tile_mut(snake.pos) {
            tile.add_texture(snake.texture());
        }

        let mut state = GameState::new(map, snake, self.config.initial_interval_ms);
        self.make_apple(&mut state)?;

        info!(
            columns = viewport.columns,
            rows = viewport.rows,
            snake = %state.snake.pos,
            "New game"
        );
        Ok(state)
    }

    /// Rebuild the tiles for a new surface size.
    ///
    /// The snake keeps its place, or moves to the nearest tile if its place
    /// fell off the map. The apple keeps its place and look if it is still
    /// reachable, otherwise it is moved to a random free tile.
    pub fn resize(&mut self, state: &mut GameState, width: i32, height: i32) -> Result<(), GameError> {
        let viewport = self.viewport_for(width, height)?;
        let mut map = TileMap::build(viewport);

        if !viewport.contains(state.snake.pos) {
            state.snake.pos = viewport.snap(state.snake.pos);
        }
        if let Some(tile) = map.tile_mut(state.snake.pos) {
            tile.add_texture(state.snake.texture());
        }

        let old_apple = state.apple.take();
        state.map = map;

        match old_apple {
            Some(apple) if state.place_apple(apple) => {}
            Some(apple) => {
                let pos = self.free_position(&state.map, state.snake.pos)?;
                debug!(from = %apple.pos, to = %pos, "Apple relocated after resize");
                state.place_apple(Apple { pos, ..apple });
            }
            None => self.make_apple(state)?,
        }

        info!(
            width,
            height,
            columns = viewport.columns,
            rows = viewport.rows,
            "Resized"
        );
        Ok(())
    }

    /// Turn the snake and swap its texture to match
    pub fn set_direction(&self, state: &mut GameState, direction: Direction) {
        state.snake.direction = direction;
        if let Some(tile) = state.map.tile_mut(state.snake.pos) {
            tile.take_texture(Texture::is_snake);
            tile.add_texture(state.snake.texture());
        }
    }

    /// Advance the game by one tick
    pub fn step(&mut self, state: &mut GameState, action: Action) -> Result<StepResult, GameError> {
        let direction = match action {
            Action::Move(direction) => direction,
            Action::Continue => state.snake.direction,
        };
        let next = Snake::new(state.snake.pos, direction).next_position(state.viewport());
        if !state.map.contains(next) {
            warn!(pos = %next, "Failed to find a tile to move the snake on");
            return Err(GameError::MissingTile(next));
        }
        if direction != state.snake.direction {
            self.set_direction(state, direction);
        }

        let ate_apple = state.apple.is_some_and(|apple| apple.pos == next);
        if ate_apple {
            state.clear_apple();
            state.score += 1;

            let interval = self.config.next_interval(state.interval_ms, state.score);
            if interval != state.interval_ms {
                debug!(from = state.interval_ms, to = interval, "Speed up");
            }
            state.interval_ms = interval;
        }

        let texture = state
            .map
            .tile_mut(state.snake.pos)
            .and_then(|tile| tile.take_texture(Texture::is_snake))
            .unwrap_or_else(|| state.snake.texture());
        if let Some(tile) = state.map.tile_mut(next) {
            tile.add_texture(texture);
        }
        state.snake.pos = next;
        state.steps += 1;

        if ate_apple {
            info!(score = state.score, interval_ms = state.interval_ms, "Apple eaten");
            self.make_apple(state)?;
        }

        Ok(StepResult {
            ate_apple,
            score: state.score,
            interval_ms: state.interval_ms,
        })
    }

    /// Drop a random apple on a random tile that does not hold the snake
    pub fn make_apple(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let variant = AppleVariant::random(&mut self.rng);
        let pos = self.free_position(&state.map, state.snake.pos)?;
        state.place_apple(Apple { pos, variant });
        debug!(pos = %pos, variant = variant.index(), "Apple placed");
        Ok(())
    }

    /// Change the zoom by `delta`, keeping it within the configured range
    pub fn update_zoom(&self, state: &mut GameState, delta: f32) {
        state.zoom = (state.zoom + delta).clamp(self.config.min_zoom, self.config.max_zoom);
    }

    pub fn zoom_in(&self, state: &mut GameState) {
        self.update_zoom(state, self.config.zoom_step);
    }

    pub fn zoom_out(&self, state: &mut GameState) {
        self.update_zoom(state, -self.config.zoom_step);
    }

    fn viewport_for(&self, width: i32, height: i32) -> Result<Viewport, GameError> {
        let viewport = Viewport::new(width, height, self.config.tile_size);
        if viewport.tile_count() < 2 {
            return Err(GameError::ViewportTooSmall {
                width,
                height,
                tiles: viewport.tile_count(),
            });
        }
        Ok(viewport)
    }

    /// Rejection-sample a tile origin other than `occupied`
    fn free_position(&mut self, map: &TileMap, occupied: Point) -> Result<Point, GameError> {
        // `viewport_for` guarantees two tiles, so the loop below terminates
        if map.len() < 2 {
            return Err(GameError::NoFreeTile);
        }
        loop {
            let pos = map
                .random_position(&mut self.rng)
                .ok_or(GameError::NoFreeTile)?;
            if pos != occupied {
                return Ok(pos);
            }
        }
    }
}
