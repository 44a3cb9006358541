use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::{info, warn};

use crate::game::{Action, Direction, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, TileLayout};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Pixel surface the board currently stands for
    surface: (i32, i32),
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode {
    /// Start a game sized for a `columns` x `rows` terminal
    pub fn new(mut engine: GameEngine, columns: u16, rows: u16) -> Result<Self> {
        let surface = Self::surface_for(&engine, columns, rows);
        let state = engine
            .reset(surface.0, surface.1)
            .context("Terminal is too small to start a game")?;

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            surface,
            should_quit: false,
            pending_direction: None,
        })
    }

    fn surface_for(engine: &GameEngine, columns: u16, rows: u16) -> (i32, i32) {
        let board = Renderer::board_area(Rect::new(0, 0, columns, rows));
        TileLayout::surface_size(board, engine.config().tile_size)
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    fn tick_timer(interval_ms: u64) -> Interval {
        // tokio rejects a zero period
        let period = Duration::from_millis(interval_ms.max(1));
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The tick period shrinks as apples are eaten
        let mut tick_ms = self.state.interval_ms;
        let mut tick_timer = Self::tick_timer(tick_ms);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => warn!(error = %err, "Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.state.interval_ms != tick_ms {
                tick_ms = self.state.interval_ms;
                tick_timer = Self::tick_timer(tick_ms);
            }

            if self.should_quit {
                break;
            }
        }

        self.metrics.on_round_end(self.state.score);
        info!(
            score = self.state.score,
            high_score = self.metrics.high_score,
            rounds = self.metrics.rounds_played,
            "Quit"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.input_handler.handle_mouse_event(mouse),
            Event::Resize(columns, rows) => {
                self.resize(columns, rows);
                KeyAction::None
            }
            _ => KeyAction::None,
        };

        match action {
            KeyAction::GameAction(Action::Move(dir)) => {
                self.pending_direction = Some(dir);
            }
            KeyAction::ZoomIn => self.engine.zoom_in(&mut self.state),
            KeyAction::ZoomOut => self.engine.zoom_out(&mut self.state),
            KeyAction::Restart => {
                self.reset_game()?;
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::GameAction(Action::Continue) | KeyAction::None => {}
        }

        Ok(())
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        let surface = Self::surface_for(&self.engine, columns, rows);
        match self.engine.resize(&mut self.state, surface.0, surface.1) {
            Ok(()) => self.surface = surface,
            // Keep the old board until the terminal grows again
            Err(err) => warn!(error = %err, columns, rows, "Ignoring resize"),
        }
    }

    fn update_game(&mut self) {
        let action = self
            .pending_direction
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        match self.engine.step(&mut self.state, action) {
            Ok(result) => self.metrics.on_score(result.score),
            Err(err) => warn!(error = %err, "Step skipped"),
        }
    }

    fn reset_game(&mut self) -> Result<()> {
        self.metrics.on_round_end(self.state.score);
        let (width, height) = self.surface;
        self.state = self
            .engine
            .reset(width, height)
            .context("Failed to restart the game")?;
        self.metrics.on_round_start();
        self.pending_direction = None;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
