use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::layout::TileLayout;
use crate::game::{self, GameState, Texture};
use crate::metrics::GameMetrics;

const APPLE_COLORS: [Color; game::APPLE_VARIANTS as usize] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::LightYellow,
    Color::LightGreen,
    Color::Magenta,
    Color::LightMagenta,
    Color::Rgb(255, 140, 0),
];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Split the frame into header, board and footer
    fn split(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Cells available for tiles once the board border is drawn
    pub fn board_area(area: Rect) -> Rect {
        let [_, board, _] = Self::split(area);
        Self::board_block().inner(board)
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let [header, board, footer] = Self::split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), header);
        frame.render_widget(self.render_board(state), board);
        frame.render_widget(self.render_controls(), footer);
    }

    fn board_block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ")
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let layout = TileLayout::new(state.zoom);
        let viewport = state.viewport();
        let mut lines = Vec::new();

        for row in state.map.tiles().chunks(viewport.columns.max(1) as usize) {
            let spans: Vec<Span> = row
                .iter()
                .map(|tile| texture_span(tile.top_texture(), layout.cell_width))
                .collect();
            let line = Line::from(spans);
            for _ in 0..layout.cell_height {
                lines.push(line.clone());
            }
        }

        Paragraph::new(lines).block(Self::board_block())
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", state.interval_ms), value),
            Span::raw("    "),
            Span::styled("Zoom: ", label),
            Span::styled(format!("x{:.1}", state.zoom), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" or wheel to zoom | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph and colour for the top layer of a tile
fn texture_span(texture: Option<Texture>, width: u16) -> Span<'static> {
    let (glyph, style) = match texture {
        None => (' ', Style::default()),
        Some(Texture::Grass) => ('·', Style::default().fg(Color::Green)),
        Some(Texture::Snake(direction)) => {
            let glyph = match direction {
                game::Direction::Up => '▲',
                game::Direction::Down => '▼',
                game::Direction::Left => '◀',
                game::Direction::Right => '▶',
            };
            (
                glyph,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        }
        Some(Texture::Apple(variant)) => (
            '●',
            Style::default()
                .fg(APPLE_COLORS[usize::from(variant.index())])
                .add_modifier(Modifier::BOLD),
        ),
    };

    let mut cell = String::with_capacity(usize::from(width) * 3);
    cell.push(glyph);
    cell.extend(std::iter::repeat_n(' ', usize::from(width).saturating_sub(1)));
    Span::styled(cell, style)
}
