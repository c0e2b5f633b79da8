use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::{Palette, Theme};
use crate::game::{GameState, Phase, Position, Speed};
use crate::metrics::GameMetrics;

/// What occupies a grid cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Head,
    Body,
    Obstacle,
    Wall,
    Food,
    Empty,
}

/// Session values shown around the board
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    pub high_score: u32,
    pub status: &'a str,
    pub speed: Speed,
    pub sound_enabled: bool,
}

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Classify a cell of the board
    pub fn cell_at(state: &GameState, pos: Position) -> Cell {
        if pos == state.snake.head() {
            Cell::Head
        } else if state.snake.occupies(pos) {
            Cell::Body
        } else if state.arena.has_obstacle_at(pos) {
            Cell::Obstacle
        } else if state.arena.is_wall(pos) {
            Cell::Wall
        } else if pos == state.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics, hud: &Hud) {
        let palette = self.theme.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Status
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics, hud, &palette);
        frame.render_widget(stats, chunks[0]);

        // Board plus its border, two terminal columns per cell
        let board_area = centered(
            chunks[1],
            (state.grid_width * 2 + 2) as u16,
            (state.grid_height + 2) as u16,
        );

        if state.is_over() {
            let game_over = self.render_game_over(state, hud);
            frame.render_widget(game_over, board_area);
        } else {
            let grid = self.render_grid(state, &palette);
            frame.render_widget(grid, board_area);

            if state.phase == Phase::Paused {
                let overlay = centered(board_area, 16, 3);
                frame.render_widget(Clear, overlay);
                frame.render_widget(self.render_paused(&palette), overlay);
            }
        }

        let status = Paragraph::new(Line::from(Span::styled(
            hud.status.to_string(),
            Style::default().fg(palette.accent),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(status, chunks[2]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[3]);
    }

    fn render_grid(&self, state: &GameState, palette: &Palette) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.grid_height);
        let base = Style::default().bg(palette.background);

        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = match Self::cell_at(state, pos) {
                    Cell::Head => Span::styled(
                        "■ ",
                        base.fg(palette.head).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Body => Span::styled("□ ", base.fg(palette.body)),
                    Cell::Obstacle => Span::styled(
                        "◆ ",
                        base.fg(palette.obstacle).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Wall => Span::styled("▓▓", base.fg(palette.wall)),
                    Cell::Food => Span::styled(
                        "● ",
                        base.fg(palette.food).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Empty => Span::styled("· ", base.fg(palette.grid)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(palette.head).bg(palette.background))
                .title(format!(" Snake · {} ", state.arena.preset.label())),
        )
    }

    fn render_stats(
        &self,
        state: &GameState,
        metrics: &GameMetrics,
        hud: &Hud,
        palette: &Palette,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(palette.accent);
        let value = Style::default().fg(Color::White);

        let text = vec![
            Line::from(vec![
                Span::styled("Score: ", label),
                Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
                Span::raw("    "),
                Span::styled("Best: ", label),
                Span::styled(hud.high_score.to_string(), value),
                Span::raw("    "),
                Span::styled("Time: ", label),
                Span::styled(metrics.format_time(), value),
            ]),
            Line::from(vec![
                Span::styled("Speed: ", label),
                Span::styled(hud.speed.label(), value),
                Span::raw("    "),
                Span::styled("Theme: ", label),
                Span::styled(self.theme.label(), value),
                Span::raw("    "),
                Span::styled("Sound: ", label),
                Span::styled(if hud.sound_enabled { "on" } else { "off" }, value),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_paused(&self, palette: &Palette) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    }

    fn render_game_over(&self, state: &GameState, hud: &Hud) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(hud.high_score.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);
        let text = vec![
            Line::from(vec![
                Span::styled("↑↓←→", key),
                Span::raw(" / "),
                Span::styled("WASD", key),
                Span::raw(" / swipe to move | "),
                Span::styled("Space", key),
                Span::raw(" pause | "),
                Span::styled("R", key),
                Span::raw(" restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
            Line::from(vec![
                Span::styled("1", key),
                Span::raw(" arena | "),
                Span::styled("2", key),
                Span::raw(" speed | "),
                Span::styled("3", key),
                Span::raw(" theme | "),
                Span::styled("M", key),
                Span::raw(" sound"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
