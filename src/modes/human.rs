use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::time::{interval, interval_at, Instant, Interval, MissedTickBehavior};

use crate::audio::{SoundEffect, SoundSink};
use crate::config::AppConfig;
use crate::game::{Action, Direction, GameEngine, GameState, Phase, Speed};
use crate::input::{InputHandler, KeyAction, SwipeTracker};
use crate::metrics::GameMetrics;
use crate::persistence::HighScoreStore;
use crate::render::{Hud, Renderer};

const MSG_READY: &str = "Press an arrow key to begin.";
const MSG_STARTED: &str = "Collect the food and avoid walls.";
const MSG_ATE: &str = "Nice! Keep going.";
const MSG_HIGH_SCORE: &str = "New high score!";
const MSG_PAUSED: &str = "Paused.";
const MSG_RESUMED: &str = "Back in the game!";
const MSG_GAME_OVER: &str = "Game over. Press R to play again.";
const MSG_BOARD_FULL: &str = "Board cleared! Press R to play again.";

/// Render at 30 FPS (33ms per frame)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    sound: Box<dyn SoundSink>,
    store: HighScoreStore,
    status: String,
    /// Whether this round already rang the high-score bell
    beat_high_score: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: AppConfig, sound: Box<dyn SoundSink>) -> Self {
        let store = HighScoreStore::new(config.high_score_file.clone());
        let high_score = store.load();

        let mut engine = GameEngine::new(config.game);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::with_high_score(high_score),
            renderer: Renderer::new(config.theme),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            sound,
            store,
            status: MSG_READY.to_string(),
            beat_high_score: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "starting {}x{} game on {} arena",
            self.engine.config().grid_width,
            self.engine.config().grid_height,
            self.engine.config().arena.label()
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session over after {} games, best score {}",
            self.metrics.games_played, self.metrics.high_score
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut speed = self.engine.config().speed;
        let mut tick_timer = game_clock(speed.tick_interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let hud = Hud {
                        high_score: self.metrics.high_score,
                        status: &self.status,
                        speed: self.engine.config().speed,
                        sound_enabled: self.sound.is_enabled(),
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, &hud);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            self.sync_game_clock(&mut speed, &mut tick_timer);
        }

        Ok(())
    }

    /// Rebuild the tick timer after a speed change. The new period starts
    /// counting now, so the next step waits a full tick.
    fn sync_game_clock(&self, speed: &mut Speed, tick_timer: &mut Interval) {
        let current = self.engine.config().speed;
        if current != *speed {
            *speed = current;
            *tick_timer = game_clock(current.tick_interval());
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind == KeyEventKind::Press {
                    let action = self.input_handler.handle_key_event(key);
                    self.handle_key_action(action);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(direction) = self.swipe.handle_mouse_event(mouse) {
                    self.steer(direction);
                }
            }
            _ => {}
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::GameAction(Action::Move(direction)) => self.steer(direction),
            KeyAction::GameAction(Action::Continue) => {
                // No action needed
            }
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::Restart => self.reset_game(),
            KeyAction::ToggleSound => {
                let enabled = self.sound.toggle();
                self.status = format!("Sound {}.", if enabled { "on" } else { "off" });
            }
            KeyAction::CycleArena => {
                let arena = self.engine.config().arena.next();
                self.engine.config_mut().arena = arena;
                self.reset_game();
                self.status = format!("Arena: {}. {}", arena.label(), MSG_READY);
            }
            KeyAction::CycleSpeed => {
                let speed = self.engine.config().speed.next();
                self.engine.config_mut().speed = speed;
                self.status = format!("Speed: {}.", speed.label());
            }
            KeyAction::CycleTheme => {
                let theme = self.renderer.theme().next();
                self.renderer.set_theme(theme);
                self.status = format!("Theme: {}.", theme.label());
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// Sound is cosmetic; a sink that fails is logged and play goes on
    fn play(&mut self, effect: SoundEffect) {
        if let Err(err) = self.sound.play(effect) {
            warn!("{:#}", err);
        }
    }

    fn steer(&mut self, direction: Direction) {
        let was_ready = self.state.phase == Phase::Ready;
        self.engine.steer(&mut self.state, direction);

        if was_ready && self.state.phase == Phase::Running {
            self.status = MSG_STARTED.to_string();
            self.metrics.resume();
            self.play(SoundEffect::Start);
        }
    }

    fn toggle_pause(&mut self) {
        if !self.engine.toggle_pause(&mut self.state) {
            return;
        }

        if self.state.phase == Phase::Paused {
            self.status = MSG_PAUSED.to_string();
            self.metrics.pause();
            self.play(SoundEffect::Pause);
        } else {
            self.status = MSG_RESUMED.to_string();
            self.metrics.resume();
            self.play(SoundEffect::Resume);
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.state, Action::Continue);

        if result.info.ate_food {
            if self.metrics.record_score(self.state.score) {
                match self.store.record(self.state.score) {
                    Ok(true) => {}
                    Ok(false) => debug!(
                        "{} already holds a score of at least {}",
                        self.store.path().display(),
                        self.state.score
                    ),
                    Err(err) => warn!("{:#}", err),
                }
                self.status = MSG_HIGH_SCORE.to_string();
                if !self.beat_high_score {
                    self.beat_high_score = true;
                    self.play(SoundEffect::HighScore);
                } else {
                    self.play(SoundEffect::Eat);
                }
            } else {
                self.status = MSG_ATE.to_string();
                self.play(SoundEffect::Eat);
            }
        }

        // Track game over
        if result.info.collision_type.is_some() || result.info.board_full {
            self.metrics.on_game_over(self.state.score);
            self.status = if result.info.board_full {
                MSG_BOARD_FULL
            } else {
                MSG_GAME_OVER
            }
            .to_string();
            info!(
                "round over: score {}, {} steps, {:?}",
                self.state.score, self.state.steps, result.info.collision_type
            );
            self.play(SoundEffect::GameOver);
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.status = MSG_READY.to_string();
        self.beat_high_score = false;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// A tick timer whose first tick is one full period away and that drops
/// ticks missed while the loop was busy
fn game_clock(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
