use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        Event, EventStream, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};

use super::clock::TickClock;
use crate::game::{GameConfig, GameEngine, GameState, GameStatus};
use crate::input::{InputHandler, InputMapper, KeyAction, KeyboardState};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Undoes terminal setup when restored explicitly or when dropped, so an
/// early return during setup still leaves raw mode
struct TerminalGuard {
    active: bool,
    enhanced: bool,
}

impl TerminalGuard {
    /// Call right after raw mode is enabled
    fn new() -> Self {
        Self {
            active: true,
            enhanced: false,
        }
    }

    /// Run every restore step, then report the first failure
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stderr = stderr();
        let keyboard = if self.enhanced {
            execute!(stderr, PopKeyboardEnhancementFlags)
        } else {
            Ok(())
        };
        let raw_mode = disable_raw_mode();
        let screen = execute!(stderr, LeaveAlternateScreen, Show);

        keyboard.and(raw_mode).and(screen)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {err}");
        }
    }
}

/// How the last game stood when the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub score: u32,
    pub length: usize,
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    keyboard: KeyboardState,
    clock: TickClock,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let clock = TickClock::new(config.tick_interval());
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            keyboard: KeyboardState::new(false),
            clock,
            should_quit: false,
        }
    }

    /// Play until the game ends or the player quits
    pub async fn run(&mut self) -> Result<GameSummary> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = TerminalGuard::new();
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        // Key releases are only reported with keyboard enhancement
        let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
        if enhanced {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable keyboard enhancement")?;
            guard.enhanced = true;
        } else {
            warn!("terminal does not report key releases, treating presses as one-frame holds");
        }
        self.keyboard = KeyboardState::new(enhanced);

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop, then restore the terminal whatever the outcome
        let result = self.run_game_loop(&mut terminal).await;
        let restored = guard.restore().context("Failed to restore terminal");

        result?;
        restored?;
        Ok(self.summary())
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.engine.config().frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Input, game tick and render
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    self.frame(now - last_frame);
                    last_frame = now;

                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit || self.state.status.is_terminal() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        let action = self.input_handler.handle_key_event(key);
        if let KeyAction::Steer(_) = action {
            self.keyboard.observe(&key);
            return;
        }

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match action {
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Steer(_) | KeyAction::None => {}
        }
    }

    /// One render frame: resolve held keys, then tick if enough time passed
    fn frame(&mut self, frame_time: Duration) {
        if let Some(direction) = InputMapper::resolve(&self.keyboard, self.state.direction) {
            self.state.queue_direction(direction);
        }
        self.keyboard.end_frame();
        self.metrics.update();

        if self.clock.advance(frame_time) {
            self.update_game();
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.state);

        // Track game over
        if result.terminated() {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        if !self.state.status.is_terminal() {
            self.metrics.on_game_over(self.state.score);
        }
        info!("restarting, previous score {}", self.state.score);

        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.clock.reset();
        self.keyboard.clear();
    }

    fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.state.status,
            score: self.state.score,
            length: self.state.snake().len(),
        }
    }
}
