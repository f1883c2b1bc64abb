use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, Write, stderr};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::interval;

use crate::game::{Command, GameConfig, GameEngine, GameEvent};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// The interactive play loop: a fixed-period timer drives `tick()`, key
/// events are queued as engine commands, and a render timer draws the
/// engine snapshot. Game events come back over a channel so audio cues
/// and metrics stay out of the core.
pub struct App {
    engine: GameEngine,
    events: UnboundedReceiver<GameEvent>,
    tick_interval: Duration,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config).context("Failed to set up the game")?;

        let (tx, rx) = mpsc::unbounded_channel();
        engine.subscribe(Box::new(move |event| {
            let _ = tx.send(event);
        }));

        Ok(Self {
            engine,
            events: rx,
            tick_interval,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
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

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

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
                    self.advance()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine.snapshot(), &self.metrics);
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
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(command) => {
                    if command == Command::Reset {
                        self.metrics.on_game_start();
                    }
                    self.engine.queue(command);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Advance one tick and drain the events it produced
    fn advance(&mut self) -> Result<()> {
        self.engine.tick().context("Game tick failed")?;

        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::FoodEaten { bonus } => self.metrics.on_food_eaten(bonus),
                GameEvent::BonusAppeared => {}
                GameEvent::GameOver => self.metrics.on_game_over(self.engine.score()),
            }
            chime(event);
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Terminal-bell sound cue, one per event. Best effort only.
fn chime(_event: GameEvent) {
    let mut out = stderr();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameStatus};

    #[test]
    fn test_app_initialization() {
        let app = App::new(GameConfig::default()).unwrap();
        assert_eq!(app.engine.status(), GameStatus::Running);
        assert_eq!(app.engine.score(), 0);
    }

    #[test]
    fn test_zero_bonus_period_is_an_error_not_a_panic() {
        let config = GameConfig {
            bonus_period: 0,
            ..Default::default()
        };
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_degenerate_grid_is_an_error_not_a_panic() {
        for size in [0, 1] {
            let config = GameConfig {
                grid_size: size,
                ..Default::default()
            };
            assert!(App::new(config).is_err());
        }
    }

    #[test]
    fn test_engine_events_reach_the_app_channel() {
        let mut app = App::new(GameConfig::default()).unwrap();

        // Force a wall hit: the game-over event must arrive over the channel
        app.engine.set_direction(Direction::Up);
        for _ in 0..GameConfig::default().grid_size {
            app.engine.tick().unwrap();
        }
        assert_eq!(app.engine.status(), GameStatus::GameOver);
        assert!(matches!(app.events.try_recv(), Ok(_)));
    }
}
