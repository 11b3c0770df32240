use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::DefaultTerminal;

use crate::core::game::Game;

/// Drives one [`Game`] on the shared terminal until it reports finished.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw/input/tick loop. Returns the finished game so the caller can read
    /// its end state.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.game.render(f))?;

            if self.game.finished() {
                return Ok(self.game);
            }

            // Waiting on the event poll doubles as the frame pacing: games
            // without ticks still get a short wake-up so resize/redraw stays
            // responsive.
            let tick_rate = self.game.tick_rate();
            let wait = tick_rate.unwrap_or(Duration::from_millis(16));

            if crossterm::event::poll(wait)? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    self.game.handle_input(key);
                }
            }

            if tick_rate.is_some() {
                let dt = last_tick.elapsed().as_millis() as u32;
                last_tick = Instant::now();
                self.game.on_tick(dt);
            }
        }
    }
}
