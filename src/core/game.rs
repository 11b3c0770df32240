//! Seam between the engine loop and a game. The engine owns the terminal and
//! the event pump; a game owns its state and decides what every key means.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// A screenful of interactive game run by [`crate::core::engine::Engine`].
pub trait Game {
    /// Heartbeat interval for animated games; None disables ticking.
    fn tick_rate(&self) -> Option<Duration> {
        None
    }

    /// Called once per elapsed tick when a tick rate is set.
    fn on_tick(&mut self, _dt_ms: u32) {}

    /// Handle one key press.
    fn handle_input(&mut self, event: KeyEvent);

    /// Draw the current state.
    fn render(&self, frame: &mut Frame);

    /// True once the game wants control handed back to the caller.
    fn finished(&self) -> bool;
}
