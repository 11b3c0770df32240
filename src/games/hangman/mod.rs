/// Hangman with power-ups: round state, the power resolver, and the
/// session/renderer pair that puts them on screen.
pub mod game;
pub mod power;
pub mod renderer;
pub mod session;

pub use game::{GameState, GuessOutcome};
pub use power::{PowerKind, PowerOutcome, SlotGrid};
pub use session::HangmanSession;
