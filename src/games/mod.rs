pub mod hangman;

pub use hangman::HangmanSession;
