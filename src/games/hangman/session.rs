use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tracing::info;

use crate::core::game::Game;
use crate::core::words::WordStore;

use super::game::{GameState, GuessOutcome, MAX_LIVES};
use super::power::SlotGrid;
use super::renderer;

/// Where one round currently is. The power grid lives inside the phase so it
/// can only ever be resolved once: leaving `PickingPower` drops it.
#[derive(Debug, Clone)]
pub enum Phase {
    Playing,
    PickingPower(SlotGrid),
    Paused,
    Over { won: bool },
}

/// One player-facing hangman session: owns the round's [`GameState`]
/// explicitly, plus the word store so Enter can start a fresh round after a
/// game over. Implements [`Game`] for the engine loop.
pub struct HangmanSession {
    state: GameState,
    phase: Phase,
    banner: String,
    words: WordStore,
    quit_to_menu: bool,
}

impl HangmanSession {
    pub fn new(words: WordStore) -> Self {
        let mut rng = rand::rng();
        let (category, word) = words.pick(&mut rng);
        info!(%category, %word, "starting round");
        let state = GameState::new(&category, &word, MAX_LIVES, &mut rng);
        Self {
            state,
            phase: Phase::Playing,
            banner: "Welcome to Hangman! Guess a letter.".to_string(),
            words,
            quit_to_menu: false,
        }
    }

    /// Replace the round wholesale; stale shields or super blanks never carry
    /// over.
    fn new_round(&mut self) {
        let mut rng = rand::rng();
        let (category, word) = self.words.pick(&mut rng);
        info!(%category, %word, "starting round");
        self.state = GameState::new(&category, &word, MAX_LIVES, &mut rng);
        self.phase = Phase::Playing;
        self.banner = "New round! Guess a letter.".to_string();
    }

    fn guess(&mut self, letter: char) {
        match self.state.apply_guess(letter) {
            GuessOutcome::Rejected => {
                self.banner = format!("Letter '{letter}' already guessed.");
                return;
            }
            GuessOutcome::Hit => {
                self.banner = format!("Good guess! '{letter}' is in the word.");
            }
            GuessOutcome::SuperBlank => {
                info!(%letter, "super blank hit");
                self.banner = "Super blank found! Choose a box (1-9).".to_string();
                self.phase = Phase::PickingPower(SlotGrid::roll(&mut rand::rng()));
                // the pick happens before any game-over handling, so the
                // win/loss check waits until the box is opened
                return;
            }
            GuessOutcome::ShieldAbsorbed => {
                self.banner = format!("'{letter}' is not in the word, but the shield took it!");
            }
            GuessOutcome::LifeLost => {
                self.banner = format!("Sorry, '{letter}' is not in the word.");
            }
        }
        self.check_over();
    }

    fn pick_box(&mut self, choice: usize) {
        let Phase::PickingPower(grid) = std::mem::replace(&mut self.phase, Phase::Playing)
        else {
            return;
        };
        let outcome = grid.resolve(&mut self.state, choice, &mut rand::rng());
        info!(?outcome, choice, "power slot resolved");
        self.banner = outcome.describe();
        self.check_over();
    }

    fn check_over(&mut self) {
        if !self.state.is_over() {
            return;
        }
        let won = self.state.is_won();
        info!(won, word = self.state.word(), "round over");
        self.banner = if won {
            "You won!".to_string()
        } else {
            format!("Game over! The word was '{}'.", self.state.word())
        };
        self.phase = Phase::Over { won };
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }
}

impl Game for HangmanSession {
    fn handle_input(&mut self, event: KeyEvent) {
        match self.phase {
            Phase::Over { .. } => match event.code {
                KeyCode::Enter => self.new_round(),
                KeyCode::Esc => self.quit_to_menu = true,
                _ => {}
            },
            Phase::Paused => match event.code {
                KeyCode::Esc => self.phase = Phase::Playing,
                KeyCode::Enter => self.quit_to_menu = true,
                _ => {}
            },
            Phase::PickingPower(_) => {
                if let KeyCode::Char(c) = event.code {
                    if let Some(d) = c.to_digit(10) {
                        if d >= 1 {
                            self.pick_box(d as usize);
                        }
                    }
                }
            }
            Phase::Playing => match event.code {
                KeyCode::Esc => self.phase = Phase::Paused,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
                _ => {}
            },
        }
    }

    fn render(&self, frame: &mut Frame) {
        renderer::draw(frame, self);
    }

    fn finished(&self) -> bool {
        self.quit_to_menu
    }
}
