use rand::Rng;
use serde::{Deserialize, Serialize};

/// Marker for a letter position not yet revealed.
pub const HIDDEN: char = '_';
/// Marker for the one randomly designated super blank position.
pub const SUPER_BLANK: char = '~';

/// Default life count, one per gallows stage.
pub const MAX_LIVES: u32 = 6;
/// One slot per letter of the alphabet; guesses beyond this are rejected.
pub const MAX_GUESSED: usize = 26;

/// Result of a single guess applied through [`GameState::apply_guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Non-alphabetic input, a repeat, or guess history already full. No state change.
    Rejected,
    /// Letter is in the word; matching positions are now revealed.
    Hit,
    /// Letter is in the word and uncovered the super blank. The caller should
    /// run the power-up resolver exactly once.
    SuperBlank,
    /// Letter is not in the word; the shield absorbed the miss.
    ShieldAbsorbed,
    /// Letter is not in the word; one life lost.
    LifeLost,
}

/// State of one hangman round. Owned by the active session and passed
/// explicitly to every operation; a new round gets a fresh value rather than
/// patching this one in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    word: String,
    revealed: Vec<char>,
    guessed: Vec<char>,
    lives: u32,
    shield_active: bool,
    super_blank_pos: Option<usize>,
    category: String,
}

impl GameState {
    /// Start a round from a secret word. The word is lowercased; letters are
    /// masked with `'_'`, everything else (spaces) shows through. One hidden
    /// position is promoted to the super blank, chosen uniformly; a word with
    /// no hidden positions gets none and starts already won.
    pub fn new(category: &str, word: &str, lives: u32, rng: &mut impl Rng) -> Self {
        let word = word.to_lowercase();
        let mut revealed: Vec<char> = word
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { HIDDEN } else { c })
            .collect();

        let hidden: Vec<usize> = revealed
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == HIDDEN)
            .map(|(i, _)| i)
            .collect();

        let super_blank_pos = if hidden.is_empty() {
            None
        } else {
            Some(hidden[rng.random_range(0..hidden.len())])
        };
        if let Some(pos) = super_blank_pos {
            revealed[pos] = SUPER_BLANK;
        }

        Self {
            word,
            revealed,
            guessed: Vec::new(),
            lives,
            shield_active: false,
            super_blank_pos,
            category: category.to_string(),
        }
    }

    /// Whether `guess` is worth processing: alphabetic, not yet tried, and
    /// the guess history still has room. Pure; never mutates.
    pub fn validate_guess(&self, guess: char) -> bool {
        if !guess.is_ascii_alphabetic() {
            return false;
        }
        if self.guessed.len() >= MAX_GUESSED {
            return false;
        }
        !self.guessed.contains(&guess.to_ascii_lowercase())
    }

    /// Apply a guess to the board. Returns true iff the guess uncovered the
    /// super blank. Callers using this directly must append to the guess
    /// history themselves; [`GameState::apply_guess`] does both.
    pub fn process_guess(&mut self, guess: char) -> bool {
        let guess = guess.to_ascii_lowercase();

        if self.word.contains(guess) {
            let mut hit_super = false;
            for (i, c) in self.word.chars().enumerate() {
                if c == guess {
                    self.revealed[i] = c;
                    if self.super_blank_pos == Some(i) {
                        // super blank is used up
                        self.super_blank_pos = None;
                        hit_super = true;
                    }
                }
            }
            return hit_super;
        }

        if self.shield_active {
            self.shield_active = false;
        } else {
            self.lives = self.lives.saturating_sub(1);
        }
        false
    }

    /// Validate, process, and record a guess in one step.
    pub fn apply_guess(&mut self, guess: char) -> GuessOutcome {
        if !self.validate_guess(guess) {
            return GuessOutcome::Rejected;
        }
        let guess = guess.to_ascii_lowercase();
        let in_word = self.word.contains(guess);
        let had_shield = self.shield_active;

        let hit_super = self.process_guess(guess);
        self.guessed.push(guess);

        if hit_super {
            GuessOutcome::SuperBlank
        } else if in_word {
            GuessOutcome::Hit
        } else if had_shield {
            GuessOutcome::ShieldAbsorbed
        } else {
            GuessOutcome::LifeLost
        }
    }

    /// Won once nothing is masked. An unconsumed `'~'` still blocks the win
    /// until its letter is guessed through normal play.
    pub fn is_won(&self) -> bool {
        !self
            .revealed
            .iter()
            .any(|&c| c == HIDDEN || c == SUPER_BLANK)
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.lives == 0
    }

    // ---- power-up effects ----

    /// Reveal one random still-hidden position. Returns the letter shown, or
    /// None when nothing is left to reveal.
    pub fn reveal_random_hidden(&mut self, rng: &mut impl Rng) -> Option<char> {
        let hidden: Vec<usize> = self
            .revealed
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == HIDDEN)
            .map(|(i, _)| i)
            .collect();
        if hidden.is_empty() {
            return None;
        }
        let pos = hidden[rng.random_range(0..hidden.len())];
        let letter = self.word.chars().nth(pos)?;
        self.revealed[pos] = letter;
        Some(letter)
    }

    /// Reveal every vowel position. Returns how many were newly shown.
    pub fn reveal_vowels(&mut self) -> usize {
        let mut shown = 0;
        for (i, c) in self.word.chars().enumerate() {
            if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') && self.revealed[i] != c {
                self.revealed[i] = c;
                shown += 1;
            }
        }
        shown
    }

    pub fn grant_life(&mut self) {
        self.lives += 1;
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Arm the shield. Idempotent; a second activation does not toggle it off.
    pub fn raise_shield(&mut self) {
        self.shield_active = true;
    }

    // ---- read-only views for display ----

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn shield_active(&self) -> bool {
        self.shield_active
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn super_blank_index(state: &GameState) -> Option<usize> {
        state.revealed().iter().position(|&c| c == SUPER_BLANK)
    }

    #[test]
    fn init_masks_letters_and_passes_spaces() {
        let state = GameState::new("countries", "New Zealand", 6, &mut rng());
        assert_eq!(state.word(), "new zealand");
        assert_eq!(state.revealed().len(), state.word().len());
        for (i, c) in state.word().chars().enumerate() {
            let shown = state.revealed()[i];
            if c == ' ' {
                assert_eq!(shown, ' ');
            } else {
                assert!(shown == HIDDEN || shown == SUPER_BLANK);
            }
        }
        assert_eq!(state.lives(), 6);
        assert!(state.guessed().is_empty());
        assert!(!state.shield_active());
    }

    #[test]
    fn init_places_exactly_one_super_blank() {
        for seed in 0..50 {
            let mut r = StdRng::seed_from_u64(seed);
            let state = GameState::new("fruits", "banana", 6, &mut r);
            let count = state
                .revealed()
                .iter()
                .filter(|&&c| c == SUPER_BLANK)
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn degenerate_word_is_already_won() {
        let state = GameState::new("none", "", 6, &mut rng());
        assert!(state.is_won());
        assert!(state.is_over());

        let spaces = GameState::new("none", "   ", 6, &mut rng());
        assert!(spaces.is_won());
    }

    #[test]
    fn validate_rejects_non_alpha_and_repeats() {
        let mut state = GameState::new("animals", "cat", 6, &mut rng());
        assert!(!state.validate_guess('1'));
        assert!(!state.validate_guess(' '));
        assert!(state.validate_guess('c'));
        assert!(state.validate_guess('C'));

        assert_ne!(state.apply_guess('c'), GuessOutcome::Rejected);
        assert!(!state.validate_guess('c'));
        assert!(!state.validate_guess('C'));
        assert_eq!(state.apply_guess('c'), GuessOutcome::Rejected);
    }

    #[test]
    fn validate_rejects_once_history_is_full() {
        let mut state = GameState::new("animals", "cat", 30, &mut rng());
        for c in 'a'..='z' {
            state.apply_guess(c);
        }
        assert_eq!(state.guessed().len(), MAX_GUESSED);
        assert!(!state.validate_guess('a'));
    }

    #[test]
    fn hit_reveals_all_occurrences() {
        let mut state = GameState::new("fruits", "banana", 9, &mut rng());
        state.apply_guess('a');
        for (i, c) in state.word().chars().enumerate() {
            if c == 'a' {
                assert_eq!(state.revealed()[i], 'a');
            }
        }
        assert_eq!(state.lives(), 9);
    }

    #[test]
    fn miss_without_shield_costs_one_life() {
        let mut state = GameState::new("animals", "cat", 3, &mut rng());
        assert_eq!(state.apply_guess('z'), GuessOutcome::LifeLost);
        assert_eq!(state.lives(), 2);
        assert!(!state.shield_active());
    }

    #[test]
    fn miss_with_shield_consumes_shield_only() {
        let mut state = GameState::new("animals", "cat", 3, &mut rng());
        state.raise_shield();
        assert_eq!(state.apply_guess('z'), GuessOutcome::ShieldAbsorbed);
        assert_eq!(state.lives(), 3);
        assert!(!state.shield_active());
    }

    #[test]
    fn super_blank_fires_exactly_once() {
        let mut state = GameState::new("animals", "cat", 6, &mut rng());
        let pos = super_blank_index(&state).unwrap();
        let super_letter = state.word().chars().nth(pos).unwrap();

        let mut triggers = 0;
        for c in ['c', 'a', 't'] {
            if state.apply_guess(c) == GuessOutcome::SuperBlank {
                triggers += 1;
                assert_eq!(c, super_letter);
            }
        }
        assert_eq!(triggers, 1);
        assert!(super_blank_index(&state).is_none());
    }

    #[test]
    fn unconsumed_super_blank_blocks_win() {
        let mut state = GameState::new("planets", "mars", 6, &mut rng());
        let pos = super_blank_index(&state).unwrap();
        let super_letter = state.word().chars().nth(pos).unwrap();
        for c in ['m', 'a', 'r', 's'] {
            if c != super_letter {
                state.apply_guess(c);
            }
        }
        assert!(!state.is_won());
        state.apply_guess(super_letter);
        assert!(state.is_won());
    }

    #[test]
    fn loss_scenario_one_life() {
        let mut state = GameState::new("animals", "cat", 1, &mut rng());
        state.apply_guess('c');
        assert!(!state.is_won());
        assert!(!state.is_over());
        assert_eq!(state.apply_guess('z'), GuessOutcome::LifeLost);
        assert_eq!(state.lives(), 0);
        assert!(state.is_over());
        assert!(!state.is_won());
    }

    #[test]
    fn win_scenario_full_reveal() {
        let mut state = GameState::new("animals", "dog", 5, &mut rng());
        state.apply_guess('d');
        state.apply_guess('o');
        assert!(!state.is_won());
        state.apply_guess('g');
        let shown: String = state.revealed().iter().collect();
        assert_eq!(shown, "dog");
        assert!(state.is_won());
        assert!(state.is_over());
    }

    #[test]
    fn revelation_is_monotonic_and_consistent() {
        // every reachable reveal cell is '_' / '~' / the word's own letter,
        // and revealed cells never flip back
        let mut state = GameState::new("countries", "south africa", 26, &mut rng());
        let mut prior = state.revealed().to_vec();
        for c in 'a'..='z' {
            state.apply_guess(c);
            for (i, w) in state.word().chars().enumerate() {
                let shown = state.revealed()[i];
                if w.is_ascii_alphabetic() {
                    assert!(shown == HIDDEN || shown == SUPER_BLANK || shown == w);
                } else {
                    assert_eq!(shown, w);
                }
                let was = prior[i];
                if was != HIDDEN && was != SUPER_BLANK {
                    assert_eq!(shown, was);
                }
            }
            prior = state.revealed().to_vec();
        }
        assert!(state.is_won());
    }

    #[test]
    fn reveal_random_hidden_skips_when_nothing_left() {
        let mut state = GameState::new("animals", "cat", 6, &mut rng());
        for c in ['c', 'a', 't'] {
            state.apply_guess(c);
        }
        assert_eq!(state.reveal_random_hidden(&mut rng()), None);
    }

    #[test]
    fn reveal_vowels_counts_newly_shown() {
        let mut state = GameState::new("fruits", "orange", 6, &mut rng());
        let shown = state.reveal_vowels();
        // o, a, e -- one of them may have been the super blank cell, which
        // still counts because the marker cell changes to the letter
        assert_eq!(shown, 3);
        for (i, c) in state.word().chars().enumerate() {
            if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
                assert_eq!(state.revealed()[i], c);
            }
        }
        assert_eq!(state.reveal_vowels(), 0);
    }
}
