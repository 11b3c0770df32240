use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::game::GameState;

/// Boxes in the 3x3 pick grid.
pub const SLOT_COUNT: usize = 9;
/// Boxes that actually hold a power each trigger.
pub const FILLED_SLOTS: usize = 3;

/// The five power-up effects a filled slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerKind {
    /// Reveal one random hidden letter.
    RevealLetter,
    /// +1 life.
    ExtraLife,
    /// Reveal every vowel in the word.
    RevealVowels,
    /// Absorb the next wrong guess.
    Shield,
    /// Roll the dice: small chance of a bonus power or a lost life.
    Gamble,
}

impl PowerKind {
    pub const ALL: [PowerKind; 5] = [
        PowerKind::RevealLetter,
        PowerKind::ExtraLife,
        PowerKind::RevealVowels,
        PowerKind::Shield,
        PowerKind::Gamble,
    ];

    /// Kinds the gamble bonus draws from. Gamble is deliberately absent so
    /// the cascade cannot recurse.
    pub const BONUS: [PowerKind; 4] = [
        PowerKind::RevealLetter,
        PowerKind::ExtraLife,
        PowerKind::RevealVowels,
        PowerKind::Shield,
    ];
}

/// What a slot pick did to the game, for the result banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerOutcome {
    /// Empty box, or a pick outside 1..=9.
    Empty,
    LetterRevealed(char),
    /// Reveal-letter fired with no hidden letters left.
    NothingToReveal,
    ExtraLife,
    VowelsRevealed(usize),
    ShieldRaised,
    /// Gamble paid out a bonus power (already applied).
    Bonus(PowerKind),
    /// Gamble backfired.
    LifeLost,
    /// Gamble rolled a dud.
    NothingHappened,
}

impl PowerOutcome {
    /// One-line banner text in the voice of the in-game messages.
    pub fn describe(&self) -> String {
        match self {
            PowerOutcome::Empty => "Empty box, no power up.".to_string(),
            PowerOutcome::LetterRevealed(c) => {
                format!("Power-Up: Random letter '{c}' revealed!")
            }
            PowerOutcome::NothingToReveal => "Power-Up: No letters left to reveal.".to_string(),
            PowerOutcome::ExtraLife => "Power-Up: +1 Life!".to_string(),
            PowerOutcome::VowelsRevealed(n) => {
                format!("Power-Up: All vowels revealed! ({n} shown)")
            }
            PowerOutcome::ShieldRaised => "Power-Up: Shield activated!".to_string(),
            PowerOutcome::Bonus(kind) => format!("Bonus random power up: {kind:?}!"),
            PowerOutcome::LifeLost => "Lost 1 life.".to_string(),
            PowerOutcome::NothingHappened => "Nothing happened.".to_string(),
        }
    }
}

/// One trigger's slot assignment: 9 boxes, 3 of which hold a power. Rolled
/// fresh each time the super blank is hit and discarded after one pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    slots: [Option<PowerKind>; SLOT_COUNT],
}

impl SlotGrid {
    /// Sample 3 distinct boxes, then fill each with a kind drawn uniformly
    /// (kinds may repeat across boxes).
    pub fn roll(rng: &mut impl Rng) -> Self {
        let mut slots = [None; SLOT_COUNT];
        for i in index::sample(rng, SLOT_COUNT, FILLED_SLOTS) {
            slots[i] = Some(PowerKind::ALL[rng.random_range(0..PowerKind::ALL.len())]);
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<PowerKind>; SLOT_COUNT] {
        &self.slots
    }

    /// Resolve the player's pick. `choice` is the 1-based box number shown on
    /// screen; anything outside 1..=9 and any empty box is a no-op outcome.
    pub fn resolve(
        &self,
        state: &mut GameState,
        choice: usize,
        rng: &mut impl Rng,
    ) -> PowerOutcome {
        let slot = choice
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .copied()
            .flatten();
        match slot {
            Some(kind) => apply_kind(state, kind, rng),
            None => PowerOutcome::Empty,
        }
    }
}

/// Apply one power effect to the game.
pub fn apply_kind(state: &mut GameState, kind: PowerKind, rng: &mut impl Rng) -> PowerOutcome {
    match kind {
        PowerKind::RevealLetter => match state.reveal_random_hidden(rng) {
            Some(c) => PowerOutcome::LetterRevealed(c),
            None => PowerOutcome::NothingToReveal,
        },
        PowerKind::ExtraLife => {
            state.grant_life();
            PowerOutcome::ExtraLife
        }
        PowerKind::RevealVowels => PowerOutcome::VowelsRevealed(state.reveal_vowels()),
        PowerKind::Shield => {
            state.raise_shield();
            PowerOutcome::ShieldRaised
        }
        PowerKind::Gamble => {
            let roll = rng.random_range(1..=100);
            if roll <= 5 {
                let bonus = PowerKind::BONUS[rng.random_range(0..PowerKind::BONUS.len())];
                apply_kind(state, bonus, rng);
                PowerOutcome::Bonus(bonus)
            } else if roll <= 10 {
                state.lose_life();
                PowerOutcome::LifeLost
            } else {
                PowerOutcome::NothingHappened
            }
        }
    }
}
