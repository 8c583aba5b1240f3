use std::collections::HashSet;

use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Regeneration attempts before a failed shuffle is reported as a fault.
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 3;

pub const DECK_SIZE: usize = 52;

/// A single-round deck. Cards are consumed from the top (front) only.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Builds the canonical 52 cards and applies a Fisher-Yates shuffle driven by `rng`.
    ///
    /// The result is checked to be a permutation of the canonical deck; a failed check
    /// regenerates the deck, up to [`MAX_SHUFFLE_ATTEMPTS`] times.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        Self::shuffled_checked(rng, is_complete_permutation)
    }

    fn shuffled_checked<R, V>(rng: &mut R, validate: V) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
        V: Fn(&[Card]) -> bool,
    {
        for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
            let mut cards = full_deck();
            fisher_yates(&mut cards, rng);
            if validate(&cards) {
                return Ok(Self { cards, position: 0 });
            }
            tracing::warn!(attempt, len = cards.len(), "shuffled deck failed validation, regenerating");
        }
        tracing::error!(attempts = MAX_SHUFFLE_ATTEMPTS, "unable to produce a valid deck");
        Err(GameError::CorruptDeck {
            attempts: MAX_SHUFFLE_ATTEMPTS,
        })
    }

    /// Builds a deck with an explicit order; the first card is the top of the deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if !is_complete_permutation(&cards) {
            return Err(GameError::CorruptDeck { attempts: 1 });
        }
        Ok(Self { cards, position: 0 })
    }

    /// Removes `n` cards from the top. Leaves the deck untouched if fewer remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            tracing::error!(requested = n, remaining, "deck exhausted");
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet drawn, top first.
    pub fn undrawn(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}

fn fisher_yates<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// True when `cards` holds each of the 52 canonical cards exactly once.
pub fn is_complete_permutation(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }
    let seen: HashSet<Card> = cards.iter().copied().collect();
    seen.len() == DECK_SIZE
}
