use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::hand::{Hand, HAND_SIZE};

pub const DECK_SIZE: usize = 52;

/// The cards of one round. Dealt cards leave the deck, so
/// `remaining() + dealt()` is always [`DECK_SIZE`].
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Fresh deck in enumeration order, shuffled later from an OS-random seed.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            dealt: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        shuffle_cards(&mut self.cards, &mut self.rng);
        debug!(remaining = self.cards.len(), "deck shuffled");
    }

    /// Removes the first `n` cards. Nothing is removed when fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let cards: Vec<Card> = self.cards.drain(..n).collect();
        self.dealt += n;
        debug!(dealt = n, remaining = self.cards.len(), "cards dealt");
        Ok(cards)
    }

    pub fn deal_hand(&mut self) -> Result<Hand, GameError> {
        let cards = self.deal(HAND_SIZE)?;
        Hand::from_slice(&cards)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn dealt(&self) -> usize {
        self.dealt
    }

    /// Cards still in the deck, front first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform in-place Fisher–Yates shuffle (`SliceRandom::shuffle`).
pub fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}
