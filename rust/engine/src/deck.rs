use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The depletable 54-card source. Cards are drawn from the tail.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Restores all 54 cards and permutes them with the deck's own stream.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    /// Restores all 54 cards in canonical order.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    /// Replaces the contents with an explicit remainder (fixture setups).
    pub(crate) fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Removes one card from the tail; `None` once exhausted.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Like [`Deck::draw_one`] but reports exhaustion as [`GameError::EmptyDeck`].
    pub fn try_draw(&mut self) -> Result<Card, GameError> {
        self.draw_one().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
