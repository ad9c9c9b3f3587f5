//! Deck generation, shuffling, and dealing.
//!
//! A deck is mutable during setup only. Dealing consumes it: cards move
//! into hands by ownership transfer, so nothing keeps a second handle
//! to the dealt storage.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};
use super::container::CardContainer;
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered run of cards, consumed by dealing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The standard 52-card deck: every (suit, face) pair exactly once,
    /// suit-major, faces ascending.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face in 1..=13 {
                cards.push(Card::new(suit, face));
            }
        }
        Self { cards }
    }

    /// Shuffle by drawing one uniformly-random remaining card into a
    /// fresh pile until the old one is exhausted. Unbiased as long as
    /// the index source is uniform.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut shuffled = Vec::with_capacity(self.cards.len());
        while !self.cards.is_empty() {
            let index = rng.gen_range_usize(0..self.cards.len());
            shuffled.push(self.cards.swap_remove(index));
        }
        self.cards = shuffled;
    }

    /// Split into `player_count` contiguous slices of `len / player_count`
    /// cards each, consuming the deck. Slice `i` belongs to seat `i`.
    ///
    /// The `len % player_count` remainder cards are dealt to no one and
    /// drop out of the round.
    #[must_use]
    pub fn deal(self, player_count: usize) -> Vec<Vec<Card>> {
        assert!(player_count > 0, "cannot deal to zero players");

        let per_hand = self.cards.len() / player_count;
        let mut rest = self.cards;
        rest.truncate(per_hand * player_count);

        let mut hands = Vec::with_capacity(player_count);
        for _ in 0..player_count {
            let tail = rest.split_off(per_hand.min(rest.len()));
            hands.push(rest);
            rest = tail;
        }
        hands
    }
}

impl CardContainer for Deck {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
