//! The shared pile: append-only history plus top-play tracking.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardContainer, Rank, RankRules};

/// The discard pile at the center of the table.
///
/// Legality only ever depends on the top play — its rank and its
/// quantity. The full history stays around for audit and display; a
/// clear resets the top tracking without touching it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    history: Vec<Card>,
    top_rank: Option<Rank>,
    top_quantity: usize,
}

impl Pile {
    /// An empty pile with no top play.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Land a group on the pile.
    ///
    /// The caller guarantees the group is non-empty and uniform in
    /// effective rank; the last card's rank stands for the whole group.
    pub fn place(&mut self, group: &[Card], rules: RankRules) {
        debug_assert!(!group.is_empty(), "cannot place an empty group");

        self.history.extend_from_slice(group);
        self.top_rank = group.last().map(|&c| rules.effective_rank(c));
        self.top_quantity = group.len();
    }

    /// Reset the top play. History is retained but no longer
    /// constrains the next play.
    pub fn clear(&mut self) {
        self.top_rank = None;
        self.top_quantity = 0;
    }

    /// `(rank, quantity)` of the top play, or `None` when the pile is
    /// open.
    #[must_use]
    pub fn peek_top(&self) -> Option<(Rank, usize)> {
        self.top_rank.map(|rank| (rank, self.top_quantity))
    }

    /// Rank of the top play, if any.
    #[must_use]
    pub const fn top_rank(&self) -> Option<Rank> {
        self.top_rank
    }

    /// Quantity of the top play; zero when the pile is open.
    #[must_use]
    pub const fn top_quantity(&self) -> usize {
        self.top_quantity
    }

    /// Whether no play currently constrains the next one.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.top_quantity == 0
    }

    /// The cards of the top play, most recent first, for display.
    #[must_use]
    pub fn top_cards(&self) -> Vec<Card> {
        self.history
            .iter()
            .rev()
            .take(self.top_quantity)
            .copied()
            .collect()
    }
}

impl CardContainer for Pile {
    /// Every card landed this round, oldest first.
    fn cards(&self) -> &[Card] {
        &self.history
    }
}
