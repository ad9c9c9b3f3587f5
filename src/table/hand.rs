//! A player's hand: held cards plus the selection being assembled.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardContainer, Rank, RankRules};
use crate::core::PlayerId;

/// A group of cards moving together. Plays are one to four cards, so
/// groups stay on the stack.
pub type CardGroup = SmallVec<[Card; 4]>;

/// A player's cards plus the selection tentatively chosen to play.
///
/// The hand takes exclusive ownership of its backing cards at
/// construction; no caller keeps a second handle that could mutate
/// them behind its back.
///
/// Invariant: every selected card is in `cards`, and the selection is
/// kept in the order the cards were picked (oldest first).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    owner: PlayerId,
    cards: Vec<Card>,
    selected: CardGroup,
}

impl Hand {
    /// Create a hand for `owner`, taking ownership of `cards`.
    #[must_use]
    pub fn new(owner: PlayerId, cards: Vec<Card>) -> Self {
        Self {
            owner,
            cards,
            selected: CardGroup::new(),
        }
    }

    /// The seat holding this hand.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Cards currently selected, oldest pick first.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        &self.selected
    }

    /// Whether `card` is currently selected.
    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selected.contains(&card)
    }

    /// The most recently selected card, if any.
    #[must_use]
    pub fn last_selected(&self) -> Option<Card> {
        self.selected.last().copied()
    }

    /// Add `card` to the selection. Selecting a selected card, or a
    /// card the hand does not hold, is a no-op.
    pub fn select(&mut self, card: Card) {
        if self.contains(card) && !self.is_selected(card) {
            self.selected.push(card);
        }
    }

    /// Drop `card` from the selection. Deselecting an unselected card
    /// is a no-op.
    pub fn deselect(&mut self, card: Card) {
        if let Some(pos) = self.selected.iter().position(|&c| c == card) {
            self.selected.remove(pos);
        }
    }

    /// Remove the selected cards from the hand and return them in
    /// selection order, leaving the selection empty. This is the only
    /// path by which cards leave a hand.
    pub fn commit_selection(&mut self) -> CardGroup {
        let group = std::mem::take(&mut self.selected);
        for card in &group {
            let pos = self
                .cards
                .iter()
                .position(|c| c == card)
                .expect("selected card missing from hand");
            self.cards.remove(pos);
        }
        group
    }

    /// Every card belonging to a same-rank group of exactly `quota`
    /// cards — plus larger groups when `or_better`.
    #[must_use]
    pub fn multiples_of_size(
        &self,
        rules: RankRules,
        quota: usize,
        or_better: bool,
    ) -> FxHashSet<Card> {
        let mut groups: FxHashMap<Rank, CardGroup> = FxHashMap::default();
        for &card in &self.cards {
            groups
                .entry(rules.effective_rank(card))
                .or_default()
                .push(card);
        }

        let mut matching = FxHashSet::default();
        for group in groups.values() {
            if group.len() == quota || (or_better && group.len() > quota) {
                matching.extend(group.iter().copied());
            }
        }
        matching
    }

    /// Sort ascending by effective rank, holding promoted Aces and
    /// Twos back to the very end. `reverse` flips the ascending order
    /// before the held cards are pulled out, so they land last either
    /// way.
    pub fn sort(&mut self, rules: RankRules, reverse: bool) {
        self.cards.sort_by_key(|&c| rules.effective_rank(c));
        if reverse {
            self.cards.reverse();
        }

        let (held, regular): (Vec<Card>, Vec<Card>) = self
            .cards
            .iter()
            .copied()
            .partition(|&c| rules.holds_back_in_sort(c));
        self.cards = regular;
        self.cards.extend(held);
    }
}

impl CardContainer for Hand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
