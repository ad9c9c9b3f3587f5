//! Effective rank: the comparison value a card carries under the
//! session's promotion rules.
//!
//! Climbing games usually promote Ace and Two above the King. Whether
//! that happens is configurable per session via [`RankRules`]; the rest
//! of the engine only ever compares [`Rank`]s, never raw face values.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// A card's comparison value after Ace/Two promotion.
///
/// Ranks order plainly: 3 < 4 < .. < 13 (King) < 14 (promoted Ace)
/// < 15 (promoted Two).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Rank of an Ace under `ace_high`.
    pub const PROMOTED_ACE: Rank = Rank(14);
    /// Rank of a Two under `two_high`.
    pub const PROMOTED_TWO: Rank = Rank(15);

    /// Create a rank from its numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The numeric comparison value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rank {}", self.0)
    }
}

/// The configurable promotion rules applied to every comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRules {
    /// Ace counts as 14 instead of 1.
    pub ace_high: bool,
    /// Two counts as 15 instead of 2.
    pub two_high: bool,
}

impl Default for RankRules {
    /// Aces and Twos both promoted, the genre's usual table rules.
    fn default() -> Self {
        Self {
            ace_high: true,
            two_high: true,
        }
    }
}

impl RankRules {
    /// The effective rank of `card` under these rules.
    ///
    /// Pure and total over all valid cards: Ace maps to 14 when
    /// promoted, Two to 15, every other face keeps its value.
    #[must_use]
    pub fn effective_rank(self, card: Card) -> Rank {
        match card.face_value() {
            1 if self.ace_high => Rank::PROMOTED_ACE,
            2 if self.two_high => Rank::PROMOTED_TWO,
            face => Rank(face),
        }
    }

    /// Whether hand sorting holds this card back to the end of the
    /// hand. Only raw Aces and Twos are held, and only while promoted.
    #[must_use]
    pub fn holds_back_in_sort(self, card: Card) -> bool {
        (self.ace_high && card.face_value() == 1) || (self.two_high && card.face_value() == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_promotion_both_high() {
        let rules = RankRules::default();

        assert_eq!(rules.effective_rank(Card::new(Suit::Clubs, 1)), Rank(14));
        assert_eq!(rules.effective_rank(Card::new(Suit::Clubs, 2)), Rank(15));
        assert_eq!(rules.effective_rank(Card::new(Suit::Clubs, 3)), Rank(3));
        assert_eq!(rules.effective_rank(Card::new(Suit::Clubs, 13)), Rank(13));
    }

    #[test]
    fn test_promotion_disabled() {
        let rules = RankRules {
            ace_high: false,
            two_high: false,
        };

        assert_eq!(rules.effective_rank(Card::new(Suit::Hearts, 1)), Rank(1));
        assert_eq!(rules.effective_rank(Card::new(Suit::Hearts, 2)), Rank(2));
    }

    #[test]
    fn test_promotion_is_independent() {
        let rules = RankRules {
            ace_high: true,
            two_high: false,
        };

        assert_eq!(rules.effective_rank(Card::new(Suit::Spades, 1)), Rank(14));
        assert_eq!(rules.effective_rank(Card::new(Suit::Spades, 2)), Rank(2));
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank(3) < Rank(13));
        assert!(Rank(13) < Rank::PROMOTED_ACE);
        assert!(Rank::PROMOTED_ACE < Rank::PROMOTED_TWO);
    }

    #[test]
    fn test_holds_back_follows_promotion() {
        let rules = RankRules {
            ace_high: true,
            two_high: false,
        };

        assert!(rules.holds_back_in_sort(Card::new(Suit::Clubs, 1)));
        assert!(!rules.holds_back_in_sort(Card::new(Suit::Clubs, 2)));
        assert!(!rules.holds_back_in_sort(Card::new(Suit::Clubs, 5)));
    }
}
