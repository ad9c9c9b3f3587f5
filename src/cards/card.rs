//! Card identity: suit and face value.
//!
//! A `Card` is immutable once created and compared by value — there is
//! no synthetic id. The raw face value (1..=13) exists for identity and
//! display; every ordering decision in the engine goes through
//! [`RankRules::effective_rank`](crate::cards::RankRules::effective_rank).

use serde::{Deserialize, Serialize};

/// The four French suits, in deck-generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in deck-generation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Human-readable suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single playing card.
///
/// Face values run 1 (Ace) through 13 (King).
///
/// ```
/// use daifugo_engine::cards::{Card, Suit};
///
/// let card = Card::new(Suit::Spades, 1);
/// assert_eq!(card.face_value(), 1);
/// assert_eq!(card.to_string(), "Ace of Spades");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    face_value: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `face_value` is outside 1..=13. An out-of-range face
    /// is a defect in the caller, not a recoverable condition.
    #[must_use]
    pub fn new(suit: Suit, face_value: u8) -> Self {
        assert!(
            (1..=13).contains(&face_value),
            "face value must be 1-13, got {face_value}"
        );
        Self { suit, face_value }
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The raw face value (1 = Ace .. 13 = King). Display only; never
    /// compare plays with this.
    #[must_use]
    pub const fn face_value(self) -> u8 {
        self.face_value
    }

    /// Human-readable face name ("Ace", "7", "Queen").
    #[must_use]
    pub const fn face_name(self) -> &'static str {
        match self.face_value {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => unreachable!(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.face_name(), self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_identity_is_by_value() {
        let a = Card::new(Suit::Hearts, 7);
        let b = Card::new(Suit::Hearts, 7);
        let c = Card::new(Suit::Spades, 7);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_face_names() {
        assert_eq!(Card::new(Suit::Clubs, 1).face_name(), "Ace");
        assert_eq!(Card::new(Suit::Clubs, 7).face_name(), "7");
        assert_eq!(Card::new(Suit::Clubs, 11).face_name(), "Jack");
        assert_eq!(Card::new(Suit::Clubs, 12).face_name(), "Queen");
        assert_eq!(Card::new(Suit::Clubs, 13).face_name(), "King");
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Diamonds, 12);
        assert_eq!(format!("{}", card), "Queen of Diamonds");
    }

    #[test]
    #[should_panic(expected = "face value must be 1-13")]
    fn test_face_value_zero_is_fatal() {
        Card::new(Suit::Clubs, 0);
    }

    #[test]
    #[should_panic(expected = "face value must be 1-13")]
    fn test_face_value_fourteen_is_fatal() {
        Card::new(Suit::Clubs, 14);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Spades, 13);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
