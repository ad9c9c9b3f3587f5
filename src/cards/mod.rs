//! Card identity, ranking, and deck operations.
//!
//! ## Key Types
//!
//! - `Card`: immutable (suit, face value) pair, compared by value
//! - `Rank` / `RankRules`: effective rank under Ace/Two promotion
//! - `Deck`: generation, shuffle, deal
//! - `CardContainer`: the read surface shared by deck, hand, and pile

pub mod card;
pub mod container;
pub mod deck;
pub mod rank;

pub use card::{Card, Suit};
pub use container::CardContainer;
pub use deck::{Deck, DECK_SIZE};
pub use rank::{Rank, RankRules};
