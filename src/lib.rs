//! # daifugo-engine
//!
//! A turn/trick rule engine for climbing card games (Daifugō /
//! President / Tien Len): hands are dealt from a shuffled 52-card
//! deck, players take turns laying equal-rank card groups onto a
//! shared pile, every play has to beat the one before it under
//! shifting comparison rules, and the round runs until all but one
//! player has emptied their hand.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: no rendering, input wiring, or timing. A
//!    display shell calls the command surface (`select`, `deselect`,
//!    `play`, `pass`) and re-reads the query surface after each step.
//!
//! 2. **One writer**: a [`Round`] is the single authority for its
//!    state. Commands apply atomically or reject with a
//!    [`RoundError`] without mutating anything.
//!
//! 3. **Effective rank everywhere**: raw face values never drive game
//!    logic, only display. Every comparison goes through
//!    [`RankRules`].
//!
//! ## Modules
//!
//! - `core`: player identity, deterministic RNG, configuration, errors
//! - `cards`: card identity, effective rank, deck operations
//! - `table`: the stateful containers — [`Hand`] and [`Pile`]
//! - `rules`: the selectability predicate and the [`Round`] turn engine
//!
//! ## Example
//!
//! ```
//! use daifugo_engine::{CardContainer, PlayerId, Round, RoundConfig};
//!
//! let mut round = Round::new(RoundConfig::new(4), 42);
//! let leader = round.current_player();
//!
//! // Open with the leader's first selectable card.
//! let card = round
//!     .hand(leader)
//!     .cards()
//!     .iter()
//!     .copied()
//!     .find(|&c| round.is_selectable(leader, c))
//!     .expect("the opening play is unconstrained");
//! round.select(leader, card)?;
//! round.play(leader)?;
//!
//! assert_ne!(round.current_player(), leader);
//! # Ok::<(), daifugo_engine::RoundError>(())
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod table;

// Re-export the commonly used types.
pub use crate::cards::{Card, CardContainer, Deck, Rank, RankRules, Suit, DECK_SIZE};
pub use crate::core::{
    GameRng, GameRngState, PlayerId, PlayerMap, RoundConfig, RoundError, MAX_PLAYERS, MIN_PLAYERS,
};
pub use crate::rules::{is_selectable, points_for_place, Round, TurnAction, TurnRecord};
pub use crate::table::{CardGroup, Hand, Pile};
