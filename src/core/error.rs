//! Error taxonomy for engine commands.
//!
//! Every variant is a recoverable rejection: the command did nothing
//! and the caller may try something else. Card-accounting violations
//! (a card in two hands, a selected card missing from its hand) are
//! not errors — they are defects, and the engine asserts on them.

use thiserror::Error;

use super::player::PlayerId;

/// A rejected command. State is unchanged whenever one of these comes
/// back.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    /// The round is over; no further plays or passes are accepted.
    #[error("the round has already ended")]
    RoundOver,

    /// Another seat holds the turn.
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    /// The player already emptied their hand this round.
    #[error("{0} has already finished this round")]
    NotInRound(PlayerId),

    /// The card is not in the acting player's hand.
    #[error("card is not in {0}'s hand")]
    CardNotInHand(PlayerId),

    /// The selectability rules reject the card right now.
    #[error("card cannot legally be selected right now")]
    NotSelectable,

    /// `play` was invoked with nothing selected.
    #[error("no cards are selected")]
    EmptySelection,

    /// The selected cards do not all share one effective rank.
    #[error("selected cards do not all share one rank")]
    MixedRankSelection,

    /// `pass` was invoked while cards are still selected.
    #[error("cannot pass while cards are selected")]
    SelectionHeld,
}
