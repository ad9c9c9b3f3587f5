//! Round configuration.
//!
//! A [`RoundConfig`] is accepted once at session start and stays fixed
//! for the whole round. Builder methods cover the knobs the table can
//! turn; everything defaults to the genre's usual rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, RankRules};

/// Fewest seats a round supports.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a round supports.
pub const MAX_PLAYERS: usize = 7;

/// Configuration for one round.
///
/// ```
/// use daifugo_engine::core::RoundConfig;
/// use daifugo_engine::cards::Rank;
///
/// let config = RoundConfig::new(4)
///     .with_terminate_rank(Some(Rank::new(8)))
///     .with_revolutions(false);
/// assert_eq!(config.player_count, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of seats at the table (2-7).
    pub player_count: usize,

    /// Ace/Two promotion applied to every comparison.
    pub rank_rules: RankRules,

    /// Rank whose play wipes the pile in the same transition.
    /// `None` disables the rule.
    pub terminate_rank: Option<Rank>,

    /// Whether a four-card play toggles the revolution flag.
    pub revolutions_enabled: bool,
}

impl RoundConfig {
    /// Create a configuration with the default rule set: Aces and Twos
    /// high, eights clear the pile, revolutions on.
    ///
    /// Panics unless `player_count` is 2-7.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "player count must be {MIN_PLAYERS}-{MAX_PLAYERS}, got {player_count}"
        );

        Self {
            player_count,
            rank_rules: RankRules::default(),
            terminate_rank: Some(Rank::new(8)),
            revolutions_enabled: true,
        }
    }

    /// Set the promotion rules.
    #[must_use]
    pub fn with_rank_rules(mut self, rank_rules: RankRules) -> Self {
        self.rank_rules = rank_rules;
        self
    }

    /// Set or disable the pile-clearing rank.
    #[must_use]
    pub fn with_terminate_rank(mut self, rank: Option<Rank>) -> Self {
        self.terminate_rank = rank;
        self
    }

    /// Enable or disable revolutions.
    #[must_use]
    pub fn with_revolutions(mut self, enabled: bool) -> Self {
        self.revolutions_enabled = enabled;
        self
    }
}
