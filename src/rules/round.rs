//! The turn state machine: plays, passes, pile clears, revolutions,
//! victory ordering, and round termination.
//!
//! A [`Round`] is the single authority for one round of play. Exactly
//! one caller drives it, one command at a time; every command either
//! applies atomically or returns a [`RoundError`] leaving state
//! untouched.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardContainer, Deck};
use crate::core::{GameRng, PlayerId, PlayerMap, RoundConfig, RoundError};
use crate::table::{CardGroup, Hand, Pile};

use super::select::is_selectable;

/// Points for finishing in a given place (0-based). A fixed table:
/// 2 for first, 1 for second, nothing after that.
#[must_use]
pub const fn points_for_place(place: usize) -> u32 {
    match place {
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// One committed turn, kept for audit and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The seat that acted.
    pub player: PlayerId,
    /// What they did.
    pub action: TurnAction,
}

/// The action a turn committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// A group of equal-rank cards landed on the pile.
    Played(CardGroup),
    /// The turn was passed.
    Passed,
}

/// Turn bookkeeping for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct TurnState {
    current_player: PlayerId,
    pass_count: usize,
    /// Seats still holding cards, ascending.
    players_remaining: Vec<PlayerId>,
    /// Seats in the order they emptied their hands.
    victory_order: Vec<PlayerId>,
    revolution_active: bool,
    round_ended: bool,
}

impl TurnState {
    fn new(player_count: usize) -> Self {
        Self {
            current_player: PlayerId::new(0),
            pass_count: 0,
            players_remaining: PlayerId::all(player_count).collect(),
            victory_order: Vec::new(),
            revolution_active: false,
            round_ended: false,
        }
    }

    fn is_remaining(&self, player: PlayerId) -> bool {
        self.players_remaining.contains(&player)
    }

    /// The next remaining seat after `from`, ascending and wrapping,
    /// skipping seats that already finished.
    fn next_after(&self, from: PlayerId, player_count: usize) -> PlayerId {
        debug_assert!(
            !self.players_remaining.is_empty(),
            "no players left to take a turn"
        );

        let mut seat = from.index();
        loop {
            seat = (seat + 1) % player_count;
            let candidate = PlayerId::new(seat as u8);
            if self.is_remaining(candidate) {
                return candidate;
            }
        }
    }
}

/// A single round of play.
///
/// The display shell reads hands, pile, and turn state between
/// commands and calls [`Round::is_selectable`] per card to decide what
/// to enable; [`select`](Round::select), [`deselect`](Round::deselect),
/// [`play`](Round::play), and [`pass`](Round::pass) are the only
/// mutations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    config: RoundConfig,
    hands: PlayerMap<Hand>,
    pile: Pile,
    turn: TurnState,
    history: Vec<TurnRecord>,
}

impl Round {
    /// Deal a fresh round: generate the deck, shuffle, deal, sort each
    /// hand. Seat 0 leads the opening play.
    #[must_use]
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        let rules = config.rank_rules;
        let mut dealt = deck.deal(config.player_count).into_iter();
        let hands = PlayerMap::new(config.player_count, |player| {
            let mut hand = Hand::new(player, dealt.next().expect("one slice per seat"));
            hand.sort(rules, false);
            hand
        });

        debug!(
            "dealt {} hands of {} cards (seed {seed})",
            config.player_count,
            hands[PlayerId::new(0)].card_count(),
        );
        Self::from_hands(config, hands)
    }

    /// Start from pre-built hands instead of a shuffled deal. Scripted
    /// setups (demos, rigged tests) use this; hands keep their given
    /// card order and nothing is sorted.
    ///
    /// Panics if the number of hands does not match the configuration
    /// or a card appears twice across hands.
    #[must_use]
    pub fn with_hands(config: RoundConfig, hands: Vec<Vec<Card>>) -> Self {
        assert_eq!(
            hands.len(),
            config.player_count,
            "one hand per configured seat"
        );

        let mut dealt = hands.into_iter();
        let hands = PlayerMap::new(config.player_count, |player| {
            Hand::new(player, dealt.next().expect("one hand per seat"))
        });
        Self::from_hands(config, hands)
    }

    fn from_hands(config: RoundConfig, hands: PlayerMap<Hand>) -> Self {
        assert_distinct(&hands);
        Self {
            config,
            hands,
            pile: Pile::new(),
            turn: TurnState::new(config.player_count),
            history: Vec::new(),
        }
    }

    // === Query surface ===

    /// The configuration this round was started with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// The shared pile.
    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player
    }

    /// Seats still holding cards, in ascending seat order.
    #[must_use]
    pub fn players_remaining(&self) -> &[PlayerId] {
        &self.turn.players_remaining
    }

    /// Seats in the order they emptied their hands.
    #[must_use]
    pub fn victory_order(&self) -> &[PlayerId] {
        &self.turn.victory_order
    }

    /// Whether a revolution currently inverts the rank comparison.
    #[must_use]
    pub fn revolution_active(&self) -> bool {
        self.turn.revolution_active
    }

    /// Whether the round has ended.
    #[must_use]
    pub fn round_ended(&self) -> bool {
        self.turn.round_ended
    }

    /// Consecutive passes since the last play.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.turn.pass_count
    }

    /// Every committed turn so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Round points per seat: 2 for first place, 1 for second, 0
    /// otherwise. Final once [`round_ended`](Round::round_ended).
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        let mut scores = PlayerMap::with_value(self.config.player_count, 0);
        for (place, &player) in self.turn.victory_order.iter().enumerate() {
            scores[player] = points_for_place(place);
        }
        scores
    }

    /// Whether `player` could toggle `card` right now. Pure read, no
    /// caching; the shell calls this per card on every refresh.
    #[must_use]
    pub fn is_selectable(&self, player: PlayerId, card: Card) -> bool {
        !self.turn.round_ended
            && player == self.turn.current_player
            && is_selectable(
                card,
                &self.hands[player],
                &self.pile,
                self.config.rank_rules,
                self.turn.revolution_active,
            )
    }

    // === Command surface ===

    fn ensure_acting(&self, player: PlayerId) -> Result<(), RoundError> {
        if self.turn.round_ended {
            return Err(RoundError::RoundOver);
        }
        if !self.turn.is_remaining(player) {
            return Err(RoundError::NotInRound(player));
        }
        if player != self.turn.current_player {
            return Err(RoundError::NotYourTurn(player));
        }
        Ok(())
    }

    /// Select `card` for the acting player's pending play.
    pub fn select(&mut self, player: PlayerId, card: Card) -> Result<(), RoundError> {
        self.ensure_acting(player)?;

        let hand = &self.hands[player];
        if !hand.contains(card) {
            return Err(RoundError::CardNotInHand(player));
        }
        if !is_selectable(
            card,
            hand,
            &self.pile,
            self.config.rank_rules,
            self.turn.revolution_active,
        ) {
            return Err(RoundError::NotSelectable);
        }

        self.hands[player].select(card);
        trace!("{player} selected {card}");
        Ok(())
    }

    /// Drop `card` from the acting player's pending selection.
    /// Deselecting a card that is not selected is a no-op.
    pub fn deselect(&mut self, player: PlayerId, card: Card) -> Result<(), RoundError> {
        self.ensure_acting(player)?;

        if !self.hands[player].contains(card) {
            return Err(RoundError::CardNotInHand(player));
        }

        self.hands[player].deselect(card);
        trace!("{player} deselected {card}");
        Ok(())
    }

    /// Commit the acting player's selection as their play.
    ///
    /// The selection must be non-empty and uniform in effective rank;
    /// both are re-checked here so a buggy shell cannot corrupt the
    /// pile. On success the group lands on the pile, a four-card group
    /// toggles the revolution, the terminate rank wipes the pile in
    /// the same transition, an emptied hand joins the victory order,
    /// and the turn advances.
    pub fn play(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_acting(player)?;

        let rules = self.config.rank_rules;
        let selection = self.hands[player].selection();
        let Some(&first) = selection.first() else {
            return Err(RoundError::EmptySelection);
        };
        let rank = rules.effective_rank(first);
        if selection.iter().any(|&c| rules.effective_rank(c) != rank) {
            return Err(RoundError::MixedRankSelection);
        }

        let group = self.hands[player].commit_selection();

        if group.len() == 4 && self.config.revolutions_enabled {
            self.turn.revolution_active = !self.turn.revolution_active;
            debug!(
                "revolution {} by {player}",
                if self.turn.revolution_active {
                    "started"
                } else {
                    "ended"
                }
            );
        }

        self.pile.place(&group, rules);
        debug!("{player} played {} card(s) of {rank}", group.len());

        if self.config.terminate_rank == Some(rank) {
            self.pile.clear();
            debug!("pile wiped by {rank}");
        }

        self.history.push(TurnRecord {
            player,
            action: TurnAction::Played(group),
        });

        if self.hands[player].is_empty() {
            self.finish(player);
        }
        if !self.turn.round_ended {
            self.turn.current_player = self.turn.next_after(player, self.config.player_count);
        }
        self.turn.pass_count = 0;
        Ok(())
    }

    /// Pass the turn. Once every other remaining player has passed
    /// since the last play, the pile clears and the pass counter
    /// resets.
    pub fn pass(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.ensure_acting(player)?;

        if !self.hands[player].selection().is_empty() {
            return Err(RoundError::SelectionHeld);
        }

        self.turn.current_player = self.turn.next_after(player, self.config.player_count);
        self.turn.pass_count += 1;
        self.history.push(TurnRecord {
            player,
            action: TurnAction::Passed,
        });
        trace!("{player} passed ({} in a row)", self.turn.pass_count);

        if self.turn.pass_count == self.turn.players_remaining.len() - 1 {
            self.pile.clear();
            self.turn.pass_count = 0;
            debug!("pile cleared, everyone else passed; {} leads", self.turn.current_player);
        }
        Ok(())
    }

    /// Record `player` as finished; ends the round once only one seat
    /// is left, which takes the final place automatically.
    fn finish(&mut self, player: PlayerId) {
        self.turn.players_remaining.retain(|&p| p != player);
        self.turn.victory_order.push(player);
        debug!(
            "{player} finished in place {}",
            self.turn.victory_order.len()
        );

        if self.turn.players_remaining.len() == 1 {
            let last = self.turn.players_remaining.remove(0);
            self.turn.victory_order.push(last);
            self.turn.round_ended = true;
            debug!("round over, {last} takes the final place");
        }
    }
}

/// Card accounting: a card held by two hands is a defect in the deal
/// or commit logic, never a user error. Halt instead of playing on.
fn assert_distinct(hands: &PlayerMap<Hand>) {
    let mut seen = rustc_hash::FxHashSet::default();
    for (player, hand) in hands.iter() {
        for &card in hand.cards() {
            assert!(
                seen.insert(card),
                "{card} dealt to {player} is already in another hand"
            );
        }
    }
}
