//! Play legality: may this card join the selection right now?
//!
//! The display shell evaluates this predicate for every card in the
//! acting hand on each refresh to decide what to enable. It is pure
//! and side-effect free; the engine never caches its results.

use crate::cards::{Card, RankRules};
use crate::table::{Hand, Pile};

/// Decide whether `card` may be toggled into (or, if already selected,
/// out of) the hand's selection, given the pile's top play.
///
/// Rules apply in order; the first match wins. Structural constraints
/// come first, rank matching after:
///
/// 1. A required group size the card's rank cannot form rules it out.
/// 2. On an open pile with nothing selected, anything opens.
/// 3. Against a top play the card must beat the top rank — strictly
///    higher normally, strictly lower under a revolution. A card that
///    is already selected skips the check so the toggle can undo it.
/// 4. With nothing selected, the directional check is the whole
///    answer.
/// 5. With a selection underway, only the last-selected rank may join,
///    and never past the quantity a top play demands.
#[must_use]
pub fn is_selectable(
    card: Card,
    hand: &Hand,
    pile: &Pile,
    rules: RankRules,
    revolution_active: bool,
) -> bool {
    let quota = pile.top_quantity();

    if quota > 1 && !hand.multiples_of_size(rules, quota, true).contains(&card) {
        return false;
    }

    if pile.is_open() && hand.selection().is_empty() {
        return true;
    }

    if let Some(top) = pile.top_rank() {
        if hand.is_selected(card) {
            return true;
        }
        let rank = rules.effective_rank(card);
        let beats = if revolution_active {
            rank < top
        } else {
            rank > top
        };
        if hand.selection().is_empty() || !beats {
            return beats;
        }
    }

    // Growing a selection: same rank as the last pick only.
    let same_rank = hand
        .last_selected()
        .is_some_and(|last| rules.effective_rank(card) == rules.effective_rank(last));
    if pile.is_open() {
        same_rank
    } else {
        same_rank && hand.selection().len() < quota
    }
}
