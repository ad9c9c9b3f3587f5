//! Property coverage for deck operations: shuffling permutes, dealing
//! partitions, sorting orders.

use daifugo_engine::cards::{Card, CardContainer, Deck, RankRules, Suit, DECK_SIZE};
use daifugo_engine::core::{GameRng, PlayerId};
use daifugo_engine::table::Hand;
use proptest::prelude::*;

fn sort_key(card: Card) -> (Suit, u8) {
    (card.suit(), card.face_value())
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));

        let mut shuffled: Vec<Card> = deck.cards().to_vec();
        shuffled.sort_by_key(|&c| sort_key(c));
        let reference: Vec<Card> = Deck::standard().cards().to_vec();
        prop_assert_eq!(shuffled, reference);
    }

    #[test]
    fn deal_partitions_into_equal_disjoint_hands(
        seed in any::<u64>(),
        players in 2usize..=7,
    ) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));
        let hands = deck.deal(players);

        prop_assert_eq!(hands.len(), players);
        let per_hand = DECK_SIZE / players;
        for hand in &hands {
            prop_assert_eq!(hand.len(), per_hand);
        }

        let mut all: Vec<Card> = hands.iter().flatten().copied().collect();
        all.sort_by_key(|&c| sort_key(c));
        all.dedup();
        prop_assert_eq!(all.len(), players * per_hand);
        prop_assert!(players * per_hand <= DECK_SIZE);
    }

    #[test]
    fn sorted_hand_ascends_with_held_cards_last(seed in any::<u64>()) {
        let rules = RankRules::default();
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(seed));
        let dealt = deck.deal(4).swap_remove(0);

        let mut hand = Hand::new(PlayerId::new(0), dealt);
        hand.sort(rules, false);

        let cards = hand.cards();
        let first_held = cards
            .iter()
            .position(|&c| rules.holds_back_in_sort(c))
            .unwrap_or(cards.len());
        let (regular, held) = cards.split_at(first_held);

        for pair in regular.windows(2) {
            prop_assert!(rules.effective_rank(pair[0]) <= rules.effective_rank(pair[1]));
        }
        for &c in held {
            prop_assert!(rules.holds_back_in_sort(c));
        }
    }
}
