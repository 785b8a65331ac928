/// Property-based tests for whole rounds played with legal moves
use proptest::prelude::*;

use crate::domain::capture::legal_moves;
use crate::domain::dealing::{shuffled_deck, start_round};
use crate::domain::plays::apply_play;
use crate::domain::scoring::score_round;
use crate::domain::{test_gens, test_prelude, value_sum};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: 40 cards are accounted for after every play, every accepted
    /// capture sums to the played card, and the round ends with empty hands
    /// and deck.
    #[test]
    fn prop_round_conserves_cards(
        (seats, dealer, seed) in test_gens::round_setup(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 40),
    ) {
        let mut round = start_round(1, seats, dealer, seed).unwrap();
        let mut step = 0;
        while let Some(seat) = round.turn() {
            let moves = legal_moves(&round.hands[seat as usize], &round.table);
            prop_assert!(!moves.is_empty());
            let (card, captured) = picks[step % picks.len()].get(&moves).clone();
            step += 1;

            let res = apply_play(&mut round, seat, card, &captured);
            prop_assert!(res.is_ok(), "legal move rejected: {:?}", res);
            prop_assert_eq!(round.card_count(), 40);
            if !captured.is_empty() {
                prop_assert_eq!(value_sum(&captured), u32::from(card.value()));
            }
        }
        prop_assert_eq!(step, 36);
        prop_assert!(round.deck.is_empty());
        prop_assert!(round.all_hands_empty());

        // Round points: at most 2 majority points, 2 seven points, plus chkobbas.
        let score = score_round(&round);
        let chkobbas: u32 = round.chkobbas.iter().map(|&c| u32::from(c)).sum();
        let total: u32 = score.points.iter().sum();
        prop_assert!(total <= 4 + chkobbas);
        prop_assert!(total >= chkobbas);
    }

    /// Property: the shuffle depends only on the seed.
    #[test]
    fn prop_deal_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(shuffled_deck(seed), shuffled_deck(seed));
        let a = start_round(2, 3, 1, seed).unwrap();
        let b = start_round(2, 3, 1, seed).unwrap();
        prop_assert_eq!(a.hands, b.hands);
        prop_assert_eq!(a.table, b.table);
        prop_assert_eq!(a.deck, b.deck);
    }
}
