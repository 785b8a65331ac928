/// Property-based tests for capture resolution
use proptest::prelude::*;

use crate::domain::capture::{find_capturable, find_combinations, legal_moves};
use crate::domain::{test_gens, test_prelude, value_sum};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every combination sums to the played card's value and uses
    /// distinct table cards.
    #[test]
    fn prop_combinations_sum_to_card_value(
        (card, table) in test_gens::card_and_table(8),
    ) {
        for combo in find_combinations(card, &table) {
            prop_assert_eq!(value_sum(&combo), u32::from(card.value()));
            prop_assert!(combo.iter().all(|c| table.contains(c)));
            let mut dedup = combo.clone();
            dedup.sort();
            dedup.dedup();
            prop_assert_eq!(dedup.len(), combo.len());
        }
    }

    /// Property: a single match on the table rules out every multi-card subset.
    #[test]
    fn prop_single_match_priority(
        (card, table) in test_gens::card_and_table(8),
    ) {
        let has_single = table.iter().any(|c| c.value() == card.value());
        let combos = find_combinations(card, &table);
        if has_single {
            prop_assert!(!combos.is_empty());
            prop_assert!(combos.iter().all(|c| c.len() == 1));
        } else {
            prop_assert!(combos.iter().all(|c| c.len() >= 2));
        }
    }

    /// Property: same input, same output, same order.
    #[test]
    fn prop_resolution_is_deterministic(
        (card, table) in test_gens::card_and_table(8),
    ) {
        prop_assert_eq!(find_combinations(card, &table), find_combinations(card, &table));
    }

    /// Property: capturable cards are exactly the union of the combinations.
    #[test]
    fn prop_capturable_is_union(
        (card, table) in test_gens::card_and_table(8),
    ) {
        let combos = find_combinations(card, &table);
        let capturable = find_capturable(card, &table);
        for c in &capturable {
            prop_assert!(combos.iter().any(|combo| combo.contains(c)));
        }
        for combo in &combos {
            prop_assert!(combo.iter().all(|c| capturable.contains(c)));
        }
    }

    /// Property: every hand card appears in the legal moves, with a capture
    /// whenever one exists.
    #[test]
    fn prop_legal_moves_cover_hand(
        (hand, table) in test_gens::hand_and_table(8),
    ) {
        let moves = legal_moves(&hand, &table);
        for card in &hand {
            let for_card: Vec<_> = moves.iter().filter(|(c, _)| c == card).collect();
            prop_assert!(!for_card.is_empty());
            let can_capture = !find_combinations(*card, &table).is_empty();
            prop_assert!(for_card.iter().all(|(_, cap)| cap.is_empty() != can_capture));
        }
    }
}
