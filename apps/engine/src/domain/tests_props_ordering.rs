use proptest::prelude::*;

use crate::domain::cards_logic::sorted_hand;
use crate::domain::trump::effective_rank;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: sorting is a permutation of the input
    #[test]
    fn prop_sort_is_permutation(
        hand in test_gens::unique_cards(5),
        trump in test_gens::trump(),
    ) {
        let sorted = sorted_hand(&hand, trump.as_ref());
        prop_assert_eq!(sorted.len(), hand.len());
        for c in &hand {
            prop_assert!(sorted.contains(c));
        }
    }

    /// Property: sorting twice yields the same order
    #[test]
    fn prop_sort_is_idempotent(
        hand in test_gens::unique_cards(5),
        trump in test_gens::trump(),
    ) {
        let once = sorted_hand(&hand, trump.as_ref());
        prop_assert_eq!(sorted_hand(&once, trump.as_ref()), once.clone());
        prop_assert!(once
            .windows(2)
            .all(|w| effective_rank(w[0], trump.as_ref()) < effective_rank(w[1], trump.as_ref())));
    }
}
