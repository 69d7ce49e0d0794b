use proptest::prelude::*;

use crate::domain::cards_types::Card;
use crate::domain::seats::Seat;
use crate::domain::tricks::resolve_trick;
use crate::domain::trump::{effective_rank, effective_suit, TrumpContext};
use crate::domain::{test_gens, test_prelude};

/// Reference winner: strongest trump if any, else strongest card of the
/// lead's effective suit.
fn oracle_trick_winner(plays: &[(Seat, Card)], trump: Option<&TrumpContext>) -> Seat {
    let lead = effective_suit(plays[0].1, trump);
    let trumps: Vec<_> = plays
        .iter()
        .filter(|(_, c)| trump.is_some_and(|t| t.is_trump(*c)))
        .collect();
    let pool: Vec<_> = if trumps.is_empty() {
        plays
            .iter()
            .filter(|(_, c)| effective_suit(*c, trump) == lead)
            .collect()
    } else {
        trumps
    };
    pool.into_iter()
        .min_by_key(|(_, c)| effective_rank(*c, trump))
        .map(|(s, _)| *s)
        .unwrap()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: resolver agrees with the reference winner
    #[test]
    fn prop_trick_winner_matches_oracle(
        (lead, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let winner = resolve_trick(&plays, lead, trump.as_ref()).unwrap();
        prop_assert_eq!(winner, oracle_trick_winner(&plays, trump.as_ref()));
    }

    /// Property: the order (seat, card) pairs are supplied in is irrelevant
    #[test]
    fn prop_trick_winner_permutation_invariant(
        (lead, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
        shuffled_idx in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let expected = resolve_trick(&plays, lead, trump.as_ref()).unwrap();
        let shuffled: Vec<_> = shuffled_idx.iter().map(|&i| plays[i]).collect();
        prop_assert_eq!(resolve_trick(&shuffled, lead, trump.as_ref()).unwrap(), expected);
    }

    /// Property: whoever holds the right bower wins
    #[test]
    fn prop_right_bower_always_wins(
        (lead, plays) in test_gens::complete_trick(),
        trump_suit in test_gens::suit(),
    ) {
        let ctx = TrumpContext::resolve(trump_suit);
        let winner = resolve_trick(&plays, lead, Some(&ctx)).unwrap();
        if let Some((holder, _)) = plays.iter().find(|(_, c)| ctx.is_right_bower(*c)) {
            prop_assert_eq!(winner, *holder);
        }
    }
}
