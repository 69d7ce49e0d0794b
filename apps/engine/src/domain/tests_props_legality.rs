use proptest::prelude::*;

use crate::domain::cards_logic::hand_has_suit;
use crate::domain::seats::Seat;
use crate::domain::tricks::{legal_plays, Trick};
use crate::domain::trump::effective_suit;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a non-empty hand always has at least one legal play
    #[test]
    fn prop_legal_plays_never_empty(
        (hand, lead) in test_gens::hand_and_lead(),
        trump in test_gens::trump(),
        leading in any::<bool>(),
    ) {
        let mut trick = Trick::new(Seat::ALL[0]);
        if !leading {
            trick.record(Seat::ALL[0], lead).unwrap();
        }
        let legal = legal_plays(&hand, &trick, trump.as_ref());
        prop_assert!(!legal.is_empty());
        prop_assert!(legal.iter().all(|c| hand.contains(c)));
        if leading {
            prop_assert_eq!(&legal, &hand);
        }
    }

    /// Property: when the hand can follow the lead's effective suit, every
    /// legal card does; otherwise the whole hand is legal
    #[test]
    fn prop_follow_suit_by_effective_suit(
        (hand, lead) in test_gens::hand_and_lead(),
        trump in test_gens::trump(),
    ) {
        let mut trick = Trick::new(Seat::ALL[3]);
        trick.record(Seat::ALL[3], lead).unwrap();
        let lead_suit = effective_suit(lead, trump.as_ref());
        let legal = legal_plays(&hand, &trick, trump.as_ref());

        if hand_has_suit(&hand, lead_suit, trump.as_ref()) {
            for c in &legal {
                prop_assert_eq!(effective_suit(*c, trump.as_ref()), lead_suit);
            }
            let followers = hand
                .iter()
                .filter(|&&c| effective_suit(c, trump.as_ref()) == lead_suit)
                .count();
            prop_assert_eq!(legal.len(), followers);
        } else {
            prop_assert_eq!(&legal, &hand);
        }
    }

    /// Property: the left bower is never offered to follow its printed suit
    #[test]
    fn prop_left_bower_never_follows_printed_suit(
        (hand, lead) in test_gens::hand_and_lead(),
        trump_suit in test_gens::suit(),
    ) {
        let ctx = crate::domain::trump::TrumpContext::resolve(trump_suit);
        let mut trick = Trick::new(Seat::ALL[1]);
        trick.record(Seat::ALL[1], lead).unwrap();
        let legal = legal_plays(&hand, &trick, Some(&ctx));
        let lead_is_left_suit_plain = lead.suit == ctx.left_bower_suit() && !ctx.is_trump(lead);
        let can_follow_plain = hand
            .iter()
            .any(|&c| c.suit == ctx.left_bower_suit() && !ctx.is_left_bower(c));
        if lead_is_left_suit_plain && can_follow_plain {
            prop_assert!(!legal.iter().any(|&c| ctx.is_left_bower(c)));
        }
    }
}
