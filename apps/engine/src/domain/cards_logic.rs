//! Card game logic: hand ordering, checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};
use super::trump::{effective_rank, effective_suit, TrumpContext};

/// Stable sort by effective rank, strongest first.
pub fn sort_hand(hand: &mut [Card], trump: Option<&TrumpContext>) {
    hand.sort_by_key(|&c| effective_rank(c, trump));
}

pub fn sorted_hand(hand: &[Card], trump: Option<&TrumpContext>) -> Vec<Card> {
    let mut out = hand.to_vec();
    sort_hand(&mut out, trump);
    out
}

/// Whether any card in `hand` plays as `suit` under `trump`.
pub fn hand_has_suit(hand: &[Card], suit: Suit, trump: Option<&TrumpContext>) -> bool {
    hand.iter().any(|&c| effective_suit(c, trump) == suit)
}

/// Does `a` beat the current trick leader `b`, given the effective lead suit?
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<&TrumpContext>) -> bool {
    let a_trump = trump.is_some_and(|ctx| ctx.is_trump(a));
    let b_trump = trump.is_some_and(|ctx| ctx.is_trump(b));
    if a_trump != b_trump {
        return a_trump;
    }
    if a_trump {
        return effective_rank(a, trump) < effective_rank(b, trump);
    }
    // Neither is trump: only lead-suit cards compete
    let a_follows = effective_suit(a, trump) == lead;
    let b_follows = effective_suit(b, trump) == lead;
    if a_follows != b_follows {
        return a_follows;
    }
    a_follows && effective_rank(a, trump) < effective_rank(b, trump)
}
