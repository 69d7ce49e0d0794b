// Proptest generators for domain types.
// Cards are always drawn without replacement from the 24-card deck.

use proptest::prelude::*;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::full_deck;
use crate::domain::seats::Seat;
use crate::domain::trump::TrumpContext;

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
    ]
}

/// Trump context, or none (pre-bid ordering)
pub fn trump() -> impl Strategy<Value = Option<TrumpContext>> {
    prop::option::of(suit().prop_map(TrumpContext::resolve))
}

pub fn seat() -> impl Strategy<Value = Seat> {
    (0u8..4).prop_map(|i| Seat::ALL[i as usize])
}

/// Generate a vector of N unique cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

/// Non-empty hand of 1..=5 distinct cards
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=5).prop_flat_map(unique_cards)
}

/// A complete trick: lead seat plus four (seat, card) pairs in play order.
pub fn complete_trick() -> impl Strategy<Value = (Seat, Vec<(Seat, Card)>)> {
    (seat(), unique_cards(4)).prop_map(|(lead, cards)| {
        let plays = lead.rotation().into_iter().zip(cards).collect();
        (lead, plays)
    })
}

/// Hand for the following seat plus a lead card, all distinct.
pub fn hand_and_lead() -> impl Strategy<Value = (Vec<Card>, Card)> {
    (1usize..=5)
        .prop_flat_map(|n| unique_cards(n + 1))
        .prop_map(|mut cards| {
            let lead = cards.pop().unwrap();
            (cards, lead)
        })
}
