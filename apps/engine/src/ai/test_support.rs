//! Hand-built player views for strategy unit tests.

use crate::domain::bidding::BidPass;
use crate::domain::cards_parsing::parse_cards;
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::{Card, Seat, Suit, Trick, TrumpContext};

/// View for seat 0 with seat 3 dealing. With `trump` set, seat 0 is leading
/// an empty trick.
pub fn info_for(
    hand: &[&str],
    up_card: &str,
    bid_pass: Option<BidPass>,
    trump: Option<Suit>,
) -> CurrentRoundInfo {
    let up: Card = up_card.parse().unwrap();
    CurrentRoundInfo {
        seat: Seat::ALL[0],
        dealer: Seat::ALL[3],
        round_no: 1,
        hand: parse_cards(hand),
        up_card: up,
        bid_pass,
        turned_down: (bid_pass == Some(BidPass::Open)).then_some(up.suit),
        trump: trump.map(TrumpContext::resolve),
        caller: trump.map(|_| Seat::ALL[1]),
        trick: trump.map(|_| Trick::new(Seat::ALL[0])),
        tricks_won: [0, 0],
        scores: [0, 0],
    }
}

/// Same view with the given cards already played by the seats before seat 0.
pub fn following(mut info: CurrentRoundInfo, played: &[(u8, &str)]) -> CurrentRoundInfo {
    let lead = Seat::new(played[0].0).unwrap();
    let mut trick = Trick::new(lead);
    for &(seat, token) in played {
        trick
            .record(Seat::new(seat).unwrap(), token.parse().unwrap())
            .unwrap();
    }
    info.trick = Some(trick);
    info
}
