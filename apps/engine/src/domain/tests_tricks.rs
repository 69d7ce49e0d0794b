use crate::domain::cards_parsing::parse_cards;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::DealtRound;
use crate::domain::hand::Hand;
use crate::domain::seats::Seat;
use crate::domain::state::RoundState;
use crate::domain::tricks::{legal_plays, resolve_trick, Trick};
use crate::domain::trump::TrumpContext;
use crate::errors::domain::ValidationKind;

fn seat(i: u8) -> Seat {
    Seat::new(i).unwrap()
}

fn card(t: &str) -> Card {
    t.parse().unwrap()
}

fn plays(tokens: [(u8, &str); 4]) -> Vec<(Seat, Card)> {
    tokens.iter().map(|&(s, t)| (seat(s), card(t))).collect()
}

#[test]
fn left_bower_led_outranks_ace_of_trump() {
    // Hearts trump, Jack of Diamonds led: the left bower is second only to
    // the Jack of Hearts, so the Ace of Hearts does not take it.
    let ctx = TrumpContext::resolve(Suit::Hearts);
    let trick = plays([(0, "JD"), (1, "AH"), (2, "9C"), (3, "KD")]);
    assert_eq!(resolve_trick(&trick, seat(0), Some(&ctx)).unwrap(), seat(0));
}

#[test]
fn ace_of_trump_beats_lower_trump_and_lead_suit() {
    let ctx = TrumpContext::resolve(Suit::Hearts);
    let trick = plays([(0, "AD"), (1, "AH"), (2, "KH"), (3, "KD")]);
    assert_eq!(resolve_trick(&trick, seat(0), Some(&ctx)).unwrap(), seat(1));
}

#[test]
fn right_bower_beats_left_bower() {
    let ctx = TrumpContext::resolve(Suit::Hearts);
    let trick = plays([(2, "JD"), (3, "9S"), (0, "JH"), (1, "AH")]);
    assert_eq!(resolve_trick(&trick, seat(2), Some(&ctx)).unwrap(), seat(0));
}

#[test]
fn left_bower_not_grouped_with_its_printed_suit() {
    // Spades trump, ten of clubs led; the Jack of Clubs plays as a spade
    let ctx = TrumpContext::resolve(Suit::Spades);
    let mut trick = Trick::new(seat(0));
    trick.record(seat(0), card("TC")).unwrap();
    let hand = parse_cards(&["JC", "9C"]);
    assert_eq!(legal_plays(&hand, &trick, Some(&ctx)), parse_cards(&["9C"]));
}

#[test]
fn left_bower_trumps_its_printed_suit_when_void() {
    let ctx = TrumpContext::resolve(Suit::Spades);
    let trick = plays([(0, "TC"), (1, "AC"), (2, "JC"), (3, "KC")]);
    assert_eq!(resolve_trick(&trick, seat(0), Some(&ctx)).unwrap(), seat(2));
}

fn round_with_hands(hands: [&[&str]; 4], trump: Suit, dealer: u8) -> RoundState {
    let hands = hands.map(|h| Hand::from(parse_cards(h)));
    let mut round = RoundState::new(
        seat(dealer),
        DealtRound {
            hands,
            up_card: card("9D"),
        },
    );
    round.set_trump(seat(1), trump);
    round
}

#[test]
fn round_state_plays_a_full_trick() {
    let mut round = round_with_hands(
        [&["AS", "9H"], &["KS", "TH"], &["QS", "JH"], &["TS", "QH"]],
        Suit::Clubs,
        3,
    );
    assert_eq!(round.next_to_play(), Some(seat(0)));
    assert!(round.play_card(seat(0), card("AS")).unwrap().is_none());

    // Must follow spades
    let err = round.play_card(seat(1), card("TH")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::MustFollowSuit));
    let err = round.play_card(seat(2), card("QS")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::OutOfTurn));
    let err = round.play_card(seat(1), card("AD")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::CardNotInHand));

    round.play_card(seat(1), card("KS")).unwrap();
    round.play_card(seat(2), card("QS")).unwrap();
    let result = round.play_card(seat(3), card("TS")).unwrap().unwrap();
    assert_eq!(result.winner, seat(0));
    assert_eq!(result.trick_no, 1);
    assert_eq!(round.tricks_won, [1, 0]);
    // Winner leads next
    assert_eq!(round.next_to_play(), Some(seat(0)));
    assert_eq!(round.hand(seat(0)).cards(), parse_cards(&["9H"]).as_slice());
}

#[test]
fn set_trump_resorts_hands_with_bowers_first() {
    let round = round_with_hands(
        [&["AH", "JC", "9S", "JS", "KD"], &[], &[], &[]],
        Suit::Spades,
        3,
    );
    assert_eq!(
        round.hand(seat(0)).cards(),
        parse_cards(&["JS", "JC", "9S", "AH", "KD"]).as_slice()
    );
}
