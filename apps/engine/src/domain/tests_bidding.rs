use crate::domain::bidding::{legal_trump_calls, validate_trump_call, BidOutcome, BidPass, BidState};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::seats::Seat;
use crate::errors::domain::ValidationKind;

fn seat(i: u8) -> Seat {
    Seat::new(i).unwrap()
}

fn up() -> Card {
    "QH".parse().unwrap()
}

#[test]
fn first_pass_only_offers_up_card_suit() {
    assert_eq!(legal_trump_calls(BidPass::UpCard, up()), vec![Suit::Hearts]);
    let err = validate_trump_call(BidPass::UpCard, up(), Some(Suit::Spades)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NotUpCardSuit));
}

#[test]
fn turned_down_suit_is_never_reselectable() {
    let open = legal_trump_calls(BidPass::Open, up());
    assert_eq!(open.len(), 3);
    assert!(!open.contains(&Suit::Hearts));
    let err = validate_trump_call(BidPass::Open, up(), Some(Suit::Hearts)).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(err.validation_kind(), Some(&ValidationKind::TurnedDownSuit));
}

#[test]
fn passing_is_always_legal() {
    assert!(validate_trump_call(BidPass::UpCard, up(), None).is_ok());
    assert!(validate_trump_call(BidPass::Open, up(), None).is_ok());
}

#[test]
fn bidding_starts_left_of_dealer_and_wraps() {
    let mut bids = BidState::new(seat(2), up());
    let order: Vec<Seat> = (0..4)
        .map(|_| {
            let s = bids.expected_bidder().unwrap();
            assert_eq!(bids.apply_bid(s, None).unwrap(), BidOutcome::Pending);
            s
        })
        .collect();
    assert_eq!(order, vec![seat(3), seat(0), seat(1), seat(2)]);
    assert_eq!(bids.pass(), BidPass::Open);
    assert_eq!(bids.turned_down(), Some(Suit::Hearts));
    assert_eq!(bids.expected_bidder(), Some(seat(3)));
}

#[test]
fn order_up_ends_bidding() {
    let mut bids = BidState::new(seat(0), up());
    assert_eq!(bids.apply_bid(seat(1), None).unwrap(), BidOutcome::Pending);
    let outcome = bids.apply_bid(seat(2), Some(Suit::Hearts)).unwrap();
    assert_eq!(
        outcome,
        BidOutcome::Called {
            caller: seat(2),
            trump: Suit::Hearts,
            pass: BidPass::UpCard
        }
    );
    assert_eq!(bids.expected_bidder(), None);
    assert!(bids.apply_bid(seat(3), None).is_err());
}

#[test]
fn second_pass_call_names_other_suit() {
    let mut bids = BidState::new(seat(0), up());
    for s in [1, 2, 3, 0, 1] {
        bids.apply_bid(seat(s), None).unwrap();
    }
    // Rejected call leaves the turn unchanged
    assert!(bids.apply_bid(seat(2), Some(Suit::Hearts)).is_err());
    assert_eq!(bids.expected_bidder(), Some(seat(2)));
    let outcome = bids.apply_bid(seat(2), Some(Suit::Clubs)).unwrap();
    assert!(matches!(
        outcome,
        BidOutcome::Called {
            trump: Suit::Clubs,
            pass: BidPass::Open,
            ..
        }
    ));
}

#[test]
fn eight_passes_abort_the_round() {
    let mut bids = BidState::new(seat(3), up());
    let mut last = BidOutcome::Pending;
    for _ in 0..8 {
        let s = bids.expected_bidder().unwrap();
        last = bids.apply_bid(s, None).unwrap();
    }
    assert_eq!(last, BidOutcome::Aborted);
    assert_eq!(bids.expected_bidder(), None);
}

#[test]
fn out_of_turn_bid_is_rejected() {
    let mut bids = BidState::new(seat(0), up());
    let err = bids.apply_bid(seat(0), None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::OutOfTurn));
}
