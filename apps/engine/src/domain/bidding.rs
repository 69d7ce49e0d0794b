//! Trump negotiation: two round-robin passes starting left of the dealer.
//!
//! Pass 1 (`UpCard`): a seat either orders up the up-card's suit or passes.
//! Pass 2 (`Open`): the up-card is turned down; a seat names any other suit
//! or passes. Eight passes in a row abort the round.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::rules::PLAYERS;
use super::seats::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BidPass {
    UpCard,
    Open,
}

/// Suits a seat may name in `pass` (passing is always allowed).
pub fn legal_trump_calls(pass: BidPass, up_card: Card) -> Vec<Suit> {
    match pass {
        BidPass::UpCard => vec![up_card.suit],
        BidPass::Open => Suit::ALL
            .into_iter()
            .filter(|&s| s != up_card.suit)
            .collect(),
    }
}

pub fn validate_trump_call(
    pass: BidPass,
    up_card: Card,
    call: Option<Suit>,
) -> Result<(), DomainError> {
    let Some(suit) = call else {
        return Ok(());
    };
    match pass {
        BidPass::UpCard if suit != up_card.suit => Err(DomainError::invalid_decision(
            ValidationKind::NotUpCardSuit,
            format!("only {} may be ordered up, got {suit}", up_card.suit),
        )),
        BidPass::Open if suit == up_card.suit => Err(DomainError::invalid_decision(
            ValidationKind::TurnedDownSuit,
            format!("{suit} was turned down"),
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// Bidding continues with the next seat.
    Pending,
    Called {
        caller: Seat,
        trump: Suit,
        pass: BidPass,
    },
    /// Everyone passed twice.
    Aborted,
}

/// Bidding progress for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidState {
    dealer: Seat,
    up_card: Card,
    pass: BidPass,
    passes_in_pass: u8,
    done: bool,
}

impl BidState {
    pub fn new(dealer: Seat, up_card: Card) -> Self {
        Self {
            dealer,
            up_card,
            pass: BidPass::UpCard,
            passes_in_pass: 0,
            done: false,
        }
    }

    pub fn pass(&self) -> BidPass {
        self.pass
    }

    pub fn up_card(&self) -> Card {
        self.up_card
    }

    /// Suit of the up-card once it has been turned down.
    pub fn turned_down(&self) -> Option<Suit> {
        (self.pass == BidPass::Open).then_some(self.up_card.suit)
    }

    pub fn expected_bidder(&self) -> Option<Seat> {
        (!self.done).then(|| self.dealer.offset(self.passes_in_pass + 1))
    }

    pub fn apply_bid(&mut self, seat: Seat, call: Option<Suit>) -> Result<BidOutcome, DomainError> {
        let expected = self
            .expected_bidder()
            .ok_or_else(|| DomainError::phase_mismatch("bidding already finished"))?;
        if seat != expected {
            return Err(DomainError::invalid_decision(
                ValidationKind::OutOfTurn,
                format!("seat {seat} bid but seat {expected} is due"),
            ));
        }
        validate_trump_call(self.pass, self.up_card, call)?;

        if let Some(trump) = call {
            self.done = true;
            return Ok(BidOutcome::Called {
                caller: seat,
                trump,
                pass: self.pass,
            });
        }

        self.passes_in_pass += 1;
        if (self.passes_in_pass as usize) < PLAYERS {
            return Ok(BidOutcome::Pending);
        }
        match self.pass {
            BidPass::UpCard => {
                self.pass = BidPass::Open;
                self.passes_in_pass = 0;
                Ok(BidOutcome::Pending)
            }
            BidPass::Open => {
                self.done = true;
                Ok(BidOutcome::Aborted)
            }
        }
    }
}
