//! Player view of game state: what a seat can see at a decision point.
//!
//! `CurrentRoundInfo` is the interface between the controller and
//! [`crate::ai::AiPlayer`] implementations. Strategies should use its
//! helper methods instead of re-implementing the rules:
//!
//! - [`legal_trumps()`](CurrentRoundInfo::legal_trumps) - suits that may be named in the current bidding pass
//! - [`legal_plays()`](CurrentRoundInfo::legal_plays) - cards that satisfy follow-suit

use crate::domain::bidding::{legal_trump_calls, BidPass};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::TEAMS;
use crate::domain::seats::Seat;
use crate::domain::state::GameState;
use crate::domain::tricks::{legal_plays, Trick};
use crate::domain::trump::TrumpContext;
use crate::errors::domain::DomainError;

/// Information visible to one seat for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoundInfo {
    pub seat: Seat,
    pub dealer: Seat,
    pub round_no: u32,
    /// The seat's own cards, ordered under the current trump (if any).
    pub hand: Vec<Card>,
    pub up_card: Card,
    /// Set while bidding is in progress.
    pub bid_pass: Option<BidPass>,
    pub turned_down: Option<Suit>,
    pub trump: Option<TrumpContext>,
    pub caller: Option<Seat>,
    pub trick: Option<Trick>,
    pub tricks_won: [u8; TEAMS],
    pub scores: [u8; TEAMS],
}

impl CurrentRoundInfo {
    pub fn for_seat(state: &GameState, seat: Seat) -> Result<Self, DomainError> {
        let round = state.require_round("player view")?;
        let bid_pass = round.trump.is_none().then(|| round.bidding.pass());
        Ok(Self {
            seat,
            dealer: round.dealer,
            round_no: state.round_no,
            hand: round.hand(seat).cards().to_vec(),
            up_card: round.up_card,
            bid_pass,
            turned_down: round.bidding.turned_down(),
            trump: round.trump,
            caller: round.caller,
            trick: round.trick.clone(),
            tricks_won: round.tricks_won,
            scores: state.scores,
        })
    }

    /// Suits this seat may name now. Empty outside bidding; passing is
    /// always allowed in addition to these.
    pub fn legal_trumps(&self) -> Vec<Suit> {
        match self.bid_pass {
            Some(pass) => legal_trump_calls(pass, self.up_card),
            None => Vec::new(),
        }
    }

    /// Cards this seat may play into the current trick.
    pub fn legal_plays(&self) -> Vec<Card> {
        match &self.trick {
            Some(trick) => legal_plays(&self.hand, trick, self.trump.as_ref()),
            None => Vec::new(),
        }
    }

    pub fn is_dealer(&self) -> bool {
        self.seat == self.dealer
    }

    /// Whether this seat leads the current trick.
    pub fn is_leading(&self) -> bool {
        self.trick.as_ref().is_some_and(|t| t.play_count() == 0)
    }
}
