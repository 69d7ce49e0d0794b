//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots carry every hand: they are meant for a host rendering the full
//! table (or recording a game), not for a seat's decision making.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::TEAMS;
use crate::domain::seats::Seat;
use crate::domain::state::{GameState, Phase};

/// Read-only view of the table after a state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round_no: u32,
    pub dealer: Option<Seat>,
    pub scores: [u8; TEAMS],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub up_card: Card,
    pub turned_down: Option<Suit>,
    pub trump: Option<Suit>,
    pub left_bower_suit: Option<Suit>,
    pub caller: Option<Seat>,
    pub hands: [Vec<Card>; 4],
    pub trick_lead: Option<Seat>,
    /// Cards in the trick in progress, in play order.
    pub trick: Vec<(Seat, Card)>,
    pub last_trick: Option<Vec<(Seat, Card)>>,
    pub tricks_won: [u8; TEAMS],
}

impl GameSnapshot {
    pub fn of(state: &GameState) -> Self {
        let round = state.round.as_ref().map(|r| RoundSnapshot {
            up_card: r.up_card,
            turned_down: r.bidding.turned_down(),
            trump: r.trump.map(|t| t.trump_suit()),
            left_bower_suit: r.trump.map(|t| t.left_bower_suit()),
            caller: r.caller,
            hands: r.hands.each_ref().map(|h| h.cards().to_vec()),
            trick_lead: r.trick.as_ref().map(|t| t.lead_seat()),
            trick: r.trick.as_ref().map(|t| t.plays()).unwrap_or_default(),
            last_trick: r.last_trick.clone(),
            tricks_won: r.tricks_won,
        });
        Self {
            phase: state.phase,
            round_no: state.round_no,
            dealer: state.dealer,
            scores: state.scores,
            round,
        }
    }
}
