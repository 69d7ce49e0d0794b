//! Events emitted by the controller and the per-game records built from them.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::BidPass;
use crate::domain::scoring::RoundPoints;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::{Card, Seat, Suit, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    DealerDetermined {
        dealer: Seat,
    },
    RoundDealt {
        round_no: u32,
        dealer: Seat,
        up_card: Card,
    },
    BidMade {
        seat: Seat,
        pass: BidPass,
        call: Option<Suit>,
    },
    TrumpCalled {
        caller: Seat,
        trump: Suit,
        pass: BidPass,
    },
    DealerPickedUp {
        dealer: Seat,
        up_card: Card,
        discard: Card,
    },
    RoundAborted {
        round_no: u32,
        dealer: Seat,
    },
    CardPlayed {
        seat: Seat,
        card: Card,
    },
    TrickWon {
        trick_no: u8,
        winner: Seat,
    },
    RoundScored {
        round_no: u32,
        points: RoundPoints,
        scores: [u8; 2],
    },
    GameOver {
        winner: Team,
        scores: [u8; 2],
    },
}

/// Receives every event together with the table state right after it.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, snapshot: &GameSnapshot);
}

pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_event(&mut self, _event: &GameEvent, _snapshot: &GameSnapshot) {}
}

/// Keeps everything it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<GameEvent>,
    pub snapshots: Vec<GameSnapshot>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameObserver for RecordingObserver {
    fn on_event(&mut self, event: &GameEvent, snapshot: &GameSnapshot) {
        self.events.push(event.clone());
        self.snapshots.push(snapshot.clone());
    }
}

/// One round as it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u32,
    pub dealer: Seat,
    pub caller: Option<Seat>,
    pub trump: Option<Suit>,
    pub tricks_won: [u8; 2],
    pub points: Option<RoundPoints>,
    /// Everyone passed twice; no tricks were played.
    pub aborted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Team,
    pub scores: [u8; 2],
    pub rounds: Vec<RoundSummary>,
}
