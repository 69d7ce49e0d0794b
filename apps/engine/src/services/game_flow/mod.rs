//! Round/game controller.
//!
//! `GameFlow` owns the `GameState` and drives it through
//! dealer search → deal → bidding → (pickup) → five tricks → scoring,
//! rotating the dealer after every round until a team reaches the winning
//! score. Decisions come from one `AiPlayer` per seat; the controller is the
//! only writer of state.

mod decks;
mod events;
mod orchestration;
mod player_actions;
mod round_lifecycle;

pub use decks::{DeckSupplier, SeededDecks, StackedDecks};
pub use events::{GameEvent, GameObserver, GameResult, NoopObserver, RecordingObserver, RoundSummary};
use thiserror::Error;

use crate::ai::{AiError, AiPlayer};
use crate::config::GameRules;
use crate::domain::rules::PLAYERS;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::GameState;
use crate::domain::Seat;
use crate::errors::domain::DomainError;

/// One strategy per seat, indexed by seat.
pub type Players = [Box<dyn AiPlayer>; PLAYERS];

#[derive(Debug, Error)]
pub enum GameFlowError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("AI error (seat {seat}, {action}): {source}")]
    Ai {
        seat: Seat,
        action: &'static str,
        source: AiError,
    },
    #[error("seat {seat} gave {attempts} invalid {action} decisions; last: {last}")]
    RetriesExhausted {
        seat: Seat,
        action: &'static str,
        attempts: u32,
        #[source]
        last: DomainError,
    },
    #[error("no team reached the winning score within {rounds} rounds")]
    RoundLimit { rounds: u32 },
}

pub struct GameFlow {
    rules: GameRules,
    decks: Box<dyn DeckSupplier>,
    state: GameState,
}

impl GameFlow {
    pub fn new(rules: GameRules, decks: Box<dyn DeckSupplier>) -> Self {
        Self {
            rules,
            decks,
            state: GameState::new(),
        }
    }

    /// All decks derived from `game_seed`.
    pub fn seeded(rules: GameRules, game_seed: u64) -> Self {
        Self::new(rules, Box::new(SeededDecks::new(game_seed)))
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.state)
    }

    fn emit(&self, observer: &mut dyn GameObserver, event: GameEvent) {
        observer.on_event(&event, &GameSnapshot::of(&self.state));
    }
}
