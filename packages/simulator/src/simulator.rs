//! In-memory game runner for AI evaluation.
//!
//! Each game is driven by the engine's `GameFlow`; a tally observer collects
//! per-seat counts from the event stream while the game runs.

use std::fmt;

use euchre_engine::domain::seed_derivation::derive_strategy_seed;
use euchre_engine::domain::snapshot::GameSnapshot;
use euchre_engine::domain::Seat;
use euchre_engine::{
    create_ai, AiPlayer, GameEvent, GameFlow, GameFlowError, GameObserver, GameResult,
    GameRules, Players,
};
use serde_json::json;
use tracing::debug;

const PLAYERS: usize = 4;

#[derive(Debug)]
pub enum SimulatorError {
    UnknownAi(String),
    Game(GameFlowError),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::UnknownAi(name) => write!(f, "Unknown AI type: {name}"),
            SimulatorError::Game(e) => write!(f, "Game error: {e}"),
        }
    }
}

impl std::error::Error for SimulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulatorError::UnknownAi(_) => None,
            SimulatorError::Game(e) => Some(e),
        }
    }
}

impl From<GameFlowError> for SimulatorError {
    fn from(e: GameFlowError) -> Self {
        SimulatorError::Game(e)
    }
}

/// Per-seat counts gathered from the event stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatTally {
    pub tricks_won: [u32; PLAYERS],
    pub trump_calls: [u32; PLAYERS],
    pub passes: [u32; PLAYERS],
    pub cards_played: [u32; PLAYERS],
    pub pickups: u32,
}

impl GameObserver for SeatTally {
    fn on_event(&mut self, event: &GameEvent, _snapshot: &GameSnapshot) {
        match event {
            GameEvent::TrickWon { winner, .. } => self.tricks_won[winner.index()] += 1,
            GameEvent::BidMade { seat, call, .. } => {
                if call.is_some() {
                    self.trump_calls[seat.index()] += 1;
                } else {
                    self.passes[seat.index()] += 1;
                }
            }
            GameEvent::CardPlayed { seat, .. } => self.cards_played[seat.index()] += 1,
            GameEvent::DealerPickedUp { .. } => self.pickups += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedGame {
    pub result: GameResult,
    pub tally: SeatTally,
}

pub struct Simulator {
    rules: GameRules,
    game_seed: u64,
    game_id: u32,
}

impl Simulator {
    pub fn new(rules: GameRules, game_seed: u64, game_id: u32) -> Self {
        Self {
            rules,
            game_seed,
            game_id,
        }
    }

    /// Strategies for the four seats, each seeded from the game seed.
    pub fn build_players(&self, ai_names: &[String; PLAYERS]) -> Result<Players, SimulatorError> {
        let [a, b, c, d] = Seat::ALL.map(|seat| self.create_player(&ai_names[seat.index()], seat));
        Ok([a?, b?, c?, d?])
    }

    fn create_player(&self, name: &str, seat: Seat) -> Result<Box<dyn AiPlayer>, SimulatorError> {
        let config = json!({ "seed": derive_strategy_seed(self.game_seed, seat.into()) });
        create_ai(name, Some(&config)).ok_or_else(|| SimulatorError::UnknownAi(name.to_string()))
    }

    pub fn simulate_game(&self, ai_names: &[String; PLAYERS]) -> Result<SimulatedGame, SimulatorError> {
        let players = self.build_players(ai_names)?;
        let mut flow = GameFlow::seeded(self.rules.clone(), self.game_seed);
        let mut tally = SeatTally::default();
        let result = flow.run_game(&players, &mut tally)?;
        debug!(
            game_id = self.game_id,
            rounds = result.rounds.len(),
            scores = ?result.scores,
            "simulated game finished"
        );
        Ok(SimulatedGame { result, tally })
    }
}
