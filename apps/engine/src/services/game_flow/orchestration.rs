//! Whole-round and whole-game drivers composed from the lifecycle steps.

use tracing::info;

use super::events::{GameEvent, GameObserver, GameResult, RoundSummary};
use super::{GameFlow, GameFlowError, Players};
use crate::domain::bidding::BidPass;
use crate::domain::scoring::game_winner;
use crate::domain::state::Phase;

impl GameFlow {
    /// Play one round with the current dealer, then rotate the deal.
    ///
    /// Requires a dealer (see [`GameFlow::determine_dealer`]).
    pub fn play_round(
        &mut self,
        players: &Players,
        observer: &mut dyn GameObserver,
    ) -> Result<RoundSummary, GameFlowError> {
        self.deal(observer)?;
        let summary = match self.run_bidding(players, observer)? {
            None => self.abort(observer)?,
            Some(call) => {
                if call.pass == BidPass::UpCard && self.rules.dealer_picks_up {
                    self.pick_up(players, observer)?;
                }
                self.play_tricks(players, observer)?;
                self.score(call, observer)?
            }
        };
        self.finish_round()?;
        Ok(summary)
    }

    /// Play from dealer search to game over.
    pub fn run_game(
        &mut self,
        players: &Players,
        observer: &mut dyn GameObserver,
    ) -> Result<GameResult, GameFlowError> {
        self.determine_dealer(observer)?;
        let mut rounds = Vec::new();
        loop {
            if self.state.round_no >= self.rules.round_limit {
                return Err(GameFlowError::RoundLimit {
                    rounds: self.state.round_no,
                });
            }
            rounds.push(self.play_round(players, observer)?);

            let scores = self.state.scores;
            if let Some(winner) = game_winner(scores, self.rules.winning_score) {
                self.state.phase = Phase::GameOver;
                info!(winner = %winner, ?scores, rounds = rounds.len(), "game over");
                self.emit(observer, GameEvent::GameOver { winner, scores });
                return Ok(GameResult {
                    winner,
                    scores,
                    rounds,
                });
            }
        }
    }
}
