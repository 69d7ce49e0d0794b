//! Random AI player - makes random legal decisions.
//!
//! Baseline for testing. Seeded instances are fully deterministic.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::{Card, Suit};

/// AI that chooses uniformly among legal options.
///
/// Passing counts as one option when bidding, so in the first pass it orders
/// up half of the time.
pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Option<Suit>, AiError> {
        let mut options: Vec<Option<Suit>> = state.legal_trumps().into_iter().map(Some).collect();
        options.push(None);

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random trump".into()))
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let legal_plays = state.legal_plays();
        if legal_plays.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }

    fn choose_discard(&self, state: &CurrentRoundInfo, picked_up: Card) -> Result<Card, AiError> {
        let mut candidates = state.hand.clone();
        candidates.push(picked_up);

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        candidates
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("No cards to discard".into()))
    }
}
