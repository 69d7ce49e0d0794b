//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::trump::effective_rank;
use crate::domain::{Card, Suit};

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI decision timeout")]
    Timeout,
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A seat's decision strategy.
///
/// Every method receives the seat's [`CurrentRoundInfo`]. Use its
/// `legal_trumps()` / `legal_plays()` helpers; an answer outside those sets
/// is rejected by the controller and the same method is asked again.
pub trait AiPlayer: Send + Sync {
    /// Name a trump suit or pass (`None`).
    ///
    /// In the first pass only the up-card's suit may be named. In the second
    /// pass any suit except the turned-down one.
    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Option<Suit>, AiError>;

    /// Pick a card from `state.legal_plays()`.
    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError>;

    /// Dealer only: after taking `picked_up`, pick one of the six cards to
    /// discard. Defaults to the weakest card under the new trump.
    fn choose_discard(&self, state: &CurrentRoundInfo, picked_up: Card) -> Result<Card, AiError> {
        let trump = state.trump.as_ref();
        state
            .hand
            .iter()
            .copied()
            .chain(std::iter::once(picked_up))
            .max_by_key(|&c| effective_rank(c, trump))
            .ok_or_else(|| AiError::InvalidMove("nothing to discard".into()))
    }
}
