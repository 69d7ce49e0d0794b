//! Domain-level error type used by the rules engine and the game flow.
//!
//! Three families exist:
//! - `InvalidDecision`: a strategy returned something the rules reject. The
//!   controller re-requests the decision from the same strategy.
//! - `Structural` / `ExhaustedDeck`: an internal invariant broke. These abort
//!   the game.
//! - Parsing and phase errors raised at the API boundary.

use thiserror::Error;

/// What kind of decision was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A suit was named that was turned down with the up-card.
    TurnedDownSuit,
    /// During the first bidding pass only the up-card's suit may be called.
    NotUpCardSuit,
    /// The card does not satisfy the follow-suit rule.
    MustFollowSuit,
    /// The card is not held by the acting seat.
    CardNotInHand,
    /// The seat acted out of turn.
    OutOfTurn,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Rejected strategy decision; recoverable by asking again.
    #[error("invalid decision ({kind:?}): {detail}")]
    InvalidDecision { kind: ValidationKind, detail: String },
    /// Broken internal invariant (rule tables misapplied).
    #[error("structural violation: {0}")]
    Structural(String),
    /// More cards were requested than the deck holds.
    #[error("deck exhausted after {dealt} cards")]
    ExhaustedDeck { dealt: usize },
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("phase mismatch: {0}")]
    PhaseMismatch(String),
}

impl DomainError {
    pub fn invalid_decision(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::InvalidDecision {
            kind,
            detail: detail.into(),
        }
    }

    pub fn structural(detail: impl Into<String>) -> Self {
        Self::Structural(detail.into())
    }

    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::PhaseMismatch(detail.into())
    }

    /// Only rejected decisions may be retried; everything else is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DomainError::InvalidDecision { .. })
    }

    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::InvalidDecision { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
