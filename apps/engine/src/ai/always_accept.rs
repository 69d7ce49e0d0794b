//! Always-accept AI: orders up whenever allowed and plays its strongest card.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::trump::effective_rank;
use crate::domain::{Card, Suit};

pub struct AlwaysAccept;

impl AlwaysAccept {
    pub const NAME: &'static str = "AlwaysAccept";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl Default for AlwaysAccept {
    fn default() -> Self {
        Self::new()
    }
}

impl AiPlayer for AlwaysAccept {
    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Option<Suit>, AiError> {
        // First pass: the up-card suit. Second pass: first suit not turned down.
        Ok(state.legal_trumps().first().copied())
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let trump = state.trump.as_ref();
        state
            .legal_plays()
            .into_iter()
            .min_by_key(|&c| effective_rank(c, trump))
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}
