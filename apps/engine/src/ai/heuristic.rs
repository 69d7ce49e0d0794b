//! Heuristic: a simple deterministic euchre baseline.
//!
//! Bidding:
//! - Count the cards that would be trump for each callable suit, bowers
//!   included. As dealer in the first pass the up-card counts too, since the
//!   dealer picks it up.
//! - Call when at least three would be trump; in the second pass pick the
//!   suit with the most.
//!
//! Play:
//! - Lead the strongest card.
//! - Following: if the partner is already taking the trick, shed the weakest
//!   legal card. Otherwise play the strongest legal card when one can take
//!   the trick, else shed the weakest.
//!
//! No randomness is used. The call threshold can be tuned through the
//! `call_threshold` config field (1 to 5).

use super::config::AiConfig;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::cards_logic::card_beats;
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::trump::{effective_rank, TrumpContext};
use crate::domain::{BidPass, Card, Suit};

/// Trump count needed before calling.
const CALL_THRESHOLD: usize = 3;

#[derive(Debug, Clone)]
pub struct Heuristic {
    call_threshold: usize,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self {
            call_threshold: CALL_THRESHOLD,
        }
    }

    /// Reads `call_threshold`; missing or out-of-range values keep the default.
    pub fn from_config(config: &AiConfig) -> Self {
        let call_threshold = config
            .get_custom("call_threshold")
            .and_then(|v| v.as_u64())
            .filter(|n| (1..=5).contains(n))
            .map_or(CALL_THRESHOLD, |n| n as usize);
        Self { call_threshold }
    }

    pub fn call_threshold(&self) -> usize {
        self.call_threshold
    }

    fn trump_count(cards: &[Card], suit: Suit) -> usize {
        let ctx = TrumpContext::resolve(suit);
        cards.iter().filter(|&&c| ctx.is_trump(c)).count()
    }

    fn strongest(cards: &[Card], trump: Option<&TrumpContext>) -> Option<Card> {
        cards.iter().copied().min_by_key(|&c| effective_rank(c, trump))
    }

    fn weakest(cards: &[Card], trump: Option<&TrumpContext>) -> Option<Card> {
        cards.iter().copied().max_by_key(|&c| effective_rank(c, trump))
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl AiPlayer for Heuristic {
    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Option<Suit>, AiError> {
        let mut cards = state.hand.clone();
        if state.bid_pass == Some(BidPass::UpCard) && state.is_dealer() {
            cards.push(state.up_card);
        }
        let best = state
            .legal_trumps()
            .into_iter()
            .map(|suit| (Self::trump_count(&cards, suit), suit))
            .filter(|&(count, _)| count >= self.call_threshold)
            .max_by_key(|&(count, _)| count);
        Ok(best.map(|(_, suit)| suit))
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        let trump = state.trump.as_ref();
        let no_play = || AiError::InvalidMove("No legal plays available".into());

        let Some(trick) = state.trick.as_ref() else {
            return Err(AiError::InvalidMove("No trick in progress".into()));
        };
        let (Some((winning_seat, winning_card)), Some(lead)) =
            (trick.current_winner(trump), trick.lead_suit(trump))
        else {
            // Leading
            return Self::strongest(&legal, trump).ok_or_else(no_play);
        };

        if winning_seat == state.seat.partner() {
            return Self::weakest(&legal, trump).ok_or_else(no_play);
        }
        let can_win = legal
            .iter()
            .any(|&c| card_beats(c, winning_card, lead, trump));
        if can_win {
            Self::strongest(&legal, trump).ok_or_else(no_play)
        } else {
            Self::weakest(&legal, trump).ok_or_else(no_play)
        }
    }
}
