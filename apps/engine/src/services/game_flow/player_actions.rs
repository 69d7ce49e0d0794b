//! Asking a seat's strategy for a decision and applying it.
//!
//! A decision the rules reject is logged and asked for again, up to
//! `max_decision_retries` extra attempts. Strategy errors and structural
//! faults end the game immediately.

use tracing::{debug, warn};

use super::{GameFlow, GameFlowError};
use crate::ai::AiPlayer;
use crate::domain::bidding::BidOutcome;
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::state::TrickResult;
use crate::domain::{Card, Seat, Suit};

/// Run `attempt` until it succeeds, retrying only recoverable domain errors.
pub(super) fn with_retries<T>(
    max_retries: u8,
    seat: Seat,
    action: &'static str,
    mut attempt: impl FnMut() -> Result<T, GameFlowError>,
) -> Result<T, GameFlowError> {
    let attempts = u32::from(max_retries) + 1;
    let mut tries = 0;
    loop {
        tries += 1;
        match attempt() {
            Err(GameFlowError::Domain(err)) if err.is_recoverable() => {
                warn!(seat = seat.index(), action, attempt = tries, error = %err, "decision rejected");
                if tries >= attempts {
                    return Err(GameFlowError::RetriesExhausted {
                        seat,
                        action,
                        attempts: tries,
                        last: err,
                    });
                }
            }
            other => return other,
        }
    }
}

impl GameFlow {
    pub(super) fn view(&self, seat: Seat) -> Result<CurrentRoundInfo, GameFlowError> {
        Ok(CurrentRoundInfo::for_seat(&self.state, seat)?)
    }

    /// Ask `seat` to name trump or pass, and record the bid.
    pub(super) fn take_bid(
        &mut self,
        player: &dyn AiPlayer,
        seat: Seat,
    ) -> Result<(Option<Suit>, BidOutcome), GameFlowError> {
        let retries = self.rules.max_decision_retries;
        with_retries(retries, seat, "trump", || {
            let info = self.view(seat)?;
            let call = player
                .choose_trump(&info)
                .map_err(|source| GameFlowError::Ai {
                    seat,
                    action: "trump",
                    source,
                })?;
            let outcome = self.state.require_round_mut("bid")?.record_bid(seat, call)?;
            debug!(seat = seat.index(), call = ?call, "bid");
            Ok((call, outcome))
        })
    }

    /// Dealer takes the up-card and discards one of the six cards.
    pub(super) fn take_discard(
        &mut self,
        player: &dyn AiPlayer,
        dealer: Seat,
    ) -> Result<Card, GameFlowError> {
        let retries = self.rules.max_decision_retries;
        with_retries(retries, dealer, "discard", || {
            let info = self.view(dealer)?;
            let up_card = info.up_card;
            let discard = player
                .choose_discard(&info, up_card)
                .map_err(|source| GameFlowError::Ai {
                    seat: dealer,
                    action: "discard",
                    source,
                })?;
            self.state.require_round_mut("discard")?.dealer_pickup(discard)?;
            Ok(discard)
        })
    }

    /// Ask `seat` for a card and play it into the current trick.
    pub(super) fn take_play(
        &mut self,
        player: &dyn AiPlayer,
        seat: Seat,
    ) -> Result<(Card, Option<TrickResult>), GameFlowError> {
        let retries = self.rules.max_decision_retries;
        with_retries(retries, seat, "play", || {
            let info = self.view(seat)?;
            let card = player.choose_play(&info).map_err(|source| GameFlowError::Ai {
                seat,
                action: "play",
                source,
            })?;
            let result = self.state.require_round_mut("play")?.play_card(seat, card)?;
            debug!(seat = seat.index(), card = %card, "card played");
            Ok((card, result))
        })
    }
}
