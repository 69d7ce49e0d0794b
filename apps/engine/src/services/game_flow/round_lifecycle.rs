//! Round lifecycle: dealer search, dealing, bidding, pickup, tricks, scoring.

use tracing::{debug, info};

use super::events::{GameEvent, GameObserver, RoundSummary};
use super::{GameFlow, GameFlowError, Players};
use crate::domain::bidding::{BidOutcome, BidPass};
use crate::domain::dealing::{deal_round, determine_dealer};
use crate::domain::scoring::{apply_round_points, score_round};
use crate::domain::state::{Phase, RoundState};
use crate::domain::{Seat, Suit};
use crate::errors::domain::DomainError;

/// Who called what, once bidding succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TrumpCall {
    pub caller: Seat,
    pub trump: Suit,
    pub pass: BidPass,
}

impl GameFlow {
    /// Deal face-up until a black Jack shows; that seat deals first.
    pub fn determine_dealer(&mut self, observer: &mut dyn GameObserver) -> Result<Seat, GameFlowError> {
        let mut deck = self.decks.dealer_search_deck();
        let dealer = determine_dealer(deck.as_mut())?;
        self.state.dealer = Some(dealer);
        self.state.phase = Phase::DealCards;
        info!(dealer = dealer.index(), "dealer determined");
        self.emit(observer, GameEvent::DealerDetermined { dealer });
        Ok(dealer)
    }

    pub(super) fn deal(&mut self, observer: &mut dyn GameObserver) -> Result<(), GameFlowError> {
        let dealer = self.state.require_dealer("deal")?;
        self.state.round_no += 1;
        let round_no = self.state.round_no;
        self.state.phase = Phase::DealCards;

        let mut deck = self.decks.round_deck(round_no);
        let dealt = deal_round(deck.as_mut(), dealer)?;
        let up_card = dealt.up_card;
        self.state.round = Some(RoundState::new(dealer, dealt));
        self.state.phase = Phase::Bidding {
            pass: BidPass::UpCard,
        };
        info!(round_no, dealer = dealer.index(), up_card = %up_card, "round dealt");
        self.emit(
            observer,
            GameEvent::RoundDealt {
                round_no,
                dealer,
                up_card,
            },
        );
        Ok(())
    }

    /// Two passes around the table. `None` when everyone passed twice.
    pub(super) fn run_bidding(
        &mut self,
        players: &Players,
        observer: &mut dyn GameObserver,
    ) -> Result<Option<TrumpCall>, GameFlowError> {
        loop {
            let round = self.state.require_round("bidding")?;
            let pass = round.bidding.pass();
            let seat = round
                .bidding
                .expected_bidder()
                .ok_or_else(|| DomainError::structural("bidding finished without outcome"))?;

            let (call, outcome) = self.take_bid(players[seat.index()].as_ref(), seat)?;
            self.emit(observer, GameEvent::BidMade { seat, pass, call });

            match outcome {
                BidOutcome::Pending => {
                    let next_pass = self.state.require_round("bidding")?.bidding.pass();
                    self.state.phase = Phase::Bidding { pass: next_pass };
                }
                BidOutcome::Called {
                    caller,
                    trump,
                    pass,
                } => {
                    self.state.require_round_mut("trump")?.set_trump(caller, trump);
                    info!(caller = caller.index(), trump = %trump, ?pass, "trump called");
                    self.emit(observer, GameEvent::TrumpCalled { caller, trump, pass });
                    return Ok(Some(TrumpCall {
                        caller,
                        trump,
                        pass,
                    }));
                }
                BidOutcome::Aborted => return Ok(None),
            }
        }
    }

    pub(super) fn pick_up(
        &mut self,
        players: &Players,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameFlowError> {
        let round = self.state.require_round("pickup")?;
        let dealer = round.dealer;
        let up_card = round.up_card;
        let discard = self.take_discard(players[dealer.index()].as_ref(), dealer)?;
        debug!(dealer = dealer.index(), up_card = %up_card, discard = %discard, "dealer picked up");
        self.emit(
            observer,
            GameEvent::DealerPickedUp {
                dealer,
                up_card,
                discard,
            },
        );
        Ok(())
    }

    pub(super) fn play_tricks(
        &mut self,
        players: &Players,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameFlowError> {
        self.state.phase = Phase::Trick { trick_no: 1 };
        loop {
            let round = self.state.require_round("trick")?;
            if round.all_tricks_played() {
                return Ok(());
            }
            let seat = round
                .next_to_play()
                .ok_or_else(|| DomainError::structural("no seat due to play"))?;

            let (card, result) = self.take_play(players[seat.index()].as_ref(), seat)?;
            self.emit(observer, GameEvent::CardPlayed { seat, card });

            if let Some(result) = result {
                debug!(trick_no = result.trick_no, winner = result.winner.index(), "trick won");
                self.state.phase = Phase::Trick {
                    trick_no: (result.trick_no + 1).min(crate::domain::rules::TRICKS_PER_ROUND),
                };
                self.emit(
                    observer,
                    GameEvent::TrickWon {
                        trick_no: result.trick_no,
                        winner: result.winner,
                    },
                );
            }
        }
    }

    pub(super) fn score(
        &mut self,
        call: TrumpCall,
        observer: &mut dyn GameObserver,
    ) -> Result<RoundSummary, GameFlowError> {
        self.state.phase = Phase::Scoring;
        let round = self.state.require_round("scoring")?;
        let tricks_won = round.tricks_won;
        let dealer = round.dealer;
        let points = score_round(call.caller, tricks_won)?;
        apply_round_points(&mut self.state.scores, points);

        let round_no = self.state.round_no;
        let scores = self.state.scores;
        info!(
            round_no,
            team = %points.team,
            points = points.points,
            outcome = ?points.outcome,
            ?scores,
            "round scored"
        );
        self.emit(
            observer,
            GameEvent::RoundScored {
                round_no,
                points,
                scores,
            },
        );
        Ok(RoundSummary {
            round_no,
            dealer,
            caller: Some(call.caller),
            trump: Some(call.trump),
            tricks_won,
            points: Some(points),
            aborted: false,
        })
    }

    pub(super) fn abort(&mut self, observer: &mut dyn GameObserver) -> Result<RoundSummary, GameFlowError> {
        let dealer = self.state.require_dealer("abort")?;
        let round_no = self.state.round_no;
        info!(round_no, dealer = dealer.index(), "all passed, round aborted");
        self.emit(observer, GameEvent::RoundAborted { round_no, dealer });
        Ok(RoundSummary {
            round_no,
            dealer,
            caller: None,
            trump: None,
            tricks_won: [0, 0],
            points: None,
            aborted: true,
        })
    }

    /// Round over: drop the round state and pass the deal to the left.
    pub(super) fn finish_round(&mut self) -> Result<(), GameFlowError> {
        let dealer = self.state.require_dealer("finish_round")?;
        self.state.dealer = Some(dealer.next());
        self.state.round = None;
        self.state.phase = Phase::RoundOver;
        Ok(())
    }
}
