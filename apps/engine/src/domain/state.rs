use serde::{Deserialize, Serialize};

use crate::domain::bidding::{BidOutcome, BidPass, BidState};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::DealtRound;
use crate::domain::hand::Hand;
use crate::domain::rules::{PLAYERS, TEAMS, TRICKS_PER_ROUND};
use crate::domain::seats::Seat;
use crate::domain::tricks::{legal_plays, Trick};
use crate::domain::trump::TrumpContext;
use crate::errors::domain::{DomainError, ValidationKind};

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase")]
pub enum Phase {
    /// Game created, dealer not yet chosen.
    Init,
    DealCards,
    Bidding { pass: BidPass },
    /// Playing tricks within the round; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    Scoring,
    /// Round finished (scored or aborted); dealer about to rotate.
    RoundOver,
    GameOver,
}

/// Result of a completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    pub trick_no: u8,
    pub winner: Seat,
    pub plays: Vec<(Seat, Card)>,
}

/// Per-round state: hands, bidding, trump and trick play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub dealer: Seat,
    pub hands: [Hand; PLAYERS],
    pub up_card: Card,
    pub bidding: BidState,
    pub trump: Option<TrumpContext>,
    pub caller: Option<Seat>,
    pub trick: Option<Trick>,
    pub last_trick: Option<Vec<(Seat, Card)>>,
    pub tricks_played: u8,
    /// Indexed by `Team::index()`.
    pub tricks_won: [u8; TEAMS],
}

impl RoundState {
    pub fn new(dealer: Seat, dealt: DealtRound) -> Self {
        let DealtRound { mut hands, up_card } = dealt;
        for hand in hands.iter_mut() {
            hand.sort(None);
        }
        Self {
            dealer,
            hands,
            up_card,
            bidding: BidState::new(dealer, up_card),
            trump: None,
            caller: None,
            trick: None,
            last_trick: None,
            tricks_played: 0,
            tricks_won: [0; TEAMS],
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn record_bid(&mut self, seat: Seat, call: Option<Suit>) -> Result<BidOutcome, DomainError> {
        if self.trump.is_some() {
            return Err(DomainError::phase_mismatch("trump already agreed"));
        }
        self.bidding.apply_bid(seat, call)
    }

    /// Fix trump for the round, re-sort every hand and open the first trick
    /// left of the dealer.
    pub fn set_trump(&mut self, caller: Seat, trump_suit: Suit) {
        let ctx = TrumpContext::resolve(trump_suit);
        for hand in self.hands.iter_mut() {
            hand.sort(Some(&ctx));
        }
        self.trump = Some(ctx);
        self.caller = Some(caller);
        self.trick = Some(Trick::new(self.dealer.next()));
    }

    /// Dealer takes the up-card and drops `discard`.
    pub fn dealer_pickup(&mut self, discard: Card) -> Result<(), DomainError> {
        let up = self.up_card;
        let trump = self.trump;
        let hand = &mut self.hands[self.dealer.index()];
        hand.exchange(up, discard)?;
        hand.sort(trump.as_ref());
        Ok(())
    }

    pub fn next_to_play(&self) -> Option<Seat> {
        self.trick.as_ref().and_then(Trick::next_to_act)
    }

    pub fn legal_plays_for(&self, seat: Seat) -> Vec<Card> {
        match &self.trick {
            Some(trick) => legal_plays(self.hand(seat).cards(), trick, self.trump.as_ref()),
            None => Vec::new(),
        }
    }

    /// Play a card, enforcing turn, ownership and follow-suit. Returns the
    /// trick result when this card completes a trick.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<Option<TrickResult>, DomainError> {
        let Some(trick) = self.trick.as_ref() else {
            return Err(DomainError::phase_mismatch("no trick in progress"));
        };
        if let Some(due) = trick.next_to_act() {
            if due != seat {
                return Err(DomainError::invalid_decision(
                    ValidationKind::OutOfTurn,
                    format!("seat {seat} played but seat {due} is due"),
                ));
            }
        }
        if !self.hand(seat).contains(card) {
            return Err(DomainError::invalid_decision(
                ValidationKind::CardNotInHand,
                format!("seat {seat} does not hold {card}"),
            ));
        }
        if !self.legal_plays_for(seat).contains(&card) {
            return Err(DomainError::invalid_decision(
                ValidationKind::MustFollowSuit,
                format!("{card} does not follow the lead"),
            ));
        }

        self.hands[seat.index()].remove(card)?;
        let trick = self
            .trick
            .as_mut()
            .ok_or_else(|| DomainError::structural("trick vanished mid-play"))?;
        trick.record(seat, card)?;
        if !trick.is_complete() {
            return Ok(None);
        }

        let winner = trick.winner(self.trump.as_ref())?;
        let plays = trick.plays();
        self.tricks_played += 1;
        self.tricks_won[winner.team().index()] += 1;
        self.last_trick = Some(plays.clone());
        self.trick = (self.tricks_played < TRICKS_PER_ROUND).then(|| Trick::new(winner));
        Ok(Some(TrickResult {
            trick_no: self.tricks_played,
            winner,
            plays,
        }))
    }

    pub fn all_tricks_played(&self) -> bool {
        self.tricks_played == TRICKS_PER_ROUND
    }
}

/// Entire game container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// 1-based once the first round is dealt.
    pub round_no: u32,
    pub dealer: Option<Seat>,
    /// Cumulative points, indexed by `Team::index()`.
    pub scores: [u8; TEAMS],
    pub round: Option<RoundState>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            round_no: 0,
            dealer: None,
            scores: [0; TEAMS],
            round: None,
        }
    }

    pub fn require_round(&self, ctx: &'static str) -> Result<&RoundState, DomainError> {
        self.round
            .as_ref()
            .ok_or_else(|| DomainError::structural(format!("no round in progress ({ctx})")))
    }

    pub fn require_round_mut(&mut self, ctx: &'static str) -> Result<&mut RoundState, DomainError> {
        self.round
            .as_mut()
            .ok_or_else(|| DomainError::structural(format!("no round in progress ({ctx})")))
    }

    pub fn require_dealer(&self, ctx: &'static str) -> Result<Seat, DomainError> {
        self.dealer
            .ok_or_else(|| DomainError::structural(format!("dealer must be set ({ctx})")))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
