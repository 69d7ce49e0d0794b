//! Trick bookkeeping, the legal-play resolver and the trick resolver.

use serde::{Deserialize, Serialize};

use super::cards_logic::{card_beats, hand_has_suit};
use super::cards_types::{Card, Suit};
use super::rules::PLAYERS;
use super::seats::Seat;
use super::trump::{effective_suit, TrumpContext};
use crate::errors::domain::{DomainError, ValidationKind};

/// One trick in progress: a card slot per seat plus the lead seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    lead_seat: Seat,
    plays: [Option<Card>; PLAYERS],
}

impl Trick {
    pub fn new(lead_seat: Seat) -> Self {
        Self {
            lead_seat,
            plays: [None; PLAYERS],
        }
    }

    pub fn lead_seat(&self) -> Seat {
        self.lead_seat
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.plays[self.lead_seat.index()]
    }

    /// Suit the other seats must follow, with the left bower counted as trump.
    pub fn lead_suit(&self, trump: Option<&TrumpContext>) -> Option<Suit> {
        self.lead_card().map(|c| effective_suit(c, trump))
    }

    pub fn card_for(&self, seat: Seat) -> Option<Card> {
        self.plays[seat.index()]
    }

    pub fn play_count(&self) -> usize {
        self.plays.iter().flatten().count()
    }

    pub fn is_complete(&self) -> bool {
        self.play_count() == PLAYERS
    }

    /// Seat due to play next, or `None` once all four have played.
    pub fn next_to_act(&self) -> Option<Seat> {
        self.lead_seat
            .rotation()
            .into_iter()
            .find(|s| self.plays[s.index()].is_none())
    }

    /// Record `seat`'s card. Enforces turn order only; legality is checked
    /// against `legal_plays` by the caller.
    pub fn record(&mut self, seat: Seat, card: Card) -> Result<(), DomainError> {
        match self.next_to_act() {
            None => Err(DomainError::structural("trick already has four cards")),
            Some(expected) if expected != seat => Err(DomainError::invalid_decision(
                ValidationKind::OutOfTurn,
                format!("seat {seat} played but seat {expected} is due"),
            )),
            Some(_) => {
                self.plays[seat.index()] = Some(card);
                Ok(())
            }
        }
    }

    /// Played cards in play order from the lead seat.
    pub fn plays(&self) -> Vec<(Seat, Card)> {
        self.lead_seat
            .rotation()
            .into_iter()
            .filter_map(|s| self.plays[s.index()].map(|c| (s, c)))
            .collect()
    }

    pub fn winner(&self, trump: Option<&TrumpContext>) -> Result<Seat, DomainError> {
        resolve_trick(&self.plays(), self.lead_seat, trump)
    }

    /// Seat and card currently taking a partial trick.
    pub fn current_winner(&self, trump: Option<&TrumpContext>) -> Option<(Seat, Card)> {
        let lead = self.lead_suit(trump)?;
        self.plays().into_iter().reduce(|best, (seat, card)| {
            if card_beats(card, best.1, lead, trump) {
                (seat, card)
            } else {
                best
            }
        })
    }
}

/// Cards from `hand` that may be played into `trick`.
///
/// Leading: everything. Following: cards whose effective suit matches the
/// lead's effective suit. When none match, the whole hand. Hand order is kept.
pub fn legal_plays(hand: &[Card], trick: &Trick, trump: Option<&TrumpContext>) -> Vec<Card> {
    let Some(lead) = trick.lead_suit(trump) else {
        return hand.to_vec();
    };
    if !hand_has_suit(hand, lead, trump) {
        return hand.to_vec();
    }
    hand.iter()
        .copied()
        .filter(|&c| effective_suit(c, trump) == lead)
        .collect()
}

/// Winning seat of a complete trick.
///
/// Walks the table once from `lead_seat`; the first card is the provisional
/// winner and each later card replaces it only if `card_beats` says so. The
/// order of `plays` is irrelevant.
pub fn resolve_trick(
    plays: &[(Seat, Card)],
    lead_seat: Seat,
    trump: Option<&TrumpContext>,
) -> Result<Seat, DomainError> {
    let mut by_seat: [Option<Card>; PLAYERS] = [None; PLAYERS];
    for &(seat, card) in plays {
        if by_seat[seat.index()].replace(card).is_some() {
            return Err(DomainError::structural(format!(
                "seat {seat} played twice in one trick"
            )));
        }
    }
    if plays.len() != PLAYERS {
        return Err(DomainError::structural(format!(
            "trick resolved with {} cards",
            plays.len()
        )));
    }

    let mut order = lead_seat.rotation().into_iter();
    let first = order
        .next()
        .ok_or_else(|| DomainError::structural("empty rotation"))?;
    let lead_card = by_seat[first.index()]
        .ok_or_else(|| DomainError::structural(format!("lead seat {first} has no card")))?;
    let lead = effective_suit(lead_card, trump);

    let mut winner = (first, lead_card);
    for seat in order {
        let card = by_seat[seat.index()]
            .ok_or_else(|| DomainError::structural(format!("seat {seat} has no card")))?;
        if card_beats(card, winner.1, lead, trump) {
            winner = (seat, card);
        }
    }
    Ok(winner.0)
}
