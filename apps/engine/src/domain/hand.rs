//! A seat's hand: owned cards, ordered for display under the current trump.

use serde::{Deserialize, Serialize};

use super::cards_logic::sort_hand;
use super::cards_types::Card;
use super::rules::HAND_SIZE;
use super::trump::TrumpContext;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Add a dealt card. A sixth card is a dealing fault.
    pub fn add_card(&mut self, card: Card) -> Result<(), DomainError> {
        if self.cards.len() >= HAND_SIZE {
            return Err(DomainError::structural(format!(
                "hand already holds {HAND_SIZE} cards, cannot add {card}"
            )));
        }
        if self.cards.contains(&card) {
            return Err(DomainError::structural(format!("duplicate card {card} in hand")));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove a played card, keeping the order of the rest.
    pub fn remove(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self.cards.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::invalid_decision(ValidationKind::CardNotInHand, format!("{card} not in hand"))
        })?;
        Ok(self.cards.remove(pos))
    }

    /// Dealer pickup: take `up_card` and drop `discard` (which may be the
    /// up-card itself). Size stays the same.
    pub fn exchange(&mut self, up_card: Card, discard: Card) -> Result<(), DomainError> {
        if discard == up_card {
            return Ok(());
        }
        let pos = self.cards.iter().position(|&c| c == discard).ok_or_else(|| {
            DomainError::invalid_decision(
                ValidationKind::CardNotInHand,
                format!("discard {discard} is neither in hand nor the up-card"),
            )
        })?;
        self.cards[pos] = up_card;
        Ok(())
    }

    /// Reorder by effective rank under `trump` (or the pre-bid grouping).
    pub fn sort(&mut self, trump: Option<&TrumpContext>) {
        sort_hand(&mut self.cards, trump);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
