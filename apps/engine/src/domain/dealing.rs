//! Deck source capability, the seeded shuffle, dealer search and the deal.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use super::cards_types::{Card, Rank, Suit};
use super::hand::Hand;
use super::rules::{DEAL_PATTERN, DECK_SIZE, HAND_SIZE, PLAYERS};
use super::seats::Seat;
use crate::errors::domain::DomainError;

/// The 24-card Euchre deck in canonical order (suit-major, 9 up to Ace).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// A supply of cards dealt one at a time. Exhaustible, never repeats a card.
pub trait DeckSource {
    fn deal_one(&mut self) -> Result<Card, DomainError>;

    fn remaining(&self) -> usize;
}

/// A fixed card sequence dealt front to back.
#[derive(Debug, Clone)]
pub struct ShuffledDeck {
    cards: Vec<Card>,
    next: usize,
}

impl ShuffledDeck {
    /// Full deck shuffled with ChaCha20 seeded from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut cards = full_deck();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self { cards, next: 0 }
    }

    /// Stacked deck: cards are dealt in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }

    pub fn dealt(&self) -> usize {
        self.next
    }
}

impl DeckSource for ShuffledDeck {
    fn deal_one(&mut self) -> Result<Card, DomainError> {
        let card = self
            .cards
            .get(self.next)
            .copied()
            .ok_or(DomainError::ExhaustedDeck { dealt: self.next })?;
        self.next += 1;
        Ok(card)
    }

    fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}

/// Deal face-up around the table from seat 0 until a black Jack shows.
/// The seat that receives it deals first.
pub fn determine_dealer(deck: &mut dyn DeckSource) -> Result<Seat, DomainError> {
    let mut seat = Seat::ALL[0];
    loop {
        let card = deck.deal_one()?;
        if card.is_black_jack() {
            debug!(seat = seat.index(), card = %card, "black jack found");
            return Ok(seat);
        }
        seat = seat.next();
    }
}

/// Hands for the four seats plus the face-up card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtRound {
    pub hands: [Hand; PLAYERS],
    pub up_card: Card,
}

/// Deal 5 cards each, starting left of the dealer, in packets of 3-2-3-2
/// then 2-3-2-3. The 21st card becomes the up-card.
pub fn deal_round(deck: &mut dyn DeckSource, dealer: Seat) -> Result<DealtRound, DomainError> {
    let mut hands: [Hand; PLAYERS] = Default::default();
    for packets in DEAL_PATTERN {
        for (i, &count) in packets.iter().enumerate() {
            let seat = dealer.offset(i as u8 + 1);
            for _ in 0..count {
                hands[seat.index()].add_card(deck.deal_one()?)?;
            }
        }
    }
    if let Some(short) = hands.iter().position(|h| h.len() != HAND_SIZE) {
        return Err(DomainError::structural(format!(
            "seat {short} dealt {} cards",
            hands[short].len()
        )));
    }
    let up_card = deck.deal_one()?;
    Ok(DealtRound { hands, up_card })
}
