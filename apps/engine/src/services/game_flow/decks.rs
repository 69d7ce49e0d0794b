//! Where each shuffled deck in a game comes from.

use std::collections::VecDeque;

use crate::domain::dealing::{DeckSource, ShuffledDeck};
use crate::domain::seed_derivation::{derive_dealer_search_seed, derive_dealing_seed};
use crate::domain::Card;

/// Supplies the deck for the dealer search and a fresh deck per round.
pub trait DeckSupplier {
    fn dealer_search_deck(&mut self) -> Box<dyn DeckSource>;

    fn round_deck(&mut self, round_no: u32) -> Box<dyn DeckSource>;
}

/// Every deck derived from one game seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededDecks {
    game_seed: u64,
}

impl SeededDecks {
    pub fn new(game_seed: u64) -> Self {
        Self { game_seed }
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }
}

impl DeckSupplier for SeededDecks {
    fn dealer_search_deck(&mut self) -> Box<dyn DeckSource> {
        Box::new(ShuffledDeck::from_seed(derive_dealer_search_seed(self.game_seed)))
    }

    fn round_deck(&mut self, round_no: u32) -> Box<dyn DeckSource> {
        Box::new(ShuffledDeck::from_seed(derive_dealing_seed(self.game_seed, round_no)))
    }
}

/// Pre-arranged decks dealt in order (replays, tests). Once the queue runs
/// out, rounds fall back to seeded shuffles.
#[derive(Debug, Clone)]
pub struct StackedDecks {
    dealer_search: Vec<Card>,
    rounds: VecDeque<Vec<Card>>,
    fallback: SeededDecks,
}

impl StackedDecks {
    pub fn new(dealer_search: Vec<Card>, rounds: Vec<Vec<Card>>, fallback_seed: u64) -> Self {
        Self {
            dealer_search,
            rounds: rounds.into(),
            fallback: SeededDecks::new(fallback_seed),
        }
    }
}

impl DeckSupplier for StackedDecks {
    fn dealer_search_deck(&mut self) -> Box<dyn DeckSource> {
        Box::new(ShuffledDeck::from_cards(self.dealer_search.clone()))
    }

    fn round_deck(&mut self, round_no: u32) -> Box<dyn DeckSource> {
        match self.rounds.pop_front() {
            Some(cards) => Box::new(ShuffledDeck::from_cards(cards)),
            None => self.fallback.round_deck(round_no),
        }
    }
}
