//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_ordering;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{BidOutcome, BidPass};
pub use cards_logic::{card_beats, hand_has_suit, sort_hand};
pub use cards_types::{Card, Color, Rank, Suit};
pub use dealing::{DeckSource, ShuffledDeck};
pub use hand::Hand;
pub use player_view::CurrentRoundInfo;
pub use scoring::{RoundOutcome, RoundPoints};
pub use seats::{Seat, Team};
pub use snapshot::GameSnapshot;
pub use state::{GameState, Phase, RoundState};
pub use tricks::{legal_plays, resolve_trick, Trick};
pub use trump::{effective_rank, TrumpContext};
