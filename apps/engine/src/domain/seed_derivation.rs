//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every shuffle and every seeded strategy in a game is derived from a single
//! game seed, so a whole game replays exactly from that one number.

/// Seed for the face-up deal that picks the first dealer.
pub fn derive_dealer_search_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_add(0x5EED)
}

/// Seed for dealing a round's hands.
///
/// Unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed handed to a seat's strategy (e.g. `RandomPlayer`).
pub fn derive_strategy_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
