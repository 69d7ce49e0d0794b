//! Fixed table sizes for four-handed euchre.

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 24;
pub const HAND_SIZE: usize = 5;
pub const TRICKS_PER_ROUND: u8 = 5;

/// Cards per seat on each pass around the table, starting left of the dealer.
pub const DEAL_PATTERN: [[usize; PLAYERS]; 2] = [[3, 2, 3, 2], [2, 3, 2, 3]];

/// Points for a round, see `domain::scoring`.
pub const POINTS_MADE: u8 = 1;
pub const POINTS_MARCH: u8 = 2;
pub const POINTS_EUCHRE: u8 = 2;

/// Tricks the calling team needs to avoid being euchred.
pub const TRICKS_TO_MAKE: u8 = 3;
