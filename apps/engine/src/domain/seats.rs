//! Seat / team math helpers (4 fixed seats: 0..=3).
//!
//! Clockwise is positive: the seat "left of" another is `next()`.
//! Partnerships are derived, never stored: seat s partners s + 2.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::PLAYERS;
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Seat(u8);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Seats 0 and 2.
    NorthSouth,
    /// Seats 1 and 3.
    EastWest,
}

impl Seat {
    pub const ALL: [Seat; PLAYERS] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    pub fn new(index: u8) -> Result<Self, DomainError> {
        if (index as usize) < PLAYERS {
            Ok(Seat(index))
        } else {
            Err(DomainError::structural(format!("seat {index} out of range")))
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the seat `n` steps clockwise.
    #[inline]
    pub const fn offset(self, n: u8) -> Seat {
        Seat(((self.0 as usize + n as usize) % PLAYERS) as u8)
    }

    /// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
    #[inline]
    pub const fn next(self) -> Seat {
        self.offset(1)
    }

    #[inline]
    pub const fn partner(self) -> Seat {
        self.offset(2)
    }

    #[inline]
    pub const fn team(self) -> Team {
        if self.0 % 2 == 0 {
            Team::NorthSouth
        } else {
            Team::EastWest
        }
    }

    /// The four seats in play order starting at `self`.
    pub fn rotation(self) -> [Seat; PLAYERS] {
        [self, self.offset(1), self.offset(2), self.offset(3)]
    }
}

impl TryFrom<u8> for Seat {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Seat::new(value)
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Team {
    pub const ALL: [Team; 2] = [Team::NorthSouth, Team::EastWest];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::NorthSouth => 0,
            Team::EastWest => 1,
        }
    }

    pub const fn opponent(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Team::NorthSouth => [Seat(0), Seat(2)],
            Team::EastWest => [Seat(1), Seat(3)],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::NorthSouth => write!(f, "seats 0+2"),
            Team::EastWest => write!(f, "seats 1+3"),
        }
    }
}
