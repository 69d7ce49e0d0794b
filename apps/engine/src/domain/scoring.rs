use serde::{Deserialize, Serialize};

use super::rules::{POINTS_EUCHRE, POINTS_MADE, POINTS_MARCH, TEAMS, TRICKS_PER_ROUND, TRICKS_TO_MAKE};
use super::seats::{Seat, Team};
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Calling team took 3 or 4 tricks.
    Made,
    /// Calling team took all 5.
    March,
    /// Calling team took fewer than 3.
    Euchred,
}

/// Points awarded at the end of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPoints {
    pub team: Team,
    pub points: u8,
    pub outcome: RoundOutcome,
}

/// Score a finished round. `tricks_won` is indexed by `Team::index()` and
/// must sum to five.
pub fn score_round(caller: Seat, tricks_won: [u8; TEAMS]) -> Result<RoundPoints, DomainError> {
    let total: u8 = tricks_won.iter().sum();
    if total != TRICKS_PER_ROUND {
        return Err(DomainError::structural(format!(
            "round scored with {total} tricks"
        )));
    }
    let calling = caller.team();
    let taken = tricks_won[calling.index()];
    let points = if taken == TRICKS_PER_ROUND {
        RoundPoints {
            team: calling,
            points: POINTS_MARCH,
            outcome: RoundOutcome::March,
        }
    } else if taken >= TRICKS_TO_MAKE {
        RoundPoints {
            team: calling,
            points: POINTS_MADE,
            outcome: RoundOutcome::Made,
        }
    } else {
        RoundPoints {
            team: calling.opponent(),
            points: POINTS_EUCHRE,
            outcome: RoundOutcome::Euchred,
        }
    };
    Ok(points)
}

pub fn apply_round_points(scores: &mut [u8; TEAMS], points: RoundPoints) {
    let slot = &mut scores[points.team.index()];
    *slot = slot.saturating_add(points.points);
}

/// The team that has reached `winning_score`, if any. Only one team scores
/// per round, so at most one can cross on any given round.
pub fn game_winner(scores: [u8; TEAMS], winning_score: u8) -> Option<Team> {
    Team::ALL
        .into_iter()
        .find(|t| scores[t.index()] >= winning_score)
}
