//! Metrics collection and output for AI simulation results.

use euchre_engine::ai::registry::by_name;
use euchre_engine::domain::scoring::RoundOutcome;
use euchre_engine::RoundSummary;
use serde::Serialize;

use crate::simulator::SimulatedGame;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    /// Game seed as 16 hex digits.
    pub seed: String,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 4],
    /// `name@version` per seat.
    pub ai_labels: [String; 4],
    pub total_games: u32,
    pub winning_score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [u8; 2],
    /// Winning team index: 0 for seats 0+2, 1 for seats 1+3.
    pub winner: u8,
    pub rounds_played: u32,
    pub aborted_rounds: u32,
    pub marches: u32,
    pub euchres: u32,
    pub dealer_pickups: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub dealer: u8,
    pub caller: Option<u8>,
    pub trump: Option<String>,
    pub tricks_won: [u8; 2],
    pub outcome: Option<RoundOutcome>,
    /// Points by team index for this round.
    pub points: [u8; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub team: u8,
    pub tricks_won: u32,
    pub trump_calls: u32,
    pub passes: u32,
    /// Rounds this seat called trump and its team took at least three tricks.
    pub calls_made: u32,
    pub call_success_pct: f64,
}

/// Build metrics from a finished game.
#[allow(clippy::too_many_arguments)]
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    ai_types: [String; 4],
    total_games: u32,
    winning_score: u8,
    game: &SimulatedGame,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let result = &game.result;
    let all_rounds: Vec<RoundMetrics> = result.rounds.iter().map(build_round_metrics).collect();

    let player_metrics: Vec<PlayerMetrics> = (0..4)
        .map(|seat| build_player_metrics(seat as u8, &ai_types[seat], game, &all_rounds))
        .collect();

    let count_outcome = |outcome: RoundOutcome| {
        all_rounds
            .iter()
            .filter(|r| r.outcome == Some(outcome))
            .count() as u32
    };

    let result_metrics = GameResultMetrics {
        final_scores: result.scores,
        winner: result.winner.index() as u8,
        rounds_played: result.rounds.len() as u32,
        aborted_rounds: result.rounds.iter().filter(|r| r.aborted).count() as u32,
        marches: count_outcome(RoundOutcome::March),
        euchres: count_outcome(RoundOutcome::Euchred),
        dealer_pickups: game.tally.pickups,
        duration_ms,
    };

    let rounds = match level {
        MetricsLevel::Detailed => all_rounds,
        MetricsLevel::Basic => Vec::new(),
    };

    let ai_labels = ai_types.each_ref().map(|name| {
        by_name(name)
            .map(|factory| factory.label())
            .unwrap_or_else(|| name.clone())
    });

    GameMetrics {
        game_id,
        seed: hex::encode(seed.to_be_bytes()),
        timestamp,
        config: GameConfig {
            ai_types,
            ai_labels,
            total_games,
            winning_score,
        },
        result: result_metrics,
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundSummary) -> RoundMetrics {
    let mut points = [0u8; 2];
    if let Some(p) = round.points {
        points[p.team.index()] = p.points;
    }
    RoundMetrics {
        round_no: round.round_no,
        dealer: round.dealer.into(),
        caller: round.caller.map(u8::from),
        trump: round.trump.map(|t| format!("{:?}", t)),
        tricks_won: round.tricks_won,
        outcome: round.points.map(|p| p.outcome),
        points,
    }
}

fn build_player_metrics(
    seat: u8,
    ai_type: &str,
    game: &SimulatedGame,
    rounds: &[RoundMetrics],
) -> PlayerMetrics {
    let idx = seat as usize;
    // Seats 0 and 2 form team 0.
    let team = seat % 2;

    let calls_made = rounds
        .iter()
        .filter(|r| r.caller == Some(seat) && r.tricks_won[team as usize] >= 3)
        .count() as u32;
    let trump_calls = game.tally.trump_calls[idx];
    let call_success_pct = if trump_calls > 0 {
        (calls_made as f64 / trump_calls as f64) * 100.0
    } else {
        0.0
    };

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        team,
        tricks_won: game.tally.tricks_won[idx],
        trump_calls,
        passes: game.tally.passes[idx],
        calls_made,
        call_success_pct,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: String,
    pub winner: u8,
    pub team0_score: u8,
    pub team1_score: u8,
    pub rounds: u32,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed.clone(),
            winner: metrics.result.winner,
            team0_score: metrics.result.final_scores[0],
            team1_score: metrics.result.final_scores[1],
            rounds: metrics.result.rounds_played,
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
