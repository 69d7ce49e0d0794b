//! Euchre simulator CLI - runs whole games in memory to compare AI strategies.
//!
//! Every game is seeded; with `--seed` the run is fully reproducible, game
//! `n` using `seed + n - 1`.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use euchre_engine::telemetry::init_tracing;
use euchre_engine::GameRules;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{SimulatedGame, Simulator};
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "euchre-simulator")]
#[command(about = "Fast in-memory Euchre simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Base game seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Points needed to win (overrides EUCHRE_WINNING_SCORE)
    #[arg(long)]
    winning_score: Option<u8>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(filter, args.log_json);

    let mut rules = GameRules::from_env()?;
    if let Some(score) = args.winning_score {
        rules.winning_score = score;
    }
    rules.validate()?;

    if args.show_output {
        info!("Starting Euchre simulator");
        info!("Configuration: {} games, winning score {}", args.games, rules.winning_score);
    }

    let seat_types = if let Some(seats_ai) = args.seats {
        [
            seats_ai.clone(),
            seats_ai.clone(),
            seats_ai.clone(),
            seats_ai,
        ]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };
    let ai_types: [String; 4] = seat_types.map(|t| t.name().to_string());

    if args.show_output {
        info!(
            "AI types: seat0={}, seat1={}, seat2={}, seat3={}",
            ai_types[0], ai_types[1], ai_types[2], ai_types[3]
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir.display());
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num - 1));
        let simulator = Simulator::new(rules.clone(), game_seed, game_num);

        match simulator.simulate_game(&ai_types) {
            Ok(game) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    ai_types.clone(),
                    args.games,
                    rules.winning_score,
                    &game,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(
                        "Game {} completed: scores={:?}, rounds={}",
                        game_num,
                        game.result.scores,
                        game.result.rounds.len()
                    );
                }
                results.push(game);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} (seed {:016x}) failed: {}", game_num, game_seed, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (games_path, csv_path) = output_writer.output_paths();
    let (games_path, csv_path) = (games_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", games_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &ai_types, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[SimulatedGame],
    ai_types: &[String; 4],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let games = results.len() as f64;
    let mut team_wins = [0u32; 2];
    let mut total_scores = [0u64; 2];
    let mut rounds = 0usize;
    let mut tricks = [0u64; 4];
    let mut calls = [0u64; 4];

    for game in results {
        team_wins[game.result.winner.index()] += 1;
        for (team, &score) in game.result.scores.iter().enumerate() {
            total_scores[team] += u64::from(score);
        }
        rounds += game.result.rounds.len();
        for seat in 0..4 {
            tricks[seat] += u64::from(game.tally.tricks_won[seat]);
            calls[seat] += u64::from(game.tally.trump_calls[seat]);
        }
    }

    println!("Average rounds per game: {:.1}", rounds as f64 / games);

    println!("\n=== Results by Team ===");
    for team in 0..2 {
        println!(
            "Seats {}+{}: wins={} ({:.1}%), avg score={:.1}",
            team,
            team + 2,
            team_wins[team],
            team_wins[team] as f64 / games * 100.0,
            total_scores[team] as f64 / games
        );
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..4 {
        println!(
            "Seat {} ({}): tricks/game={:.2}, calls/game={:.2}",
            seat,
            ai_types[seat],
            tricks[seat] as f64 / games,
            calls[seat] as f64 / games
        );
    }
}
